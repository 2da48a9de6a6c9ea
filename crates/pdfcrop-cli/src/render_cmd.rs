use std::io::Write;
use std::path::Path;

use pdfcrop::{BBox, Crop, OpenOptions, PdfiumRasterizer, RasterConfig, Renderer};

use crate::shared::report;

/// Arguments of one `render` invocation.
#[derive(Debug)]
pub struct RenderArgs<'a> {
    pub file: &'a Path,
    /// 1-indexed, as typed by the user.
    pub page: u32,
    pub bbox: BBox,
    pub padding: u32,
    pub resolution: u32,
    pub output: &'a Path,
    pub pdfium_dir: Option<&'a Path>,
}

impl RenderArgs<'_> {
    /// Build the crop this invocation describes.
    pub fn crop(&self) -> Result<Crop, i32> {
        let page_number = self.page.checked_sub(1).ok_or_else(|| {
            eprintln!("Error: page 0 is invalid (pages start at 1)");
            1
        })?;
        Crop::new(
            self.file,
            page_number as usize,
            self.bbox.x0,
            self.bbox.x1,
            self.bbox.top,
            self.bbox.bottom,
        )
        .and_then(|crop| crop.with_padding(self.padding).with_resolution(self.resolution))
        .map_err(report)
    }

    fn writes_stdout(&self) -> bool {
        self.output == Path::new("-")
    }
}

pub fn run(args: &RenderArgs<'_>, options: OpenOptions) -> Result<(), i32> {
    if !args.file.exists() {
        eprintln!("Error: file not found: {}", args.file.display());
        return Err(1);
    }
    let crop = args.crop()?;

    let config = match args.pdfium_dir {
        Some(dir) => RasterConfig::default().with_library_dir(dir),
        None => RasterConfig::default(),
    };
    tracing::debug!(library_dir = ?args.pdfium_dir, "rendering through pdfium");
    let renderer = Renderer::with_options(PdfiumRasterizer::new(config), options);
    let rendered = renderer.render(&crop).map_err(report)?;

    if args.writes_stdout() {
        let png = rendered.to_png().map_err(report)?;
        write_stdout(&png).map_err(|e| {
            eprintln!("Error: failed to write PNG to stdout: {e}");
            1
        })?;
    } else {
        rendered.save(args.output).map_err(report)?;
        tracing::info!(output = %args.output.display(), "saved crop");
        println!(
            "{} ({}x{} px at {} dpi)",
            args.output.display(),
            rendered.width(),
            rendered.height(),
            rendered.resolution()
        );
    }

    Ok(())
}

fn write_stdout(png: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(png)?;
    stdout.flush()
}
