use std::io::Write;
use std::path::Path;

use pdfcrop::{BBox, OpenOptions, Page};

use crate::cli::InfoFormat;
use crate::shared::{open_document, resolve_pages};

fn format_bbox(b: &BBox) -> String {
    format!("[{:.2}, {:.2}, {:.2}, {:.2}]", b.x0, b.top, b.x1, b.bottom)
}

fn page_to_json(page: &Page) -> Result<serde_json::Value, i32> {
    let mut value = serde_json::to_value(page).map_err(|e| {
        eprintln!("Error: failed to serialize page {}: {e}", page.page_number());
        1
    })?;
    value["page"] = serde_json::json!(page.page_number());
    Ok(value)
}

fn write_json(mut out: impl Write, value: &serde_json::Value) -> Result<(), i32> {
    serde_json::to_writer_pretty(&mut out, value)
        .map_err(std::io::Error::from)
        .and_then(|()| writeln!(out))
        .and_then(|()| out.flush())
        .map_err(|e| {
            eprintln!("Error: failed to write page info: {e}");
            1
        })
}

pub fn run(
    file: &Path,
    pages: Option<&str>,
    format: &InfoFormat,
    options: &OpenOptions,
) -> Result<(), i32> {
    let doc = open_document(file, options)?;
    let page_count = doc.page_count();
    let page_indices = resolve_pages(pages, page_count)?;

    let mut page_infos = Vec::with_capacity(page_indices.len());
    for idx in page_indices {
        let page = doc.page(idx).map_err(|e| {
            eprintln!("Error reading page {}: {e}", idx + 1);
            1
        })?;
        page_infos.push(page);
    }
    doc.close();
    tracing::info!(
        file = %file.display(),
        page_count,
        selected = page_infos.len(),
        "read page geometry"
    );

    match format {
        InfoFormat::Text => {
            println!("Pages: {page_count}");
            for page in &page_infos {
                println!("Page {}:", page.page_number());
                println!("  Dimensions: {:.2} x {:.2}", page.width, page.height);
                println!("  Rotation: {}°", page.rotation);
                println!("  MediaBox: {}", format_bbox(&page.media_box));
                if let Some(ref cb) = page.crop_box {
                    println!("  CropBox: {}", format_bbox(cb));
                }
            }
        }
        InfoFormat::Json => {
            let pages = page_infos
                .iter()
                .map(page_to_json)
                .collect::<Result<Vec<_>, i32>>()?;
            let output = serde_json::json!({
                "page_count": page_count,
                "pages": pages,
            });
            write_json(std::io::stdout().lock(), &output)?;
        }
    }

    Ok(())
}
