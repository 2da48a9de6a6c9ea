//! Shared test utilities for crop integration tests.
//!
//! Provides in-memory PDF fixtures built with lopdf and rasterizers that
//! produce predictable pixels without a native PDF renderer.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use image::{Rgba, RgbaImage};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use pdfcrop::{BBox, PdfError, RasterRequest, Rasterizer};

// ─── PDF fixtures ───────────────────────────────────────────────────────────

/// Description of one page in a generated PDF.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    pub media_box: [f64; 4],
    pub crop_box: Option<[f64; 4]>,
    pub rotate: Option<i64>,
}

impl PageSpec {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            media_box: [0.0, 0.0, width, height],
            crop_box: None,
            rotate: None,
        }
    }

    pub fn letter() -> Self {
        Self::sized(612.0, 792.0)
    }

    pub fn with_crop_box(mut self, crop_box: [f64; 4]) -> Self {
        self.crop_box = Some(crop_box);
        self
    }

    pub fn with_rotate(mut self, rotate: i64) -> Self {
        self.rotate = Some(rotate);
        self
    }
}

fn reals(values: [f64; 4]) -> Vec<Object> {
    values.iter().map(|&v| Object::Real(v as f32)).collect()
}

/// Build a PDF whose pages each draw a filled rectangle.
pub fn pdf_bytes(pages: &[PageSpec]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for page_spec in pages {
        let content = Stream::new(
            dictionary! {},
            b"0.2 0.4 0.8 rg 20 20 100 100 re f".to_vec(),
        );
        let content_id = doc.add_object(content);

        let mut page: Dictionary = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => reals(page_spec.media_box),
            "Contents" => content_id,
        };
        if let Some(crop_box) = page_spec.crop_box {
            page.set("CropBox", reals(crop_box));
        }
        if let Some(rotate) = page_spec.rotate {
            page.set("Rotate", rotate);
        }
        kids.push(doc.add_object(page).into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

/// Write a generated PDF into `dir` and return its path.
pub fn write_pdf(dir: &Path, name: &str, pages: &[PageSpec]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, pdf_bytes(pages)).expect("failed to write test PDF");
    path
}

// ─── Rasterizers ────────────────────────────────────────────────────────────

pub const FILL: Rgba<u8> = Rgba([40, 90, 200, 255]);

/// Fills the requested region with a single color and records each request.
#[derive(Debug, Default)]
pub struct SolidRasterizer {
    calls: AtomicUsize,
    regions: Mutex<Vec<BBox>>,
}

impl SolidRasterizer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn regions(&self) -> Vec<BBox> {
        self.regions.lock().unwrap().clone()
    }
}

impl Rasterizer for SolidRasterizer {
    fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RgbaImage, PdfError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.regions.lock().unwrap().push(request.region);
        let (width, height) = request.pixel_size();
        Ok(RgbaImage::from_pixel(width, height, FILL))
    }
}

/// Always fails, as a renderer without a usable backend would.
#[derive(Debug, Default)]
pub struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, _request: &RasterRequest<'_>) -> Result<RgbaImage, PdfError> {
        tracing::warn!("rasterizer about to fail");
        Err(PdfError::RenderError("no renderer available".to_string()))
    }
}
