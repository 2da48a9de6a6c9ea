//! Page geometry normalization: rotation and CropBox.
//!
//! Derives the user-visible page size (top-left origin, after `/Rotate` and
//! CropBox are applied) from the raw page boxes. Crop coordinates are
//! expressed in this visible space, and it is also the space a rasterizer
//! renders, so both halves of the pipeline agree on what `width` and
//! `height` mean.

use pdfcrop_core::geometry::BBox;

/// Visible page dimensions derived from MediaBox, CropBox, and rotation.
///
/// # Example
///
/// ```
/// use pdfcrop_core::geometry::BBox;
/// use pdfcrop_parse::page_geometry::PageGeometry;
///
/// // US Letter page, no crop, no rotation
/// let media_box = BBox::new(0.0, 0.0, 612.0, 792.0);
/// let geo = PageGeometry::new(media_box, None, 0);
///
/// assert_eq!(geo.width(), 612.0);
/// assert_eq!(geo.height(), 792.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    rotation: i32,
    display_width: f64,
    display_height: f64,
}

impl PageGeometry {
    /// Create a new `PageGeometry` from page metadata.
    ///
    /// # Arguments
    ///
    /// * `media_box` - Page MediaBox as raw PDF coordinates in a [`BBox`].
    ///   The BBox fields map to PDF array values:
    ///   `x0` = left, `top` = y-min (PDF bottom), `x1` = right, `bottom` = y-max (PDF top).
    /// * `crop_box` - Optional CropBox (same coordinate convention as MediaBox).
    ///   If `None`, MediaBox is used as the visible viewport. The CropBox is
    ///   intersected with the MediaBox, as viewers do.
    /// * `rotation` - Page `/Rotate` value. Normalized to 0, 90, 180, or 270;
    ///   values that are not a multiple of 90 are treated as 0.
    pub fn new(media_box: BBox, crop_box: Option<BBox>, rotation: i32) -> Self {
        let rotation = normalize_rotation(rotation);

        let media = normalized(media_box);
        let visible = match crop_box.map(normalized) {
            Some(crop) => BBox::new(
                crop.x0.max(media.x0),
                crop.top.max(media.top),
                crop.x1.min(media.x1),
                crop.bottom.min(media.bottom),
            ),
            None => media,
        };

        let native_width = visible.width().max(0.0);
        let native_height = visible.height().max(0.0);

        let (display_width, display_height) = match rotation {
            90 | 270 => (native_height, native_width),
            _ => (native_width, native_height),
        };

        Self {
            rotation,
            display_width,
            display_height,
        }
    }

    /// Visible page width after rotation and cropping.
    pub fn width(&self) -> f64 {
        self.display_width
    }

    /// Visible page height after rotation and cropping.
    pub fn height(&self) -> f64 {
        self.display_height
    }

    /// Page rotation in degrees (normalized to 0, 90, 180, or 270).
    pub fn rotation(&self) -> i32 {
        self.rotation
    }
}

/// Normalize a `/Rotate` value to 0, 90, 180, or 270.
pub fn normalize_rotation(rotation: i32) -> i32 {
    let rotation = rotation.rem_euclid(360);
    if rotation % 90 == 0 { rotation } else { 0 }
}

/// Reorder box corners so that `x0 <= x1` and `top <= bottom`.
///
/// PDF allows any two opposite corners in a box array.
fn normalized(b: BBox) -> BBox {
    BBox::new(
        b.x0.min(b.x1),
        b.top.min(b.bottom),
        b.x0.max(b.x1),
        b.top.max(b.bottom),
    )
}
