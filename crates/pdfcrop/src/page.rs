//! Page-level geometry exposed by an open [`Document`](crate::Document).

use pdfcrop_core::BBox;
use pdfcrop_parse::PageGeometry;

/// One page of an open document, described by its visible geometry.
///
/// `width` and `height` are measured in points after the CropBox and
/// `/Rotate` have been applied. This is the coordinate space a
/// [`Crop`](crate::Crop) is expressed in, with the origin at the top-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    /// 0-based page index.
    pub index: usize,
    /// Visible width in points.
    pub width: f64,
    /// Visible height in points.
    pub height: f64,
    /// Rotation in degrees, one of 0, 90, 180, 270.
    pub rotation: i32,
    /// Raw MediaBox array values.
    pub media_box: BBox,
    /// Raw CropBox array values, when the page sets one.
    pub crop_box: Option<BBox>,
}

impl Page {
    pub(crate) fn new(
        index: usize,
        media_box: BBox,
        crop_box: Option<BBox>,
        rotation: i32,
    ) -> Self {
        let geometry = PageGeometry::new(media_box, crop_box, rotation);
        Self {
            index,
            width: geometry.width(),
            height: geometry.height(),
            rotation: geometry.rotation(),
            media_box,
            crop_box,
        }
    }

    /// The whole visible page as a top-left origin box.
    pub fn bbox(&self) -> BBox {
        BBox::new(0.0, 0.0, self.width, self.height)
    }

    /// 1-based page number, as shown to users.
    pub fn page_number(&self) -> usize {
        self.index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_uses_rotated_crop_box_dimensions() {
        let page = Page::new(
            2,
            BBox::new(0.0, 0.0, 612.0, 792.0),
            Some(BBox::new(36.0, 36.0, 576.0, 756.0)),
            -90,
        );
        assert_eq!(page.width, 720.0);
        assert_eq!(page.height, 540.0);
        assert_eq!(page.rotation, 270);
        assert_eq!(page.page_number(), 3);
        assert_eq!(page.bbox(), BBox::new(0.0, 0.0, 720.0, 540.0));
    }

    #[test]
    fn page_keeps_raw_boxes() {
        let media = BBox::new(0.0, 0.0, 300.0, 400.0);
        let page = Page::new(0, media, None, 0);
        assert_eq!(page.media_box, media);
        assert_eq!(page.crop_box, None);
    }
}
