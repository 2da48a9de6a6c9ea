/// Bounding box with top-left origin coordinate system.
///
/// Coordinates are in page units (points, 1/72 inch):
/// - `x0`: left edge
/// - `top`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `bottom`: bottom edge (distance from top of page)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether the box encloses no area (zero or negative width or height).
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Whether `other` lies entirely inside this box (edges may touch).
    pub fn contains(&self, other: &BBox) -> bool {
        other.x0 >= self.x0
            && other.top >= self.top
            && other.x1 <= self.x1
            && other.bottom <= self.bottom
    }

    /// Grow every side outward by `amount` units.
    pub fn expand(&self, amount: f64) -> BBox {
        BBox {
            x0: self.x0 - amount,
            top: self.top - amount,
            x1: self.x1 + amount,
            bottom: self.bottom + amount,
        }
    }

    /// Clamp the box to a `width` x `height` page anchored at the origin.
    ///
    /// Only the outer edges move: `x0` and `top` are raised to 0, `x1` and
    /// `bottom` are lowered to the page extent. A box lying entirely off the
    /// page comes back inverted, which [`BBox::is_empty`] reports.
    pub fn clamp_to(&self, width: f64, height: f64) -> BBox {
        BBox {
            x0: self.x0.max(0.0),
            top: self.top.max(0.0),
            x1: self.x1.min(width),
            bottom: self.bottom.min(height),
        }
    }
}
