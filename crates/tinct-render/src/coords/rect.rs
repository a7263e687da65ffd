use super::Vec2;

/// Axis-aligned rectangle stored as min/max corners (top-left origin).
///
/// GUI clip rects arrive as `[x1, y1, x2, y2]`, so the corner form is kept
/// rather than origin + size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            min: Vec2::new(x1, y1),
            max: Vec2::new(x2, y2),
        }
    }

    #[inline]
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { min: origin, max: origin + size }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Moves both corners by `-offset`, then scales them componentwise.
    ///
    /// This is the display-space → framebuffer-space conversion.
    #[inline]
    pub fn to_framebuffer(self, offset: Vec2, scale: Vec2) -> Self {
        Self {
            min: (self.min - offset) * scale,
            max: (self.max - offset) * scale,
        }
    }

    /// Swaps corners so that `min <= max` on both axes.
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            min: Vec2::new(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            max: Vec2::new(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        }
    }

    /// Returns whether the rect overlaps `[0, size)` on both axes.
    #[inline]
    pub fn overlaps_extent(self, size: Vec2) -> bool {
        self.min.x < size.x && self.min.y < size.y && self.max.x > 0.0 && self.max.y > 0.0
    }
}
