//! Geometric primitives.

/// A size in 2D space represented by width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    w: f32,
    h: f32,
}

impl Size {
    /// Build a size from width and height
    pub const fn new(w: f32, h: f32) -> Self {
        Size { w, h }
    }

    /// The width
    pub const fn width(&self) -> f32 {
        self.w
    }

    /// The height
    pub const fn height(&self) -> f32 {
        self.h
    }

    /// Whether both dimensions are finite and strictly positive
    pub fn is_valid(&self) -> bool {
        self.w.is_finite() && self.h.is_finite() && self.w > 0.0 && self.h > 0.0
    }

    /// The size in pixels at the given resolution, if this size is in inches
    pub fn to_pixels(&self, dpi: f32) -> Size {
        Size::new(self.w * dpi, self.h * dpi)
    }
}

impl From<(f32, f32)> for Size {
    fn from((w, h): (f32, f32)) -> Self {
        Size::new(w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(Size::new(5.0, 3.0).is_valid());
        assert!(!Size::new(0.0, 3.0).is_valid());
        assert!(!Size::new(5.0, -1.0).is_valid());
        assert!(!Size::new(f32::NAN, 3.0).is_valid());
        assert_eq!(Size::from((2.0, 1.5)).to_pixels(100.0), Size::new(200.0, 150.0));
    }
}
