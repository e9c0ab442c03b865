/// Surface size in logical pixels.
///
/// The overlay shaders divide by it to reach NDC; the surface pass uses
/// [`aspect`](Self::aspect) for its projection.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height, or 1 for a degenerate viewport.
    #[inline]
    pub fn aspect(self) -> f32 {
        if self.is_valid() { self.width / self.height } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_valid_viewport() {
        assert_eq!(Viewport::new(1600.0, 800.0).aspect(), 2.0);
    }

    #[test]
    fn degenerate_viewport_has_unit_aspect() {
        assert_eq!(Viewport::new(0.0, 800.0).aspect(), 1.0);
        assert_eq!(Viewport::new(800.0, f32::NAN).aspect(), 1.0);
    }
}
