//! Screen resolutions in pixels.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A screen resolution in pixels.
///
/// Both dimensions are strictly positive; [`ScreenSize::new`] rejects zero.
/// That invariant is what lets [`aspect_ratio`](ScreenSize::aspect_ratio) be
/// infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    width: u32,
    height: u32,
}

impl ScreenSize {
    /// Create a screen size from pixel dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyScreen`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyScreen { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels, always positive.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels, always positive.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height as `f64`.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_positive_dimensions() -> Result<(), GeometryError> {
        let screen = ScreenSize::new(1920, 1080)?;
        assert_eq!(screen.width(), 1920);
        assert_eq!(screen.height(), 1080);
        Ok(())
    }

    #[test]
    fn test_new_rejects_zero_width() {
        assert_eq!(
            ScreenSize::new(0, 1080),
            Err(GeometryError::EmptyScreen {
                width: 0,
                height: 1080,
            })
        );
    }

    #[test]
    fn test_new_rejects_zero_height() {
        assert!(ScreenSize::new(1920, 0).is_err());
    }

    #[test]
    fn test_sixteen_by_nine_ratio() -> Result<(), GeometryError> {
        let screen = ScreenSize::new(1920, 1080)?;
        assert!((screen.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_portrait_ratio_is_below_one() -> Result<(), GeometryError> {
        let screen = ScreenSize::new(1080, 1920)?;
        assert!(screen.aspect_ratio() < 1.0);
        Ok(())
    }
}
