use std::path::Path;

use image::{DynamicImage, GenericImageView};

/// Pinch-to-zoom scale for the photo view.
///
/// The scale tracks the gesture's raw magnification value with no floor or
/// ceiling, so degenerate values (zero, extremely large) are representable.
/// Product has not confirmed clamping, so none is applied here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    scale: f64,
}

impl ZoomState {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Continuous gesture update: the displayed scale becomes the raw
    /// magnification factor.
    pub fn pinch_changed(&mut self, magnification: f64) {
        self.scale = magnification;
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// Full-screen photo content: a decoded image scaled to fit the viewport,
/// with pinch-to-zoom on top.
///
/// Zoom state is freshly constructed with the view, so it resets each time
/// the photo is reopened.
pub struct PhotoView {
    image: DynamicImage,
    placeholder: bool,
    zoom: ZoomState,
}

impl PhotoView {
    /// Decode the image at `path`. A file that is missing or fails to
    /// decode yields an empty placeholder rather than an error.
    pub fn load(path: &Path) -> Self {
        match image::open(path) {
            Ok(image) => Self::from_image(image),
            Err(e) => {
                log::warn!("failed to decode {}: {}", path.display(), e);
                Self {
                    image: DynamicImage::new_rgba8(0, 0),
                    placeholder: true,
                    zoom: ZoomState::default(),
                }
            }
        }
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image,
            placeholder: false,
            zoom: ZoomState::default(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    pub fn pinch_changed(&mut self, magnification: f64) {
        self.zoom.pinch_changed(magnification);
    }

    /// Base scale that fits the image inside `viewport` with its aspect
    /// ratio preserved. An empty placeholder fits at 1.0.
    pub fn fit_scale(&self, viewport: (f64, f64)) -> f64 {
        let (w, h) = self.dimensions();
        if w == 0 || h == 0 {
            return 1.0;
        }
        (viewport.0 / w as f64).min(viewport.1 / h as f64)
    }

    /// Displayed size in the viewport: fit-to-viewport base scale
    /// multiplied by the raw pinch magnification.
    pub fn display_size(&self, viewport: (f64, f64)) -> (f64, f64) {
        let (w, h) = self.dimensions();
        let scale = self.fit_scale(viewport) * self.zoom.scale;
        (w as f64 * scale, h as f64 * scale)
    }
}
