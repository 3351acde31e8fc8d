//! Screen capture for the overlay: pick the first available screen, shrink
//! it to a thumbnail and hand it back as a PNG data URL.

use base64::{Engine as _, engine::general_purpose};
use image::{RgbaImage, imageops::FilterType};
use thiserror::Error;
use xcap::Monitor;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Screen capture failed: {0}")]
    Capture(#[from] xcap::XCapError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Capture source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, CaptureError>;

/// One screen that can be captured.
pub trait ScreenSource {
    fn name(&self) -> String;
    fn capture(&self) -> Result<RgbaImage>;
}

/// Enumerates the screens currently available for capture.
pub trait ScreenSources {
    type Source: ScreenSource;

    fn sources(&self) -> Result<Vec<Self::Source>>;
}

/// Screens as reported by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemScreens;

impl ScreenSources for SystemScreens {
    type Source = Monitor;

    fn sources(&self) -> Result<Vec<Monitor>> {
        Ok(Monitor::all()?)
    }
}

impl ScreenSource for Monitor {
    fn name(&self) -> String {
        self.name().unwrap_or_default()
    }

    fn capture(&self) -> Result<RgbaImage> {
        Ok(self.capture_image()?)
    }
}

/// Upper bound for the encoded thumbnail; the aspect ratio is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ThumbnailSize {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screenshot {
    pub data_url: String,
}

pub fn take_screenshot() -> Result<Option<Screenshot>> {
    take_screenshot_from(&SystemScreens, ThumbnailSize::default())
}

/// Capture the first source, or `None` when there is nothing to capture.
pub fn take_screenshot_from(
    screens: &impl ScreenSources,
    size: ThumbnailSize,
) -> Result<Option<Screenshot>> {
    let Some(source) = screens.sources()?.into_iter().next() else {
        tracing::debug!("No capture source available");
        return Ok(None);
    };

    tracing::debug!(source = %source.name(), "Capturing screen");
    let image = thumbnail(source.capture()?, size);
    let data_url = rgba_to_base64(&image)?;

    Ok(Some(Screenshot { data_url }))
}

/// Scale `image` down to fit inside `size`. Smaller images, and any image
/// when `size` has a zero side, are returned as is.
pub fn thumbnail(image: RgbaImage, size: ThumbnailSize) -> RgbaImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || size.width == 0 || size.height == 0 {
        return image;
    }
    if width <= size.width && height <= size.height {
        return image;
    }

    let scale = f64::min(
        size.width as f64 / width as f64,
        size.height as f64 / height as f64,
    );
    let target_width = ((width as f64 * scale).round() as u32).clamp(1, size.width);
    let target_height = ((height as f64 * scale).round() as u32).clamp(1, size.height);

    image::imageops::resize(&image, target_width, target_height, FilterType::Triangle)
}

pub fn rgba_to_base64(image: &RgbaImage) -> Result<String> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);

    image.write_to(&mut cursor, image::ImageFormat::Png)?;

    let base64 = general_purpose::STANDARD.encode(&buffer);
    Ok(format!("data:image/png;base64,{}", base64))
}
