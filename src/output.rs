//! Handing a finished canvas to an image encoder.

use std::path::PathBuf;

use image::ImageError;

use crate::render::Canvas;

/// Destination for a finished, already flipped canvas.
pub trait ImageSink {
    type Error;

    fn write(&mut self, canvas: &Canvas) -> Result<(), Self::Error>;
}

/// Writes the canvas to a file; the format comes from the file extension.
#[derive(Debug, Clone)]
pub struct ImageFile {
    path: PathBuf,
}

impl ImageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSink for ImageFile {
    type Error = ImageError;

    fn write(&mut self, canvas: &Canvas) -> Result<(), ImageError> {
        canvas.to_rgb_image().save(&self.path)?;
        log::info!(
            "wrote {}x{} image to {}",
            canvas.width(),
            canvas.height(),
            self.path.display()
        );
        Ok(())
    }
}

/// Flip the canvas so its origin is bottom-left, then write it to `sink`.
pub fn finish<S: ImageSink>(mut canvas: Canvas, sink: &mut S) -> Result<(), S::Error> {
    canvas.flip_vertically();
    sink.write(&canvas)
}
