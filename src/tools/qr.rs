//! # QR Encoding
//!
//! Turns a payload into a [`QrImage`]: a square module grid that can be drawn
//! as half-block text rows for the terminal or written out as a PNG.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use image::{ColorType, ImageBuffer, ImageEncoder, Luma, codecs::png::PngEncoder};
use qrcode::{Color, EcLevel, QrCode};

/// Light modules drawn around the code in both renderings.
const TEXT_QUIET_ZONE: usize = 2;
const PNG_QUIET_ZONE: usize = 4;

/// Side length of the written PNG, in pixels.
pub const PNG_SIZE: u32 = 256;

#[derive(Debug)]
pub enum QrError {
    EmptyInput,
    Encode(qrcode::types::QrError),
    Image(image::ImageError),
    Io(io::Error),
}

impl fmt::Display for QrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrError::EmptyInput => write!(f, "nothing to encode"),
            QrError::Encode(e) => write!(f, "QR encoding failed: {e}"),
            QrError::Image(e) => write!(f, "PNG encoding failed: {e}"),
            QrError::Io(e) => write!(f, "could not write QR image: {e}"),
        }
    }
}

impl std::error::Error for QrError {}

impl From<io::Error> for QrError {
    fn from(e: io::Error) -> Self {
        QrError::Io(e)
    }
}

/// An encoded QR symbol.
#[derive(Debug, Clone)]
pub struct QrImage {
    width: usize,
    dark: Vec<bool>,
}

impl QrImage {
    /// Encode with medium error correction.
    pub fn encode(payload: &str) -> Result<Self, QrError> {
        if payload.is_empty() {
            return Err(QrError::EmptyInput);
        }
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)
            .map_err(QrError::Encode)?;
        let dark = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
        Ok(Self {
            width: code.width(),
            dark,
        })
    }

    /// Modules per side, without quiet zone.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Module lookup in quiet-zone-padded coordinates.
    fn is_dark(&self, x: usize, y: usize, quiet: usize) -> bool {
        if x < quiet || y < quiet {
            return false;
        }
        let (x, y) = (x - quiet, y - quiet);
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }

    /// Two module rows per text row using upper/lower half blocks.
    pub fn to_text_rows(&self) -> Vec<String> {
        let side = self.width + TEXT_QUIET_ZONE * 2;
        (0..side)
            .step_by(2)
            .map(|y| {
                (0..side)
                    .map(|x| {
                        let top = self.is_dark(x, y, TEXT_QUIET_ZONE);
                        let bottom = self.is_dark(x, y + 1, TEXT_QUIET_ZONE);
                        match (top, bottom) {
                            (true, true) => '█',
                            (true, false) => '▀',
                            (false, true) => '▄',
                            (false, false) => ' ',
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Grayscale PNG bytes, `PNG_SIZE` pixels square when the symbol fits.
    pub fn to_png(&self) -> Result<Vec<u8>, QrError> {
        let modules = (self.width + PNG_QUIET_ZONE * 2) as u32;
        let scale = (PNG_SIZE / modules).max(1);
        let side = (modules * scale).max(PNG_SIZE);
        let offset = (side - modules * scale) / 2;

        let img = ImageBuffer::from_fn(side, side, |px, py| {
            let inside = px >= offset && py >= offset;
            let dark = inside
                && self.is_dark(
                    ((px - offset) / scale) as usize,
                    ((py - offset) / scale) as usize,
                    PNG_QUIET_ZONE,
                );
            if dark { Luma([0u8]) } else { Luma([255u8]) }
        });

        let mut buf = Vec::new();
        PngEncoder::new(&mut buf)
            .write_image(img.as_raw(), side, side, ColorType::L8)
            .map_err(QrError::Image)?;
        Ok(buf)
    }

    pub fn write_png(&self, path: &Path) -> Result<(), QrError> {
        let bytes = self.to_png()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)?;
        Ok(())
    }
}
