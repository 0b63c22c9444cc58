use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use wedding_gallery_application::{ApplicationError, QrCodeRenderer};

const DEFAULT_SIZE: u32 = 200;

/// Renders upload links with the `qrcode` crate at high error correction.
#[derive(Debug, Clone, Copy)]
pub struct QrCodeCrateRenderer {
    size: u32,
}

impl QrCodeCrateRenderer {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    fn encode(&self, data: &str) -> Result<QrCode, ApplicationError> {
        QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)
            .map_err(|error| ApplicationError::QrCode(error.to_string()))
    }
}

impl Default for QrCodeCrateRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl QrCodeRenderer for QrCodeCrateRenderer {
    fn render_svg(&self, data: &str) -> Result<String, ApplicationError> {
        let code = self.encode(data)?;
        Ok(code
            .render::<svg::Color>()
            .min_dimensions(self.size, self.size)
            .quiet_zone(true)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build())
    }

    fn render_png(&self, data: &str) -> Result<Vec<u8>, ApplicationError> {
        let code = self.encode(data)?;
        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(self.size, self.size)
            .quiet_zone(true)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|error| ApplicationError::QrCode(error.to_string()))?;
        Ok(png)
    }
}
