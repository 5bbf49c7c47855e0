//! QR symbol composition: encode, render, overlay a logo, serialize.
//!
//! Symbol encoding (Reed-Solomon) is delegated to the `qrcode` crate and all
//! pixel work to the `image` crate; this module owns the rendering
//! parameters and the compositing of the logo into the symbol's center.

use std::io::Cursor;
use std::path::Path;

use base64::Engine as _;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

use crate::error::AppError;

/// Pixel width of a single QR module.
const MODULE_SIZE: u32 = 10;

/// Quiet-zone width around the symbol, in modules.
const BORDER_MODULES: u32 = 4;

/// The logo is resized to 1/4 of the symbol width. Error correction level
/// High tolerates ~30% symbol damage, which keeps a centered overlay of
/// this size decodable.
const LOGO_RATIO: u32 = 4;

/// Why no logo is being composited into generated symbols.
#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    #[error("Logo file not found")]
    NotFound,
    #[error("Error processing logo file")]
    Undecodable(#[source] image::ImageError),
}

/// A rendered QR code ready for the HTTP response.
#[derive(Debug, Clone)]
pub struct ComposedQr {
    /// `data:image/png;base64,...` string embedding the PNG.
    pub data_url: String,
    /// Present when the symbol was rendered without the configured logo.
    pub warning: Option<String>,
}

/// Builds QR symbols with an optional centered logo overlay.
///
/// The logo asset is read and decoded once at construction and cached for
/// the process lifetime. A missing or undecodable logo degrades every
/// composition to a plain black-on-white symbol with a `warning` attached,
/// rather than failing requests over cosmetics.
pub struct QrComposer {
    logo: Option<RgbaImage>,
    warning: Option<String>,
}

impl QrComposer {
    /// Creates a composer, loading the logo from `logo_path`.
    pub fn new(logo_path: &Path) -> Self {
        match load_logo(logo_path) {
            Ok(logo) => Self {
                logo: Some(logo),
                warning: None,
            },
            Err(e) => {
                tracing::warn!(
                    path = %logo_path.display(),
                    "{e}; QR codes will be generated without a logo"
                );
                Self {
                    logo: None,
                    warning: Some(e.to_string()),
                }
            }
        }
    }

    /// Encodes `content` into a QR symbol and serializes it as a PNG data URL.
    ///
    /// The symbol version is auto-selected to fit the content at error
    /// correction level High. With a logo loaded, it is composited into the
    /// symbol's center; otherwise the plain symbol is returned together
    /// with the load-time warning.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `content` exceeds QR capacity
    /// at level High, [`AppError::Internal`] on encoding failures.
    pub fn compose(&self, content: &str) -> Result<ComposedQr, AppError> {
        let code = QrCode::with_error_correction_level(content, EcLevel::H).map_err(
            |e| match e {
                QrError::DataTooLong => {
                    AppError::bad_request("content is too large to encode as a QR code")
                }
                other => AppError::internal(format!("QR encoding failed: {other}")),
            },
        )?;

        let mut symbol = render_symbol(&code);

        if let Some(logo) = &self.logo {
            overlay_logo(&mut symbol, logo);
        }

        let png = encode_png(&symbol)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);

        Ok(ComposedQr {
            data_url: format!("data:image/png;base64,{encoded}"),
            warning: self.warning.clone(),
        })
    }
}

fn load_logo(path: &Path) -> Result<RgbaImage, LogoError> {
    if !path.exists() {
        return Err(LogoError::NotFound);
    }

    let logo = image::open(path).map_err(LogoError::Undecodable)?;
    Ok(logo.to_rgba8())
}

/// Rasterizes the module matrix: black modules on white, [`MODULE_SIZE`]
/// pixels per module, [`BORDER_MODULES`] quiet-zone modules on each side.
fn render_symbol(code: &QrCode) -> RgbaImage {
    let modules = code.width() as u32;
    let size = (modules + 2 * BORDER_MODULES) * MODULE_SIZE;

    let mut img = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]));

    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] == Color::Dark {
                let px = (BORDER_MODULES + x) * MODULE_SIZE;
                let py = (BORDER_MODULES + y) * MODULE_SIZE;
                for dy in 0..MODULE_SIZE {
                    for dx in 0..MODULE_SIZE {
                        img.put_pixel(px + dx, py + dy, Rgba([0, 0, 0, 255]));
                    }
                }
            }
        }
    }

    img
}

/// Resizes the logo to 1/4 of the symbol width and alpha-composites it at
/// the symbol's center.
fn overlay_logo(symbol: &mut RgbaImage, logo: &RgbaImage) {
    let side = symbol.width() / LOGO_RATIO;
    let resized = image::imageops::resize(logo, side, side, FilterType::Lanczos3);

    let x = (symbol.width() - side) / 2;
    let y = (symbol.height() - side) / 2;

    image::imageops::overlay(symbol, &resized, i64::from(x), i64::from(y));
}

fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, AppError> {
    let mut bytes = Vec::new();

    DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| AppError::internal(format!("Failed to encode QR image as PNG: {e}")))?;

    Ok(bytes)
}
