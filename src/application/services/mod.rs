//! Business logic services for the application layer.

pub mod qr_composer;
pub mod shorten_service;

pub use qr_composer::{ComposedQr, QrComposer};
pub use shorten_service::ShortenService;
