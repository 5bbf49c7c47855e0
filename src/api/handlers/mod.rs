//! HTTP request handlers.

pub mod index;
pub mod qr;
pub mod redirect;
pub mod shorten;

pub use index::index_handler;
pub use qr::generate_qr_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
