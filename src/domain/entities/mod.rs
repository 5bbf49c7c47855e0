//! Core domain entities for the URL shortening data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! is a separate struct ([`NewShortUrl`]) so that storage-assigned fields
//! (`id`, `created_at`) cannot be supplied by callers.

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
