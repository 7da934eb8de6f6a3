//! Product data handed to prompts and extractors.
//!
//! - **ProductRecord**: the caller's product fields, read-only to extractors
//! - **PlatformSet**: which social platforms to write for
//! - **StyleOptions** / **ImageStyle**: tone, length and image preferences

mod platform;
mod record;
mod style;


pub use platform::{Platform, PlatformSet};
pub use record::ProductRecord;
pub use style::{ContentLength, ImageStyle, StyleOptions};
