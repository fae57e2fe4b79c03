//! Filesystem persistence for uploaded emotes.
//!
//! An [`EmoteFileWriter`] validates the extension of an uploaded file, stores
//! its bytes under a freshly generated unique name and can remove the file
//! again if the surrounding request fails.
mod config;
pub use config::*;

mod writer;
pub use writer::*;

mod error;
pub use error::Error;
