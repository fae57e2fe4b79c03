//! Shared vocabulary for motey: the allowed emote extensions, the unique
//! token used to name files on disk and the read capabilities consumed by
//! the file writer.
pub mod params;
pub mod traits;
pub mod types;
