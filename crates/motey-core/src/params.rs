/// Environment variable holding the directory where emotes are stored
pub const EMOTES_DIR_ENV: &str = "MOTEY_EMOTES_DIR";

/// Environment variable selecting whether the emotes directory is created on write
pub const CREATE_DIR_ENV: &str = "MOTEY_CREATE_DIR";

/// Separator between the file stem and its extension
pub const EXTENSION_SEPARATOR: char = '.';
