use crate::params;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("unsupported extension :: `{0}`")]
    Unsupported(String),
}

impl ExtensionError {
    pub fn unsupported(ext: &str) -> Self {
        Self::Unsupported(ext.to_owned())
    }
}

/// Image formats accepted for emotes.
///
/// Parsing is case sensitive, `PNG` is not the same as `png`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Extension {
    Jpg,
    Png,
    Webp,
    Gif,
}

impl Extension {
    /// Every accepted extension
    pub const ALL: [Extension; 4] = [Self::Jpg, Self::Png, Self::Webp, Self::Gif];

    fn name(&self) -> &'static str {
        match self {
            Extension::Jpg => "jpg",
            Extension::Png => "png",
            Extension::Webp => "webp",
            Extension::Gif => "gif",
        }
    }

    /// Returns the raw extension of `file_name`, the substring after the last `.`.
    ///
    /// When the name contains no `.` the whole name is returned.
    pub fn raw_from_file_name(file_name: &str) -> &str {
        file_name
            .rsplit(params::EXTENSION_SEPARATOR)
            .next()
            .unwrap_or(file_name)
    }

    /// Extracts and validates the extension of `file_name`.
    ///
    /// A name without any `.` never has a valid extension, even if the name
    /// itself matches one (e.g. `png`).
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtensionError> {
        if !file_name.contains(params::EXTENSION_SEPARATOR) {
            return Err(ExtensionError::unsupported(file_name));
        }
        Self::raw_from_file_name(file_name).parse()
    }
}

impl std::str::FromStr for Extension {
    type Err = ExtensionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "jpg" => Ok(Self::Jpg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::Webp),
            "gif" => Ok(Self::Gif),
            _ => Err(ExtensionError::unsupported(value)),
        }
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
