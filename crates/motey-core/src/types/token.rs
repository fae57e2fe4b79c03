/// Globally unique token used as the base name of a stored emote.
///
/// Displayed in the hyphenated UUID form, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmoteToken(uuid::Uuid);

impl EmoteToken {
    /// Generates a new random (v4) token
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for EmoteToken {
    fn default() -> Self {
        Self::new()
    }
}

impl From<uuid::Uuid> for EmoteToken {
    fn from(value: uuid::Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for EmoteToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
