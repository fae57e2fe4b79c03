#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("storage error :: {0}")]
    Storage(#[from] motey_fs::Error),

    #[error("unable to open `{path}` :: {err}")]
    Open { path: String, err: std::io::Error },

    #[error("runtime error :: {0}")]
    Runtime(std::io::Error),

    #[error("`{0}` has no usable file name")]
    BadFileName(String),
}

impl CliError {
    pub fn open(path: &std::path::Path, err: std::io::Error) -> Self {
        Self::Open {
            path: path.display().to_string(),
            err,
        }
    }
}
