use crate::{Config, DirPolicy, Error};
use bytes::Bytes;
use log::{debug, info, trace};
use motey_core::{traits, types};
use std::path::PathBuf;

/// Summary data produced after a successful persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// Location of the written file, callers should record it if the file
    /// needs to be referenced later
    pub path: PathBuf,
    /// Number of bytes written
    pub size_bytes: usize,
}

/// Stores a single uploaded emote on the filesystem.
///
/// The file is named `<token>.<extension>` inside the configured emotes
/// directory, where the token is generated once when the writer is built.
/// Calling [`EmoteFileWriter::path`] multiple times always yields the same
/// location for a given writer.
///
/// The byte source `R` decides which persist flavour is available:
/// [`EmoteFileWriter::persist`] for blocking readers ([`traits::ReadAll`]) and
/// [`EmoteFileWriter::persist_async`] for async readers ([`traits::AsyncReadAll`]).
/// Both share the same validation, path and directory handling.
pub struct EmoteFileWriter<R> {
    /// Display name of the emote, kept as metadata only
    emote_name: String,

    /// Name of the uploaded file, only used to get the extension
    file_name: String,

    reader: R,

    config: Config,

    token: types::EmoteToken,
}

impl<R> EmoteFileWriter<R> {
    pub fn new(
        emote_name: impl Into<String>,
        file_name: impl Into<String>,
        reader: R,
        config: Config,
    ) -> Self {
        Self {
            emote_name: emote_name.into(),
            file_name: file_name.into(),
            reader,
            config,
            token: types::EmoteToken::new(),
        }
    }

    pub fn emote_name(&self) -> &str {
        &self.emote_name
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn token(&self) -> &types::EmoteToken {
        &self.token
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Raw extension of the uploaded file name, it may not be an allowed one.
    pub fn extension(&self) -> &str {
        types::Extension::raw_from_file_name(&self.file_name)
    }

    pub fn parsed_extension(&self) -> Result<types::Extension, Error> {
        Ok(types::Extension::from_file_name(&self.file_name)?)
    }

    /// Returns `true` if the uploaded file has one of the allowed extensions
    pub fn extension_valid(&self) -> bool {
        self.parsed_extension().is_ok()
    }

    /// Returns the location of the emote file.
    ///
    /// The file may or may not exists, no check is performed by this function.
    pub fn path(&self) -> PathBuf {
        self.config
            .emotes_dir()
            .join(format!("{}.{}", self.token, self.extension()))
    }

    /// Reads the whole source and writes it to [`EmoteFileWriter::path`],
    /// blocking the current thread.
    ///
    /// Fails with [`Error::InvalidFileExtension`] before doing any I/O if the
    /// extension is not allowed. An existing file at the same path is overwritten.
    pub fn persist(&mut self) -> Result<WriteSummary, Error>
    where
        R: traits::ReadAll,
    {
        let path = self.prepare()?;
        let content = self.reader.read_all()?;
        self.store(path, content)
    }

    /// Same as [`EmoteFileWriter::persist`] but the source is awaited.
    ///
    /// Reading is the only suspension point, directory creation and the
    /// file write run to completion once the content is available.
    /// The write uses blocking `std::fs` calls on purpose, it is not moved to
    /// `tokio::fs` nor to `spawn_blocking`.
    pub async fn persist_async(&mut self) -> Result<WriteSummary, Error>
    where
        R: traits::AsyncReadAll,
    {
        let path = self.prepare()?;
        let content = self.reader.read_all_async().await?;
        self.store(path, content)
    }

    /// Deletes the file written by a previous persist.
    ///
    /// No existence check is done, if the file is missing the filesystem
    /// `NotFound` error is returned (see [`Error::is_not_found`]).
    pub fn rollback(&self) -> Result<(), Error> {
        let path = self.path();
        std::fs::remove_file(&path)?;

        debug!("{} rolled back, removed `{}`", self, path.display());

        Ok(())
    }

    /// Validates the extension and resolves the destination path
    fn prepare(&self) -> Result<PathBuf, Error> {
        let ext = self.parsed_extension()?;
        let path = self.path();

        trace!("{} persisting as {} to `{}`", self, ext, path.display());

        Ok(path)
    }

    fn store(&self, path: PathBuf, content: Bytes) -> Result<WriteSummary, Error> {
        if self.config.dir_policy() == DirPolicy::Create {
            std::fs::create_dir_all(self.config.emotes_dir())?;
        }

        std::fs::write(&path, &content)?;

        info!(
            "{} stored {} bytes to `{}`",
            self,
            content.len(),
            path.display()
        );

        Ok(WriteSummary {
            path,
            size_bytes: content.len(),
        })
    }
}

impl<R> std::fmt::Display for EmoteFileWriter<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[emote|{}|{}]", self.emote_name, self.token)
    }
}
