//! Command line front end to validate and store emotes on disk.
mod error;

use clap::{Parser, Subcommand};
use colored::Colorize;
use error::CliError;
use log::{debug, info};
use motey_core::types::Extension;
use motey_fs::{Config, DirPolicy, EmoteFileWriter, WriteSummary};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "motey", version, about = "Store uploaded emotes on disk")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether a file name has an allowed emote extension
    Check { file_name: String },

    /// Store an image file in the emotes directory
    Save {
        /// Display name of the emote
        #[arg(long)]
        name: String,

        /// Image file to store
        file: PathBuf,

        /// Emotes directory, overrides `MOTEY_EMOTES_DIR`
        #[arg(long = "emotes-dir")]
        emotes_dir: Option<PathBuf>,

        /// Fail if the emotes directory is missing instead of creating it
        #[arg(long = "require-dir", default_value_t = false)]
        require_dir: bool,

        /// Read the file with blocking I/O instead of on the async runtime
        #[arg(long, default_value_t = false)]
        blocking: bool,
    },
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, CliError> {
    match command {
        Command::Check { file_name } => Ok(cmd_check(&file_name)),
        Command::Save {
            name,
            file,
            emotes_dir,
            require_dir,
            blocking,
        } => {
            let config = resolve_config(emotes_dir, require_dir)?;

            debug!(
                "emotes directory `{}` ({:?})",
                config.emotes_dir().display(),
                config.dir_policy()
            );

            let summary = if blocking {
                save_blocking(name, &file, config)?
            } else {
                save_async(name, &file, config)?
            };

            println!(
                "{} {} ({} bytes)",
                "stored".green().bold(),
                summary.path.display(),
                summary.size_bytes
            );

            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_check(file_name: &str) -> ExitCode {
    match Extension::from_file_name(file_name) {
        Ok(ext) => {
            println!("{} {} ({})", "valid".green().bold(), file_name, ext);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{} {} :: {}", "invalid".red().bold(), file_name, e);
            ExitCode::from(1)
        }
    }
}

fn resolve_config(emotes_dir: Option<PathBuf>, require_dir: bool) -> Result<Config, CliError> {
    let config = match emotes_dir {
        Some(dir) => Config::new(dir),
        None => Config::from_env()?,
    };

    if require_dir {
        return Ok(config.with_dir_policy(DirPolicy::Require));
    }

    Ok(config)
}

fn upload_file_name(file: &Path) -> Result<String, CliError> {
    file.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .ok_or_else(|| CliError::BadFileName(file.display().to_string()))
}

fn save_blocking(name: String, file: &Path, config: Config) -> Result<WriteSummary, CliError> {
    let file_name = upload_file_name(file)?;
    let source = std::fs::File::open(file).map_err(|e| CliError::open(file, e))?;

    info!("storing `{}` from `{}` (blocking)", name, file.display());

    let mut writer = EmoteFileWriter::new(name, file_name, source, config);
    Ok(writer.persist()?)
}

fn save_async(name: String, file: &Path, config: Config) -> Result<WriteSummary, CliError> {
    let file_name = upload_file_name(file)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    runtime.block_on(async move {
        let source = tokio::fs::File::open(file)
            .await
            .map_err(|e| CliError::open(file, e))?;

        info!("storing `{}` from `{}`", name, file.display());

        let mut writer = EmoteFileWriter::new(name, file_name, source, config);
        Ok::<_, CliError>(writer.persist_async().await?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_save() {
        let cli = Cli::try_parse_from([
            "motey",
            "save",
            "--name",
            "catjam",
            "--emotes-dir",
            "/tmp/emotes",
            "--require-dir",
            "catjam.gif",
        ])
        .unwrap();

        match cli.command {
            Command::Save {
                name,
                file,
                emotes_dir,
                require_dir,
                blocking,
            } => {
                assert_eq!(name, "catjam");
                assert_eq!(file, PathBuf::from("catjam.gif"));
                assert_eq!(emotes_dir, Some(PathBuf::from("/tmp/emotes")));
                assert!(require_dir);
                assert!(!blocking);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_save_requires_name() {
        assert!(Cli::try_parse_from(["motey", "save", "catjam.gif"]).is_err());
    }

    #[test]
    fn explicit_dir_wins() {
        let config = resolve_config(Some(PathBuf::from("/srv/emotes")), true).unwrap();
        assert_eq!(config.emotes_dir(), Path::new("/srv/emotes"));
        assert_eq!(config.dir_policy(), DirPolicy::Require);

        let config = resolve_config(Some(PathBuf::from("/srv/emotes")), false).unwrap();
        assert_eq!(config.dir_policy(), DirPolicy::Create);
    }

    #[test]
    fn file_name_from_path() {
        assert_eq!(
            upload_file_name(Path::new("/home/me/cat.png")).unwrap(),
            "cat.png"
        );
        assert!(upload_file_name(Path::new("/")).is_err());
    }

    #[test]
    fn save_both_flavours() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cat.png");
        std::fs::write(&source, b"\x89PNG").unwrap();

        let emotes = dir.path().join("emotes");
        let a = save_blocking("cat".into(), &source, Config::new(&emotes)).unwrap();
        let b = save_async("cat".into(), &source, Config::new(&emotes)).unwrap();

        assert_ne!(a.path, b.path);
        assert_eq!(std::fs::read(&a.path).unwrap(), b"\x89PNG");
        assert_eq!(std::fs::read(&b.path).unwrap(), b"\x89PNG");
    }
}
