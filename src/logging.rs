use std::{fs::File, io, path::Path, sync::Mutex};
use tracing_subscriber::{fmt::writer::MakeWriterExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Creates (or truncates) the file logs are mirrored into.
pub fn create_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// Installs the global subscriber. Logs always go to stderr, and to `log_file` as well if set.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    match log_file {
        Some(path) => {
            let file = create_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(io::stderr.and(Mutex::new(file)))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}
