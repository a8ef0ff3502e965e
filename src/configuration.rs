use std::path::PathBuf;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn host(&self) -> String;
    fn port(&self) -> u16;
    fn log_file(&self) -> Option<PathBuf>;
}
