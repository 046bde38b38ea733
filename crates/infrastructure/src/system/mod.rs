pub mod log_dir;

pub use log_dir::{default_log_directory, APP_DIR_NAME};
