mod console_file_log;
mod file_log;
mod null_log;

pub use console_file_log::ConsoleFileActivityLog;
pub use file_log::{format_line, FileActivityLog, LINE_ENDING};
pub use null_log::NullActivityLog;
