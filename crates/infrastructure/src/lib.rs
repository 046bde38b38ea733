//! File Limit Infrastructure Layer
pub mod logging;
pub mod repositories;
pub mod system;
