mod activity_log;
mod use_cases;

pub use activity_log::build_activity_log;
pub use use_cases::UseCases;
