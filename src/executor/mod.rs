// Tue Jan 13 2026 - Alex

pub mod error;
pub mod log_file;
pub mod result;
pub mod task;

pub use error::{LaunchError, LaunchFailure};
pub use log_file::TaskLog;
pub use result::{AcceptedExitCodes, ExitPolicy, TaskResult, ZeroExitPolicy, LAUNCH_FAILURE_EXIT_CODE};
pub use task::TaskExecutor;
