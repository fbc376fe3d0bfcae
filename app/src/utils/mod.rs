pub mod config;
pub mod logging;
pub mod session_file;

pub use config::Config;
pub use logging::init_logging;
pub use session_file::SessionStore;
