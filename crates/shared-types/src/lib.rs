pub mod config;
pub mod error;
pub mod guardian;
pub mod registration;
pub mod session;
pub mod stats;

pub use config::*;
pub use error::*;
pub use guardian::*;
pub use registration::*;
pub use session::*;
pub use stats::*;
