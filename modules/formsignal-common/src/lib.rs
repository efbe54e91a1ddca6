pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::ValidationError;
pub use types::{Dimension, EventFragment, EventKind, SessionEvent};
