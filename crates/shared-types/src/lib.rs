pub mod config;
pub mod error;
pub mod trip;

pub use config::*;
pub use error::*;
pub use trip::*;
