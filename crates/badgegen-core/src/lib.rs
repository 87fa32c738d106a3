pub mod config;
pub mod error;
pub mod generate;
pub mod io;
pub mod paths;
pub mod template;
pub mod value;

pub use error::{BadgeError, Result};
