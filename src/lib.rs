pub mod cs;
pub mod error;

pub use cs::dynamic;
pub use error::{Error, Result};
