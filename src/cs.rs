pub mod dynamic;

// Re-export all modules
pub use dynamic::*;
