pub mod attributes;
pub mod config;
pub mod dataset;
pub mod error;
pub mod scorer;
pub mod stats;
// cmd and reports belong to the binary (main.rs).

pub use error::{ShadeError, ShadeResult};
