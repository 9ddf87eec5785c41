//! Report module - prediction results and dataset overview

pub mod export;
pub mod overview;
pub mod prediction;

pub use export::*;
pub use overview::*;
pub use prediction::*;
