//! Pipeline module - feature assembly through thresholded prediction

pub mod decision;
pub mod features;
pub mod predictor;
pub mod transform;

pub use decision::*;
pub use features::*;
pub use predictor::*;
pub use transform::*;
