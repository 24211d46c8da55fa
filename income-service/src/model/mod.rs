pub mod classifier;
pub mod loader;
pub mod prediction;
pub mod state;

pub use classifier::{Classifier, OnnxClassifier};
pub use prediction::{IncomeBracket, Prediction, ProbabilitySource};
pub use state::ModelState;
