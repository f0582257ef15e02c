//! Model loading and inference components

pub mod artifact;
pub mod forest;
pub mod inference;
pub mod scaler;

pub use artifact::TrainedArtifact;
pub use forest::ForestClassifier;
pub use inference::{InferenceEngine, PredictionResult};
pub use scaler::StandardScaler;
