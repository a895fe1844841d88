pub mod analysis;
pub mod catalog;
pub mod config;
pub mod input;

// Re-export engine types for convenience
pub use faceframes_shape::{
    classifier, features, label, landmarks, recommend, Classification, Classifier,
    FeatureBundle, Pipeline, Point, ShapeLabel, Thresholds,
};
