//! # faceframes-shape
//!
//! Face-shape classification from 68-point facial landmarks.
//!
//! 1. [`FeatureBundle::extract`] measures face height, jaw, cheek and
//!    forehead widths and the jaw angle at the chin.
//! 2. [`Classifier`] scores every candidate shape from ratios of those
//!    measurements and applies a confidence gate.
//! 3. [`recommend`] maps the resulting [`ShapeLabel`] to eyewear guidance.
//!
//! Nothing here performs I/O or holds global state; every call is
//! independent and safe to run concurrently.
//!
//! ```rust
//! use faceframes_shape::{classify, recommend, Point, ShapeLabel};
//!
//! let label = classify(&[Point::new(0.0, 0.0); 10]);
//! assert_eq!(label, ShapeLabel::NoFaceData);
//! assert!(!recommend(label).is_empty());
//! ```

pub mod classifier;
mod error;
pub mod features;
pub mod label;
pub mod landmarks;
pub mod pipeline;

pub use classifier::{Classifier, ScoreTable, Thresholds};
pub use error::{Error, Result};
pub use features::FeatureBundle;
pub use label::{recommend, ShapeLabel, FALLBACK_RECOMMENDATION};
pub use landmarks::{mirror_landmarks, FaceLandmarks, Point, NUM_LANDMARKS};
pub use pipeline::{classify, Classification, Pipeline};
