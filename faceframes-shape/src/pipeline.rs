use serde::Serialize;

use crate::classifier::{Classifier, ScoreTable};
use crate::features::FeatureBundle;
use crate::label::ShapeLabel;
use crate::landmarks::Point;

/// Outcome of one landmark set going through the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub label: ShapeLabel,
    /// `None` when the landmark set was too short to measure
    pub features: Option<FeatureBundle>,
    /// `None` when no scoring took place
    pub scores: Option<ScoreTable>,
}

impl Classification {
    pub fn recommendation(&self) -> &'static str {
        self.label.recommendation()
    }
}

/// Full engine: landmarks → features → scores → label
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    pub classifier: Classifier,
}

impl Pipeline {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Classify a raw landmark list.
    ///
    /// Lists with fewer than 68 points yield [`ShapeLabel::NoFaceData`];
    /// collapsed geometry yields [`ShapeLabel::Inconclusive`] without scores.
    pub fn classify_landmarks(&self, points: &[Point]) -> Classification {
        let Some(features) = FeatureBundle::extract(points) else {
            if self.classifier.verbose {
                log::debug!("{} landmarks supplied, no face data", points.len());
            }
            return Classification {
                label: ShapeLabel::NoFaceData,
                features: None,
                scores: None,
            };
        };

        if features.is_degenerate() {
            return Classification {
                label: self.classifier.classify(&features),
                features: Some(features),
                scores: None,
            };
        }

        let scores = self.classifier.score(&features);
        Classification {
            label: self.classifier.decide(&scores),
            features: Some(features),
            scores: Some(scores),
        }
    }
}

/// Classify with the default thresholds.
pub fn classify(points: &[Point]) -> ShapeLabel {
    Pipeline::default().classify_landmarks(points).label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_has_no_features() {
        let result = Pipeline::default().classify_landmarks(&[Point::new(1.0, 2.0); 10]);
        assert_eq!(result.label, ShapeLabel::NoFaceData);
        assert!(result.features.is_none());
        assert!(result.scores.is_none());
        assert_eq!(result.recommendation(), crate::label::FALLBACK_RECOMMENDATION);
    }

    #[test]
    fn collapsed_input_is_inconclusive() {
        let result = Pipeline::default().classify_landmarks(&[Point::new(5.0, 5.0); 68]);
        assert_eq!(result.label, ShapeLabel::Inconclusive);
        assert!(result.features.is_some());
        assert!(result.scores.is_none());
    }

    #[test]
    fn empty_input() {
        assert_eq!(classify(&[]), ShapeLabel::NoFaceData);
    }
}
