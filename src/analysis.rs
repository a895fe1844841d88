use crate::catalog::{Catalog, RecommendationRecord};
use crate::config::Config;
use faceframes_shape::{Classifier, FeatureBundle, Pipeline, Point, ScoreTable, ShapeLabel};
use serde::Serialize;

/// Everything the presentation layer needs about one face.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub label: ShapeLabel,
    pub recommendation: &'static str,
    pub features: Option<FeatureBundle>,
    pub scores: Option<ScoreTable>,
    pub record: Option<RecommendationRecord>,
}

pub fn pipeline(cfg: &Config) -> Pipeline {
    Pipeline::new(Classifier::new(cfg.thresholds.clone()).verbose(cfg.verbose))
}

pub fn analyze(points: &[Point], cfg: &Config, catalog: Option<&Catalog>) -> Analysis {
    let result = pipeline(cfg).classify_landmarks(points);
    Analysis {
        label: result.label,
        recommendation: result.recommendation(),
        record: catalog.and_then(|c| c.get(result.label)).cloned(),
        features: result.features,
        scores: result.scores,
    }
}
