//! Weighted rule scoring over [`FeatureBundle`] ratios.
//!
//! Each candidate shape collects points from a handful of independent
//! geometric tests. The highest total wins, ties go to the earlier shape in
//! [`ShapeLabel::CANDIDATES`], and a winner below
//! [`Thresholds::min_score`] is reported as [`ShapeLabel::Inconclusive`].
//!
//! All discriminators are ratios against the cheek width:
//!
//! - `height`: face height / cheek width
//! - `jaw`: jaw width / cheek width
//! - `forehead`: forehead width / cheek width
//!
//! plus the jaw angle at the chin, in degrees.

use std::fmt;

use log::debug;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::features::{ratio, FeatureBundle};
use crate::label::ShapeLabel;

/// Corroborating evidence.
pub const WEAK: u32 = 1;
pub const MODERATE: u32 = 2;
/// A defining condition for the shape.
pub const STRONG: u32 = 3;

/// Calibrated decision thresholds.
///
/// The defaults were tuned by hand on a small set of photos, not on a labeled
/// dataset. Every field can be overridden from the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum winning score for a definitive label
    pub min_score: u32,

    pub round_height_min: f64,
    pub round_height_max: f64,
    pub oval_height_min: f64,
    pub oval_height_max: f64,
    /// Oblong evidence starts here
    pub oblong_height: f64,
    /// Oblong is the defining read above this
    pub oblong_height_strong: f64,

    /// Jaw angles below this are angular (degrees)
    pub sharp_jaw_angle: f64,
    /// Jaw angles at or above this are soft
    pub soft_jaw_angle: f64,
    /// Jaw angles at or above this count against Diamond
    pub very_soft_jaw_angle: f64,

    /// Square: jaw and forehead within this fraction of the cheek width
    pub square_parity: f64,
    /// Round: jaw within this fraction of the cheek width
    pub round_jaw_tolerance: f64,
    /// Oval: jaw and forehead within this fraction of each other
    pub oval_spread: f64,
    /// Oval loses a point when jaw or forehead strays further than this from the cheek
    pub oval_divergence: f64,

    /// One width noticeably dominating another
    pub dominance_moderate: f64,
    /// One width clearly dominating another
    pub dominance_strong: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_score: STRONG,
            round_height_min: 0.9,
            round_height_max: 1.2,
            oval_height_min: 1.3,
            oval_height_max: 1.5,
            oblong_height: 1.45,
            oblong_height_strong: 1.55,
            sharp_jaw_angle: 112.0,
            soft_jaw_angle: 130.0,
            very_soft_jaw_angle: 150.0,
            square_parity: 0.05,
            round_jaw_tolerance: 0.1,
            oval_spread: 0.1,
            oval_divergence: 0.2,
            dominance_moderate: 0.06,
            dominance_strong: 0.2,
        }
    }
}

impl Thresholds {
    /// Reject inverted bands and non-positive tolerances.
    pub fn validate(&self) -> Result<()> {
        let bands = [
            ("round_height", self.round_height_min, self.round_height_max),
            ("oval_height", self.oval_height_min, self.oval_height_max),
            ("oblong_height", self.oblong_height, self.oblong_height_strong),
            ("jaw angle (sharp..soft)", self.sharp_jaw_angle, self.soft_jaw_angle),
            ("jaw angle (soft..very soft)", self.soft_jaw_angle, self.very_soft_jaw_angle),
            ("dominance", self.dominance_moderate, self.dominance_strong),
        ];
        for (name, lo, hi) in bands {
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return Err(Error::InvalidThresholds(format!(
                    "{name}: lower bound {lo} exceeds upper bound {hi}"
                )));
            }
        }

        let tolerances = [
            ("square_parity", self.square_parity),
            ("round_jaw_tolerance", self.round_jaw_tolerance),
            ("oval_spread", self.oval_spread),
            ("oval_divergence", self.oval_divergence),
            ("dominance_moderate", self.dominance_moderate),
        ];
        for (name, value) in tolerances {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidThresholds(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.sharp_jaw_angle <= 0.0 || self.very_soft_jaw_angle > 180.0 {
            return Err(Error::InvalidThresholds(format!(
                "jaw angles must lie in (0, 180], got {}..{}",
                self.sharp_jaw_angle, self.very_soft_jaw_angle
            )));
        }

        if self.min_score == 0 {
            return Err(Error::InvalidThresholds("min_score must be at least 1".into()));
        }

        Ok(())
    }
}

/// Per-shape scores for one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTable {
    scores: [u32; ShapeLabel::CANDIDATES.len()],
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(label: ShapeLabel) -> Option<usize> {
        ShapeLabel::CANDIDATES.iter().position(|&c| c == label)
    }

    /// Add points to a shape. Sentinels are ignored.
    pub fn award(&mut self, label: ShapeLabel, points: u32) {
        if let Some(i) = Self::slot(label) {
            self.scores[i] = self.scores[i].saturating_add(points);
        }
    }

    /// Remove points from a shape, never going below zero.
    pub fn penalize(&mut self, label: ShapeLabel, points: u32) {
        if let Some(i) = Self::slot(label) {
            self.scores[i] = self.scores[i].saturating_sub(points);
        }
    }

    pub fn get(&self, label: ShapeLabel) -> u32 {
        Self::slot(label).map_or(0, |i| self.scores[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeLabel, u32)> + '_ {
        ShapeLabel::CANDIDATES.iter().copied().zip(self.scores.iter().copied())
    }

    /// Highest-scoring shape; an exact tie goes to the shape listed first in
    /// [`ShapeLabel::CANDIDATES`].
    pub fn best(&self) -> (ShapeLabel, u32) {
        self.iter()
            .fold((ShapeLabel::CANDIDATES[0], self.scores[0]), |best, cur| {
                if cur.1 > best.1 {
                    cur
                } else {
                    best
                }
            })
    }
}

impl fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (label, score) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{label}={score}")?;
        }
        Ok(())
    }
}

impl Serialize for ScoreTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (label, score) in self.iter() {
            map.serialize_entry(label.name(), &score)?;
        }
        map.end()
    }
}

/// Rule-based face-shape classifier.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    pub thresholds: Thresholds,
    /// Log every score table and decision at debug level
    pub verbose: bool,
}

impl Classifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Score every candidate shape.
    pub fn score(&self, features: &FeatureBundle) -> ScoreTable {
        let t = &self.thresholds;
        let mut table = ScoreTable::new();

        let height = features.height_to_cheek();
        let jaw = features.jaw_to_cheek();
        let forehead = features.forehead_to_cheek();
        let angle = features.jaw_angle;

        let sharp = angle < t.sharp_jaw_angle;
        let soft = angle >= t.soft_jaw_angle;

        // How much wider the first width is than the second, as a fraction.
        let dominance = |wide: f64, narrow: f64| ratio(wide, narrow) - 1.0;
        let graded = |margin: f64| {
            if margin > t.dominance_strong {
                MODERATE
            } else if margin > t.dominance_moderate {
                WEAK
            } else {
                0
            }
        };

        // Oblong
        if height > t.oblong_height_strong {
            table.award(ShapeLabel::Oblong, STRONG);
        } else if height > t.oblong_height {
            table.award(ShapeLabel::Oblong, MODERATE);
        }
        if height > t.oblong_height && sharp {
            table.award(ShapeLabel::Oblong, WEAK);
        }

        // Oval
        if (t.oval_height_min..=t.oval_height_max).contains(&height) {
            table.award(ShapeLabel::Oval, MODERATE);
        }
        if soft {
            table.award(ShapeLabel::Oval, WEAK);
        }
        if (jaw - forehead).abs() <= t.oval_spread {
            table.award(ShapeLabel::Oval, WEAK);
        }
        if (1.0 - jaw).abs() > t.oval_divergence || (1.0 - forehead).abs() > t.oval_divergence {
            table.penalize(ShapeLabel::Oval, WEAK);
        }

        // Round
        if (t.round_height_min..=t.round_height_max).contains(&height) {
            table.award(ShapeLabel::Round, MODERATE);
        }
        if soft {
            table.award(ShapeLabel::Round, WEAK);
        }
        if (1.0 - jaw).abs() <= t.round_jaw_tolerance {
            table.award(ShapeLabel::Round, WEAK);
        }

        // Square needs width parity and an angular jaw together.
        let parity =
            (1.0 - jaw).abs() <= t.square_parity && (1.0 - forehead).abs() <= t.square_parity;
        if parity {
            table.award(ShapeLabel::Square, MODERATE);
        }
        if sharp {
            table.award(ShapeLabel::Square, WEAK);
        }
        if parity && sharp {
            table.award(ShapeLabel::Square, WEAK);
        }

        // Heart: wide forehead, narrow jaw.
        table.award(ShapeLabel::Heart, graded(forehead - 1.0));
        table.award(ShapeLabel::Heart, graded(1.0 - jaw));

        // Triangle: the inverse.
        table.award(ShapeLabel::Triangle, graded(jaw - 1.0));
        table.award(ShapeLabel::Triangle, graded(1.0 - forehead));

        // Diamond: cheeks dominate both, with some jaw definition.
        table.award(ShapeLabel::Diamond, graded(dominance(1.0, forehead)));
        table.award(ShapeLabel::Diamond, graded(dominance(1.0, jaw)));
        if angle >= t.very_soft_jaw_angle {
            table.penalize(ShapeLabel::Diamond, WEAK);
        }

        if self.verbose {
            debug!(
                "height={height:.3} jaw={jaw:.3} forehead={forehead:.3} angle={angle:.1} -> {table}"
            );
        }

        table
    }

    /// Pick the final label from a score table.
    pub fn decide(&self, table: &ScoreTable) -> ShapeLabel {
        let (winner, score) = table.best();
        if score < self.thresholds.min_score {
            if self.verbose {
                debug!(
                    "best candidate {winner} scored {score}, below {}: inconclusive",
                    self.thresholds.min_score
                );
            }
            return ShapeLabel::Inconclusive;
        }
        if self.verbose {
            debug!("classified as {winner} with score {score}");
        }
        winner
    }

    /// Classify a measured face.
    pub fn classify(&self, features: &FeatureBundle) -> ShapeLabel {
        if features.is_degenerate() {
            if self.verbose {
                debug!("degenerate geometry, skipping scoring");
            }
            return ShapeLabel::Inconclusive;
        }
        self.decide(&self.score(features))
    }
}
