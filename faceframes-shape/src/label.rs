//! Shape labels and the eyewear recommendation for each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Text returned for sentinel labels.
pub const FALLBACK_RECOMMENDATION: &str =
    "Standard recommendation: try medium-sized, well-proportioned frames, or upload a clearer front-facing photo for a personalized suggestion.";

/// Result of a face-shape classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeLabel {
    Oval,
    Round,
    Square,
    Heart,
    Diamond,
    Oblong,
    Triangle,
    /// Fewer than 68 landmarks were supplied
    NoFaceData,
    /// The geometry did not support any shape strongly enough
    Inconclusive,
}

impl ShapeLabel {
    /// Real shapes in tie-break priority order.
    pub const CANDIDATES: [ShapeLabel; 7] = [
        ShapeLabel::Oval,
        ShapeLabel::Round,
        ShapeLabel::Square,
        ShapeLabel::Heart,
        ShapeLabel::Diamond,
        ShapeLabel::Oblong,
        ShapeLabel::Triangle,
    ];

    pub fn is_sentinel(&self) -> bool {
        matches!(self, ShapeLabel::NoFaceData | ShapeLabel::Inconclusive)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeLabel::Oval => "Oval",
            ShapeLabel::Round => "Round",
            ShapeLabel::Square => "Square",
            ShapeLabel::Heart => "Heart",
            ShapeLabel::Diamond => "Diamond",
            ShapeLabel::Oblong => "Oblong",
            ShapeLabel::Triangle => "Triangle",
            ShapeLabel::NoFaceData => "NoFaceData",
            ShapeLabel::Inconclusive => "Inconclusive",
        }
    }

    /// Eyewear guidance for this shape.
    pub fn recommendation(&self) -> &'static str {
        match self {
            ShapeLabel::Oval => {
                "The most balanced shape: most frame styles work well. Wide aviator or rectangular frames keep the natural proportions."
            }
            ShapeLabel::Round => {
                "Choose angular square or rectangular frames to add definition and make the face look longer."
            }
            ShapeLabel::Square => {
                "Round or oval frames soften a strong jaw and forehead."
            }
            ShapeLabel::Heart => {
                "Frames that are wider at the bottom, aviators, or rimless styles balance a narrow chin."
            }
            ShapeLabel::Diamond => {
                "Oval, rimless or cat-eye frames highlight the cheekbones and soften the eye line."
            }
            ShapeLabel::Oblong => {
                "Large, thick frames such as wayfarers, or a low bridge, visually shorten a long face."
            }
            ShapeLabel::Triangle => {
                "Frames with a strong top line, such as browline or cat-eye, widen the upper face to balance the jaw."
            }
            ShapeLabel::NoFaceData | ShapeLabel::Inconclusive => FALLBACK_RECOMMENDATION,
        }
    }
}

/// Eyewear guidance for `label`; sentinels get [`FALLBACK_RECOMMENDATION`].
pub fn recommend(label: ShapeLabel) -> &'static str {
    label.recommendation()
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = match s.trim().to_ascii_lowercase().as_str() {
            "oval" => ShapeLabel::Oval,
            "round" => ShapeLabel::Round,
            "square" => ShapeLabel::Square,
            "heart" => ShapeLabel::Heart,
            "diamond" => ShapeLabel::Diamond,
            "oblong" | "oblong (long)" | "long" | "oblong/large" => ShapeLabel::Oblong,
            "triangle" => ShapeLabel::Triangle,
            "nofacedata" | "no face data available" | "unknown" => ShapeLabel::NoFaceData,
            "inconclusive" | "other / inconclusive" => ShapeLabel::Inconclusive,
            _ => return Err(Error::UnknownShape(s.to_string())),
        };
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ShapeLabel; 9] = [
        ShapeLabel::Oval,
        ShapeLabel::Round,
        ShapeLabel::Square,
        ShapeLabel::Heart,
        ShapeLabel::Diamond,
        ShapeLabel::Oblong,
        ShapeLabel::Triangle,
        ShapeLabel::NoFaceData,
        ShapeLabel::Inconclusive,
    ];

    #[test]
    fn every_shape_has_its_own_text() {
        for label in ShapeLabel::CANDIDATES {
            let text = recommend(label);
            assert!(!text.is_empty());
            assert_ne!(text, FALLBACK_RECOMMENDATION, "{label}");
        }
    }

    #[test]
    fn sentinels_get_fallback() {
        assert_eq!(recommend(ShapeLabel::NoFaceData), FALLBACK_RECOMMENDATION);
        assert_eq!(recommend(ShapeLabel::Inconclusive), FALLBACK_RECOMMENDATION);
    }

    #[test]
    fn oval_mentions_broad_compatibility() {
        assert!(recommend(ShapeLabel::Oval).contains("most frame styles"));
    }

    #[test]
    fn names_parse_back() {
        for label in ALL {
            assert_eq!(label.to_string().parse::<ShapeLabel>(), Ok(label));
        }
    }

    #[test]
    fn legacy_spellings() {
        assert_eq!("Oblong (Long)".parse::<ShapeLabel>(), Ok(ShapeLabel::Oblong));
        assert_eq!(" heart ".parse::<ShapeLabel>(), Ok(ShapeLabel::Heart));
        assert_eq!("Other / Inconclusive".parse::<ShapeLabel>(), Ok(ShapeLabel::Inconclusive));
        assert_eq!("No face data available".parse::<ShapeLabel>(), Ok(ShapeLabel::NoFaceData));
        assert_eq!(
            "pentagon".parse::<ShapeLabel>(),
            Err(Error::UnknownShape("pentagon".into()))
        );
    }

    #[test]
    fn sentinel_flags() {
        let sentinels: Vec<_> = ALL.iter().filter(|l| l.is_sentinel()).collect();
        assert_eq!(sentinels, [&ShapeLabel::NoFaceData, &ShapeLabel::Inconclusive]);
    }
}
