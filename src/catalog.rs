use anyhow::{Context, Result};
use faceframes_shape::ShapeLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

static BUILTIN_CATALOG: &str = include_str!("../data/shape-face.json");

/// Example picture of a glasses style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub glasses: String,
    pub picture: String,
}

/// Descriptive eyewear guidance for one face shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub name: String,
    pub description: String,
    /// Each entry maps a style name to why it suits the shape
    #[serde(default)]
    pub glasses: Vec<BTreeMap<String, String>>,
    #[serde(default)]
    pub pictures: Vec<Picture>,
}

impl RecommendationRecord {
    /// `(style, description)` pairs in table order.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.glasses
            .iter()
            .flat_map(|g| g.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Picture references grouped by glasses style, styles in first-seen order.
    pub fn pictures_by_style(&self) -> Vec<(&str, Vec<&str>)> {
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
        for p in &self.pictures {
            let picture = p.picture.trim();
            match groups.iter_mut().find(|(style, _)| *style == p.glasses) {
                Some((_, pictures)) => pictures.push(picture),
                None => groups.push((p.glasses.as_str(), vec![picture])),
            }
        }
        groups
    }
}

/// Read-only table of recommendation records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<RecommendationRecord>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self> {
        let records: Vec<RecommendationRecord> = serde_json::from_str(raw)?;
        Ok(Self { records })
    }

    /// Table shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("parsing bundled recommendation table")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    /// Record for `label`, matched case-insensitively by name.
    pub fn get(&self, label: ShapeLabel) -> Option<&RecommendationRecord> {
        if label.is_sentinel() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.name.trim().eq_ignore_ascii_case(label.name()))
    }

    pub fn records(&self) -> &[RecommendationRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_shape() -> Result<()> {
        let catalog = Catalog::builtin()?;
        assert_eq!(catalog.records().len(), ShapeLabel::CANDIDATES.len());
        for label in ShapeLabel::CANDIDATES {
            let record = catalog.get(label).with_context(|| format!("{label} missing"))?;
            assert!(!record.description.is_empty());
            assert!(record.styles().count() > 0, "{label} has no styles");
        }
        assert!(catalog.get(ShapeLabel::NoFaceData).is_none());
        assert!(catalog.get(ShapeLabel::Inconclusive).is_none());
        Ok(())
    }

    #[test]
    fn lookup_ignores_case() -> Result<()> {
        let catalog = Catalog::from_json(
            r#"[{"name": "heart", "description": "d", "glasses": [], "pictures": []}]"#,
        )?;
        assert!(catalog.get(ShapeLabel::Heart).is_some());
        assert!(catalog.get(ShapeLabel::Oval).is_none());
        Ok(())
    }

    #[test]
    fn pictures_grouped_by_style() -> Result<()> {
        let catalog = Catalog::from_json(
            r#"[{
                "name": "Oval",
                "description": "d",
                "glasses": [{"Aviator": "a"}, {"Round": "r"}],
                "pictures": [
                    {"glasses": "Round", "picture": " r1.jpg "},
                    {"glasses": "Aviator", "picture": "a1.jpg"},
                    {"glasses": "Round", "picture": "r2.jpg"}
                ]
            }]"#,
        )?;
        let record = catalog.get(ShapeLabel::Oval).context("oval record")?;
        assert_eq!(
            record.pictures_by_style(),
            vec![("Round", vec!["r1.jpg", "r2.jpg"]), ("Aviator", vec!["a1.jpg"])]
        );
        assert_eq!(
            record.styles().collect::<Vec<_>>(),
            vec![("Aviator", "a"), ("Round", "r")]
        );
        Ok(())
    }

    #[test]
    fn malformed_table_is_an_error() {
        assert!(Catalog::from_json(r#"{"name": "Oval"}"#).is_err());
    }
}
