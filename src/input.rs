use anyhow::{Context, Result};
use faceframes_shape::Point;
use serde::Deserialize;
use std::path::Path;

/// One landmark as written by detectors: either `{"x": .., "y": ..}` or `[x, y]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Object { x, y } => Point::new(x, y),
            RawPoint::Pair([x, y]) => Point::new(x, y),
        }
    }
}

pub fn parse_landmarks(raw: &str) -> Result<Vec<Point>> {
    let points: Vec<RawPoint> = serde_json::from_str(raw)?;
    Ok(points.into_iter().map(Point::from).collect())
}

/// Read a JSON array of landmarks. The count is not checked here.
pub fn load_landmarks(path: &Path) -> Result<Vec<Point>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading landmarks {}", path.display()))?;
    parse_landmarks(&raw).with_context(|| format!("parsing landmarks {}", path.display()))
}
