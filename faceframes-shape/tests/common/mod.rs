#![allow(dead_code)]

use faceframes_shape::landmarks::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Proportions of a synthetic frontal face.
///
/// Widths are fractions of the cheek width; `height` is face height (chin to
/// the inner-brow midpoint) over cheek width.
#[derive(Debug, Clone, Copy)]
pub struct FaceGeometry {
    pub cheek: f64,
    pub height: f64,
    pub jaw: f64,
    pub forehead: f64,
    pub jaw_angle: f64,
}

impl FaceGeometry {
    pub fn new(height: f64, jaw: f64, forehead: f64, jaw_angle: f64) -> Self {
        Self {
            cheek: 100.0,
            height,
            jaw,
            forehead,
            jaw_angle,
        }
    }

    /// Lay the face out as 68 image-space landmarks centered at (320, 200).
    pub fn landmarks(&self) -> Vec<Point> {
        let (cx, cy) = (320.0, 200.0);
        let cheek = self.cheek;
        let jaw = self.jaw * cheek;
        let forehead = self.forehead * cheek;
        let height = self.height * cheek;
        let face = 1.1 * cheek.max(jaw).max(forehead);
        let drop = (jaw / 2.0) / (self.jaw_angle.to_radians() / 2.0).tan();

        // Points the engine does not read only need plausible spots.
        let mut points: Vec<Point> = (0..NUM_LANDMARKS)
            .map(|i| {
                let side = if i % 2 == 0 { -1.0 } else { 1.0 };
                Point::new(cx + side * (i % 7) as f64 * 3.0, cy + 10.0 + i as f64)
            })
            .collect();

        points[BROW_LEFT_INNER] = Point::new(cx - 12.0, cy);
        points[BROW_RIGHT_INNER] = Point::new(cx + 12.0, cy);
        points[BROW_LEFT_OUTER] = Point::new(cx - forehead / 2.0, cy - 4.0);
        points[BROW_RIGHT_OUTER] = Point::new(cx + forehead / 2.0, cy - 4.0);
        points[FACE_LEFT] = Point::new(cx - face / 2.0, cy + 0.1 * height);
        points[FACE_RIGHT] = Point::new(cx + face / 2.0, cy + 0.1 * height);
        points[CHEEK_LEFT] = Point::new(cx - cheek / 2.0, cy + 0.35 * height);
        points[CHEEK_RIGHT] = Point::new(cx + cheek / 2.0, cy + 0.35 * height);
        points[JAW_LEFT] = Point::new(cx - jaw / 2.0, cy + height - drop);
        points[JAW_RIGHT] = Point::new(cx + jaw / 2.0, cy + height - drop);
        points[CHIN] = Point::new(cx, cy + height);
        points[NOSE_LEFT] = Point::new(cx - 15.0, cy + 0.45 * height);
        points[NOSE_RIGHT] = Point::new(cx + 15.0, cy + 0.45 * height);
        points[MOUTH_LEFT] = Point::new(cx - 25.0, cy + 0.7 * height);
        points[MOUTH_RIGHT] = Point::new(cx + 25.0, cy + 0.7 * height);
        points
    }
}

pub fn square() -> FaceGeometry {
    FaceGeometry::new(1.0, 1.0, 1.0, 90.0)
}

pub fn heart() -> FaceGeometry {
    FaceGeometry::new(1.25, 0.7, 1.3, 121.0)
}

pub fn diamond() -> FaceGeometry {
    FaceGeometry {
        cheek: 130.0,
        ..FaceGeometry::new(1.25, 100.0 / 130.0, 100.0 / 130.0, 121.0)
    }
}

pub fn ambiguous() -> FaceGeometry {
    FaceGeometry::new(1.25, 0.945, 1.055, 121.0)
}

pub fn oval() -> FaceGeometry {
    FaceGeometry::new(1.4, 0.88, 0.95, 140.0)
}

pub fn round() -> FaceGeometry {
    FaceGeometry::new(1.0, 0.93, 0.92, 140.0)
}

pub fn oblong() -> FaceGeometry {
    FaceGeometry::new(1.6, 0.9, 0.95, 105.0)
}

pub fn triangle() -> FaceGeometry {
    FaceGeometry::new(1.25, 1.3, 0.75, 121.0)
}

pub fn all_faces() -> Vec<(&'static str, FaceGeometry)> {
    vec![
        ("square", square()),
        ("heart", heart()),
        ("diamond", diamond()),
        ("ambiguous", ambiguous()),
        ("oval", oval()),
        ("round", round()),
        ("oblong", oblong()),
        ("triangle", triangle()),
    ]
}

/// Shift every landmark by up to `amount` pixels in each direction.
pub fn jitter(points: &[Point], amount: f64, rng: &mut StdRng) -> Vec<Point> {
    points
        .iter()
        .map(|p| {
            Point::new(
                p.x + rng.gen_range(-amount..=amount),
                p.y + rng.gen_range(-amount..=amount),
            )
        })
        .collect()
}

/// Landmarks scattered uniformly over a 640x480 frame.
pub fn random_landmarks(rng: &mut StdRng) -> Vec<Point> {
    (0..NUM_LANDMARKS)
        .map(|_| Point::new(rng.gen_range(0.0..640.0), rng.gen_range(0.0..480.0)))
        .collect()
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn scaled(points: &[Point], factor: f64) -> Vec<Point> {
    points.iter().map(|p| p.scale(factor)).collect()
}
