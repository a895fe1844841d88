//! Geometric measurements derived from a landmark set.
//!
//! All widths and the face height are absolute pixel distances; the `*_norm`
//! fields divide them by the outer face width so they do not depend on image
//! resolution or distance to the camera. The classifier only ever looks at
//! ratios, never at raw pixels.

use serde::Serialize;

use crate::landmarks::{FaceLandmarks, Point};

/// Measurements below this many pixels are treated as collapsed geometry.
pub const DEGENERATE_EPSILON: f64 = 1e-9;

/// Jaw angle reported for rays that have no direction.
pub const FLAT_ANGLE: f64 = 180.0;

/// Measurements for a single classification call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureBundle {
    /// Chin to the midpoint of the inner eyebrow corners
    pub face_height: f64,
    /// Jaw contour points 4-12
    pub jaw_width: f64,
    /// Cheek contour points 2-14
    pub cheek_width: f64,
    /// Outer eyebrow corners 17-26
    pub forehead_width: f64,
    /// Outer face contour 0-16, the normalization reference
    pub face_width: f64,
    /// Nostril corners 31-35
    pub nose_width: f64,
    /// Mouth corners 48-54
    pub mouth_width: f64,
    /// Interior angle at the chin between the two jaw points, in degrees
    pub jaw_angle: f64,

    pub height_norm: f64,
    pub jaw_norm: f64,
    pub cheek_norm: f64,
    pub forehead_norm: f64,
}

impl FeatureBundle {
    /// Measure a landmark set.
    ///
    /// Returns `None` if the set has fewer than 68 points. Never panics on
    /// degenerate geometry.
    pub fn extract(points: &[Point]) -> Option<Self> {
        FaceLandmarks::from_points(points).map(|face| Self::from_landmarks(&face))
    }

    pub fn from_landmarks(face: &FaceLandmarks) -> Self {
        let face_height = face.chin.distance(&face.top());
        let jaw_width = face.jaw_left.distance(&face.jaw_right);
        let cheek_width = face.cheek_left.distance(&face.cheek_right);
        let forehead_width = face.brow_left_outer.distance(&face.brow_right_outer);
        let face_width = face.face_left.distance(&face.face_right);

        Self {
            face_height,
            jaw_width,
            cheek_width,
            forehead_width,
            face_width,
            nose_width: face.nose_left.distance(&face.nose_right),
            mouth_width: face.mouth_left.distance(&face.mouth_right),
            jaw_angle: angle_at(face.chin, face.jaw_left, face.jaw_right),
            height_norm: ratio(face_height, face_width),
            jaw_norm: ratio(jaw_width, face_width),
            cheek_norm: ratio(cheek_width, face_width),
            forehead_norm: ratio(forehead_width, face_width),
        }
    }

    /// Face height relative to cheek width (elongation).
    pub fn height_to_cheek(&self) -> f64 {
        ratio(self.face_height, self.cheek_width)
    }

    pub fn jaw_to_cheek(&self) -> f64 {
        ratio(self.jaw_width, self.cheek_width)
    }

    pub fn forehead_to_cheek(&self) -> f64 {
        ratio(self.forehead_width, self.cheek_width)
    }

    /// True when the face has collapsed to a line or a point, or when any
    /// scored measurement came from a NaN or infinite landmark.
    ///
    /// The jaw angle is built from the chin and jaw points, so a bad jaw ray
    /// already shows up here as a non-finite height or jaw width.
    pub fn is_degenerate(&self) -> bool {
        let measured = [
            self.face_height,
            self.jaw_width,
            self.cheek_width,
            self.forehead_width,
            self.face_width,
        ];
        measured.iter().any(|m| !m.is_finite())
            || !(self.cheek_width > DEGENERATE_EPSILON && self.face_height > DEGENERATE_EPSILON)
    }
}

/// Divide, returning 0.0 instead of NaN or infinity.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > DEGENERATE_EPSILON && denominator.is_finite() && numerator.is_finite() {
        numerator / denominator
    } else {
        0.0
    }
}

/// Interior angle at `vertex` between the rays to `a` and `b`, in degrees.
///
/// A ray of zero (or non-finite) length has no direction; the angle is then
/// reported as [`FLAT_ANGLE`].
pub fn angle_at(vertex: Point, a: Point, b: Point) -> f64 {
    let va = a - vertex;
    let vb = b - vertex;
    let norm = va.length() * vb.length();
    if !(norm > DEGENERATE_EPSILON) || !norm.is_finite() {
        return FLAT_ANGLE;
    }

    let cos = (va.dot(&vb) / norm).clamp(-1.0, 1.0);
    if cos.is_nan() {
        return FLAT_ANGLE;
    }
    cos.acos().to_degrees()
}
