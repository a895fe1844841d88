//! 68-point landmark scheme and named access to the points the engine reads.
//!
//! Index layout (subject's right side first, i.e. image left):
//!
//! - 0-16: jaw contour
//! - 17-21: right eyebrow, 22-26: left eyebrow
//! - 27-35: nose bridge and base
//! - 36-41: right eye, 42-47: left eye
//! - 48-59: outer lip, 60-67: inner lip

use serde::{Deserialize, Serialize};

/// Number of points in the standard facial landmark scheme.
pub const NUM_LANDMARKS: usize = 68;

pub const FACE_LEFT: usize = 0;
pub const CHEEK_LEFT: usize = 2;
pub const JAW_LEFT: usize = 4;
pub const CHIN: usize = 8;
pub const JAW_RIGHT: usize = 12;
pub const CHEEK_RIGHT: usize = 14;
pub const FACE_RIGHT: usize = 16;
pub const BROW_LEFT_OUTER: usize = 17;
pub const BROW_LEFT_INNER: usize = 21;
pub const BROW_RIGHT_INNER: usize = 22;
pub const BROW_RIGHT_OUTER: usize = 26;
pub const NOSE_LEFT: usize = 31;
pub const NOSE_RIGHT: usize = 35;
pub const MOUTH_LEFT: usize = 48;
pub const MOUTH_RIGHT: usize = 54;

/// A 2D point in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn scale(&self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Named view over the landmarks used for shape measurements.
///
/// "Left" and "right" follow image order: `jaw_left` is landmark 4, which sits
/// on the left of the picture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLandmarks {
    pub chin: Point,
    pub jaw_left: Point,
    pub jaw_right: Point,
    pub cheek_left: Point,
    pub cheek_right: Point,
    pub face_left: Point,
    pub face_right: Point,
    pub brow_left_outer: Point,
    pub brow_left_inner: Point,
    pub brow_right_inner: Point,
    pub brow_right_outer: Point,
    pub nose_left: Point,
    pub nose_right: Point,
    pub mouth_left: Point,
    pub mouth_right: Point,
}

impl FaceLandmarks {
    /// Pick the named points out of a raw landmark list.
    ///
    /// Returns `None` if fewer than [`NUM_LANDMARKS`] points are given. Extra
    /// points (81-point models) are ignored.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        if points.len() < NUM_LANDMARKS {
            return None;
        }

        Some(Self {
            chin: points[CHIN],
            jaw_left: points[JAW_LEFT],
            jaw_right: points[JAW_RIGHT],
            cheek_left: points[CHEEK_LEFT],
            cheek_right: points[CHEEK_RIGHT],
            face_left: points[FACE_LEFT],
            face_right: points[FACE_RIGHT],
            brow_left_outer: points[BROW_LEFT_OUTER],
            brow_left_inner: points[BROW_LEFT_INNER],
            brow_right_inner: points[BROW_RIGHT_INNER],
            brow_right_outer: points[BROW_RIGHT_OUTER],
            nose_left: points[NOSE_LEFT],
            nose_right: points[NOSE_RIGHT],
            mouth_left: points[MOUTH_LEFT],
            mouth_right: points[MOUTH_RIGHT],
        })
    }

    /// Synthetic forehead top: midpoint of the two inner eyebrow corners.
    pub fn top(&self) -> Point {
        self.brow_left_inner.midpoint(&self.brow_right_inner)
    }
}

/// Index of the landmark that `idx` maps onto when the face is mirrored.
fn mirror_index(idx: usize) -> usize {
    match idx {
        0..=16 => 16 - idx,
        17..=26 => 43 - idx,
        27..=30 => idx,
        31..=35 => 66 - idx,
        36..=39 => 81 - idx,
        40..=41 => 87 - idx,
        42..=45 => 81 - idx,
        46..=47 => 87 - idx,
        48..=54 => 102 - idx,
        55..=59 => 114 - idx,
        60..=64 => 124 - idx,
        65..=67 => 132 - idx,
        _ => idx,
    }
}

/// Mirror a landmark set left to right.
///
/// Every x coordinate is negated and each left-side landmark trades places
/// with its right-side counterpart, so the result is again a valid 68-point
/// layout. Lists shorter than 68 points are only negated.
pub fn mirror_landmarks(points: &[Point]) -> Vec<Point> {
    let flip = |p: &Point| Point::new(-p.x, p.y);

    if points.len() < NUM_LANDMARKS {
        return points.iter().map(flip).collect();
    }

    let mut mirrored: Vec<Point> = points.iter().map(flip).collect();
    for (idx, p) in points.iter().take(NUM_LANDMARKS).enumerate() {
        mirrored[mirror_index(idx)] = flip(p);
    }
    mirrored
}
