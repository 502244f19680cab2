//! Landmark data model produced by an external detector.
//!
//! The engine treats detection as a black box: per frame it receives zero or
//! more optional landmark sets, one per body region. Absence of a region is a
//! first-class value and never an error; every pass shares the single
//! presence query [`LandmarkFrame::region`].

use crate::foundation::core::{Canvas, Point};

/// One detected anatomical keypoint in normalized image coordinates.
///
/// `x` and `y` are in `[0, 1]` with the origin at the top-left. `z` is a
/// relative depth where provided by the detector; `visibility` is a
/// confidence in `[0, 1]` supplied for pose landmarks only.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Landmark {
    /// Normalized horizontal position.
    pub x: f64,
    /// Normalized vertical position.
    pub y: f64,
    /// Relative depth, if the detector supplies one.
    #[serde(default)]
    pub z: Option<f64>,
    /// Visibility/confidence in `[0, 1]` (pose landmarks only).
    #[serde(default)]
    pub visibility: Option<f64>,
}

impl Landmark {
    /// Build a landmark from normalized coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    /// Same, with a visibility score attached.
    pub fn with_visibility(x: f64, y: f64, visibility: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: Some(visibility),
        }
    }

    /// Convert to pixel space for the given frame dimensions.
    pub fn to_pixel(self, canvas: Canvas) -> Point {
        Point::new(self.x * f64::from(canvas.width), self.y * f64::from(canvas.height))
    }

    /// Visibility score, treating an absent score as fully invisible.
    pub fn visibility_or_zero(self) -> f64 {
        self.visibility.unwrap_or(0.0)
    }
}

/// Ordered, fixed-length sequence of landmarks for one region.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LandmarkSet {
    /// Landmarks in detector order.
    pub points: Vec<Landmark>,
}

impl LandmarkSet {
    /// Wrap a detector output.
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    /// Landmark at `index`, or `None` when the detector emitted fewer points.
    pub fn point(&self, index: usize) -> Option<Landmark> {
        self.points.get(index).copied()
    }

    /// Landmark at `index` converted to pixel space.
    pub fn pixel_point(&self, index: usize, canvas: Canvas) -> Option<Point> {
        self.point(index).map(|lm| lm.to_pixel(canvas))
    }
}

/// Body regions a detector may report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LandmarkRegion {
    /// Dense face mesh landmarks.
    Face,
    /// Whole-body pose landmarks (carry visibility scores).
    Pose,
    /// Left hand landmarks.
    LeftHand,
    /// Right hand landmarks.
    RightHand,
}

/// Per-frame detection result: an optional landmark set per region.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LandmarkFrame {
    /// Face mesh landmarks, if a face was detected.
    #[serde(default)]
    pub face: Option<LandmarkSet>,
    /// Pose landmarks, if a body was detected.
    #[serde(default)]
    pub pose: Option<LandmarkSet>,
    /// Left-hand landmarks, if detected.
    #[serde(default)]
    pub left_hand: Option<LandmarkSet>,
    /// Right-hand landmarks, if detected.
    #[serde(default)]
    pub right_hand: Option<LandmarkSet>,
}

impl LandmarkFrame {
    /// A frame with nothing detected.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Unified presence query: the landmark set for `region`, if detected.
    pub fn region(&self, region: LandmarkRegion) -> Option<&LandmarkSet> {
        match region {
            LandmarkRegion::Face => self.face.as_ref(),
            LandmarkRegion::Pose => self.pose.as_ref(),
            LandmarkRegion::LeftHand => self.left_hand.as_ref(),
            LandmarkRegion::RightHand => self.right_hand.as_ref(),
        }
    }

    /// Whether `region` was detected this frame.
    pub fn has_region(&self, region: LandmarkRegion) -> bool {
        self.region(region).is_some()
    }
}
