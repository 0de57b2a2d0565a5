//! Camera and canvas types exchanged with the renderer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::candidate_kind::CandidateKind;

/// A point in world space, in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    /// Create a new world point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in AU.
    #[inline]
    pub fn distance_to(&self, other: &WorldPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation towards `other` (`t = 0` is `self`).
    #[inline]
    pub fn lerp(&self, other: &WorldPoint, t: f64) -> WorldPoint {
        WorldPoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// Create a canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Length of the shorter side.
    #[inline]
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Canvas center in screen coordinates.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Whether both dimensions are finite and positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Camera placement consumed by the renderer to set its world-to-screen transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CameraView {
    /// World x coordinate at the canvas center (AU)
    pub x: f64,
    /// World y coordinate at the canvas center (AU)
    pub y: f64,
    /// Zoom multiplier applied on top of the pixels-per-AU scale
    pub zoom: f64,
    /// Composition score of the chosen placement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Which candidate produced the placement
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CandidateKind>,
}

impl CameraView {
    /// A bare transform without scoring metadata.
    pub fn at(x: f64, y: f64, zoom: f64) -> Self {
        Self {
            x,
            y,
            zoom,
            score: None,
            kind: None,
        }
    }

    /// World point at the canvas center.
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }
}
