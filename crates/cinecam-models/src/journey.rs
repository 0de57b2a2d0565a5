//! Journey keyframes handed to the animation layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Phase of a camera journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JourneyPhase {
    /// Pulling back from the origin (progress < 0.3).
    Departure,
    /// Wide cruise between the endpoints (0.3 ..= 0.7).
    Transit,
    /// Pushing in on the destination (progress > 0.7).
    Arrival,
}

impl JourneyPhase {
    /// Progress at which departure ends.
    pub const TRANSIT_START: f64 = 0.3;
    /// Progress at which transit ends.
    pub const TRANSIT_END: f64 = 0.7;

    /// Phase for a normalized progress value.
    pub fn from_progress(progress: f64) -> Self {
        if progress < Self::TRANSIT_START {
            JourneyPhase::Departure
        } else if progress <= Self::TRANSIT_END {
            JourneyPhase::Transit
        } else {
            JourneyPhase::Arrival
        }
    }

    /// Returns the phase name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyPhase::Departure => "departure",
            JourneyPhase::Transit => "transit",
            JourneyPhase::Arrival => "arrival",
        }
    }
}

/// One sampled camera state along a journey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JourneyKeyframe {
    /// World x coordinate (AU)
    pub x: f64,
    /// World y coordinate (AU)
    pub y: f64,
    /// Zoom multiplier
    pub zoom: f64,
    /// Normalized progress in [0, 1]
    pub progress: f64,
    /// Zoom envelope phase at this progress
    pub phase: JourneyPhase,
}
