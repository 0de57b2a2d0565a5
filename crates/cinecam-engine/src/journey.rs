//! Camera journeys between two world points.
//!
//! Position is a straight lerp. Zoom follows a three-phase envelope keyed on
//! the travel distance: pull back while departing, hold wide in transit, push
//! in on arrival.
//!
//! | phase     | progress      | zoom                              |
//! |-----------|---------------|-----------------------------------|
//! | departure | `< 0.3`       | `base * (1.5 - progress)`         |
//! | transit   | `0.3 ..= 0.7` | `base * 0.5`                      |
//! | arrival   | `> 0.7`       | `base * (0.5 + (progress - 0.7) * 3)` |

use cinecam_models::{JourneyKeyframe, JourneyPhase, WorldPoint};

use crate::projection::{floor_zoom, PIXELS_PER_AU};

/// Fraction of a 100px-per-AU frame the journey distance should span.
const JOURNEY_FRAME_FILL: f64 = 0.8;

/// Base zoom used when both endpoints coincide.
const ZERO_DISTANCE_ZOOM: f64 = 1.0;

/// Base zoom for a journey covering `distance_au`.
pub fn journey_base_zoom(distance_au: f64) -> f64 {
    if !(distance_au.is_finite() && distance_au > 0.0) {
        return ZERO_DISTANCE_ZOOM;
    }
    floor_zoom(JOURNEY_FRAME_FILL / (distance_au * PIXELS_PER_AU))
}

/// Zoom envelope value at `progress` for a journey with `base_zoom`.
pub fn journey_zoom(base_zoom: f64, progress: f64) -> f64 {
    match JourneyPhase::from_progress(progress) {
        JourneyPhase::Departure => base_zoom * (1.5 - progress),
        JourneyPhase::Transit => base_zoom * 0.5,
        JourneyPhase::Arrival => {
            base_zoom * (0.5 + (progress - JourneyPhase::TRANSIT_END) * 3.0)
        }
    }
}

/// Camera state at `progress` (clamped to [0, 1]) along the journey `from -> to`.
pub fn generate_journey_camera(
    from: WorldPoint,
    to: WorldPoint,
    progress: f64,
) -> JourneyKeyframe {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let position = from.lerp(&to, progress);
    let base = journey_base_zoom(from.distance_to(&to));

    JourneyKeyframe {
        x: position.x,
        y: position.y,
        zoom: journey_zoom(base, progress),
        progress,
        phase: JourneyPhase::from_progress(progress),
    }
}

/// Progress values for `count` evenly spaced samples over [0, 1].
///
/// A single sample sits at the start of the journey.
pub fn sample_progress(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}

/// Sample `count` keyframes along the journey `from -> to`.
pub fn interpolate_journey(from: WorldPoint, to: WorldPoint, count: usize) -> Vec<JourneyKeyframe> {
    sample_progress(count)
        .into_iter()
        .map(|p| generate_journey_camera(from, to, p))
        .collect()
}
