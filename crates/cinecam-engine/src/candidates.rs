//! Camera candidate generation.
//!
//! Proposes a fixed palette of placements for one target. Every zoom level is
//! derived from a base zoom calibrated so the target's diameter fills half of
//! a reference frame:
//!
//! ```text
//! base_zoom = 0.5 / (radius_au * PIXELS_PER_AU * 2 / reference_frame_px)
//! ```
//!
//! The palette is emitted in a fixed order; the selector uses that order to
//! break score ties.

use cinecam_models::{CandidateKind, WorldPoint};

use crate::context::ViewContext;
use crate::projection::{floor_zoom, km_to_au, MIN_ZOOM, PIXELS_PER_AU, REFERENCE_FRAME_PX};
use crate::target::{ResolvedTarget, DEFAULT_BODY_RADIUS_KM};

/// Target diameter as a fraction of the reference frame at base zoom.
const DIRECT_FILL: f64 = 0.5;

/// Rule-of-thirds offset as a fraction of the reference frame.
const THIRDS_OFFSET: f64 = 0.12;

/// Fraction of the reference frame the context span should fill.
const CONTEXT_FILL: f64 = 0.8;

/// How far (0-1) from the nearest inner body towards the target the
/// over-shoulder camera sits.
const OVER_SHOULDER_T: f64 = 0.3;

/// Vertical lift (AU) of the over-shoulder camera.
const OVER_SHOULDER_LIFT_AU: f64 = 0.1;

/// One hypothesized camera placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraCandidate {
    /// World x at the canvas center (AU)
    pub x: f64,
    /// World y at the canvas center (AU)
    pub y: f64,
    /// Zoom level, always >= `MIN_ZOOM`
    pub zoom: f64,
    /// Which palette entry produced this candidate
    pub kind: CandidateKind,
}

impl CameraCandidate {
    /// Create a candidate; the zoom is floored at `MIN_ZOOM`.
    pub fn new(x: f64, y: f64, zoom: f64, kind: CandidateKind) -> Self {
        Self {
            x,
            y,
            zoom: floor_zoom(zoom),
            kind,
        }
    }

    /// Camera center in world space.
    #[inline]
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }
}

/// Options for candidate generation.
#[derive(Debug, Clone, Copy)]
pub struct CandidateOptions {
    /// Frame size (px) zoom levels are calibrated against.
    pub reference_frame_px: f64,
}

impl Default for CandidateOptions {
    fn default() -> Self {
        Self {
            reference_frame_px: REFERENCE_FRAME_PX,
        }
    }
}

/// Zoom at which a body of `radius_km` fills half of the reference frame.
pub fn base_zoom(radius_km: f64, reference_frame_px: f64) -> f64 {
    let radius_km = if radius_km.is_finite() && radius_km > 0.0 {
        radius_km
    } else {
        DEFAULT_BODY_RADIUS_KM
    };
    let diameter_fraction = km_to_au(radius_km) * PIXELS_PER_AU * 2.0 / reference_frame_px;
    let zoom = DIRECT_FILL / diameter_fraction;
    if zoom.is_finite() {
        floor_zoom(zoom)
    } else {
        MIN_ZOOM
    }
}

/// Generate the candidate palette for `target`.
///
/// Always returns at least the direct, four thirds, establishing, close and
/// medium candidates. Context requires more than one context body and
/// over-shoulder requires an inner body.
pub fn generate_candidates(
    target: &ResolvedTarget,
    context: &ViewContext<'_>,
    options: &CandidateOptions,
) -> Vec<CameraCandidate> {
    let frame = options.reference_frame_px;
    let zoom = base_zoom(target.radius_km, frame);
    let tx = target.orbit_au;
    let ty = 0.0;

    let mut candidates = Vec::with_capacity(CandidateKind::ALL.len());

    candidates.push(CameraCandidate::new(tx, ty, zoom, CandidateKind::Direct));

    // Moving the camera by +d puts the target at -d on screen.
    let d = THIRDS_OFFSET * frame / (PIXELS_PER_AU * zoom);
    for (kind, dx, dy) in [
        (CandidateKind::ThirdsTopLeft, d, d),
        (CandidateKind::ThirdsTopRight, -d, d),
        (CandidateKind::ThirdsBottomLeft, d, -d),
        (CandidateKind::ThirdsBottomRight, -d, -d),
    ] {
        candidates.push(CameraCandidate::new(tx + dx, ty + dy, zoom, kind));
    }

    let star = context.star;
    candidates.push(CameraCandidate::new(
        (star.x + tx) / 2.0,
        (star.y + ty) / 2.0,
        zoom * 0.25,
        CandidateKind::Establishing,
    ));

    if context.bodies.len() > 1 {
        if let Some((lo, hi)) = context.orbit_span() {
            let span = hi - lo;
            let context_zoom = if span > 0.0 {
                CONTEXT_FILL * frame / (span * PIXELS_PER_AU)
            } else {
                zoom * 0.5
            };
            candidates.push(CameraCandidate::new(
                (lo + hi) / 2.0,
                0.0,
                context_zoom,
                CandidateKind::Context,
            ));
        }
    }

    if let Some(nearest) = context.nearest_inner() {
        let x = nearest.orbit_au + (tx - nearest.orbit_au) * OVER_SHOULDER_T;
        candidates.push(CameraCandidate::new(
            x,
            ty + OVER_SHOULDER_LIFT_AU,
            zoom * 0.7,
            CandidateKind::OverShoulder,
        ));
    }

    candidates.push(CameraCandidate::new(tx, ty, zoom * 1.5, CandidateKind::Close));
    candidates.push(CameraCandidate::new(tx, ty, zoom * 0.5, CandidateKind::Medium));

    candidates
}
