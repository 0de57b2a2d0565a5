//! Target resolution.
//!
//! Bodies and places carry different optional fields. Both are normalized
//! here, once, into a [`ResolvedTarget`] so the rest of the engine never
//! deals with missing radii or unlinked places.

use cinecam_models::{CelestialBody, Place, Scene, WorldPoint};
use tracing::debug;

use crate::error::{CameraError, CameraResult};

/// Radius assumed for bodies without a usable radius.
pub const DEFAULT_BODY_RADIUS_KM: f64 = 6000.0;

/// Radius assumed for places (station scale).
pub const DEFAULT_PLACE_RADIUS_KM: f64 = 50.0;

/// Something a camera can be pointed at.
#[derive(Debug, Clone, Copy)]
pub enum SceneObject<'a> {
    Body(&'a CelestialBody),
    Place(&'a Place),
}

impl<'a> SceneObject<'a> {
    /// Look up `id` among bodies first, then places.
    pub fn find(scene: &'a Scene, id: &str) -> Option<Self> {
        scene
            .find_body(id)
            .map(SceneObject::Body)
            .or_else(|| scene.find_place(id).map(SceneObject::Place))
    }

    /// Identifier of the underlying object.
    pub fn id(&self) -> &'a str {
        match self {
            SceneObject::Body(body) => &body.id,
            SceneObject::Place(place) => &place.id,
        }
    }

    /// Normalize to orbit and radius.
    pub fn resolve(&self, scene: &Scene) -> ResolvedTarget {
        match self {
            SceneObject::Body(body) => ResolvedTarget {
                id: body.id.clone(),
                orbit_au: body.orbit_au,
                radius_km: body_radius_km(body),
            },
            SceneObject::Place(place) => {
                let linked = place
                    .linked_to
                    .as_deref()
                    .and_then(|body_id| scene.find_body(body_id));

                let orbit_au = match linked {
                    Some(body) => body.orbit_au,
                    None => {
                        debug!(
                            place = %place.id,
                            linked_to = ?place.linked_to,
                            "Place has no resolvable body, using its own orbit"
                        );
                        place.orbit_au.unwrap_or(0.0)
                    }
                };

                ResolvedTarget {
                    id: place.id.clone(),
                    orbit_au,
                    radius_km: positive(place.radius_km).unwrap_or(DEFAULT_PLACE_RADIUS_KM),
                }
            }
        }
    }
}

/// A target normalized to the two quantities framing needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTarget {
    /// Id of the body or place
    pub id: String,
    /// Position along the x axis (AU)
    pub orbit_au: f64,
    /// Physical radius (km), always positive
    pub radius_km: f64,
}

impl ResolvedTarget {
    /// World position of the target (on the ecliptic line).
    #[inline]
    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.orbit_au, 0.0)
    }
}

/// Resolve `id` in `scene`, or fail with [`CameraError::TargetNotFound`].
pub fn resolve_target(scene: &Scene, id: &str) -> CameraResult<ResolvedTarget> {
    SceneObject::find(scene, id)
        .map(|object| object.resolve(scene))
        .ok_or_else(|| CameraError::target_not_found(id))
}

/// Radius of a body, with the default applied to missing or non-positive values.
pub fn body_radius_km(body: &CelestialBody) -> f64 {
    positive(body.radius_km).unwrap_or(DEFAULT_BODY_RADIUS_KM)
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
