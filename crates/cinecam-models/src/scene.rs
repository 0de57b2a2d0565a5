//! Scene data supplied by the system-data layer.
//!
//! A scene is a star, the bodies orbiting it and any named places. Bodies are
//! laid out along a single axis: `orbit_au` doubles as the world x coordinate
//! and every body sits on the ecliptic line (y = 0).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::WorldPoint;

/// Kind of celestial object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    Star,
    #[default]
    Planet,
    Moon,
    AsteroidBelt,
    GasGiant,
    DwarfPlanet,
    Station,
    Other,
}

impl BodyType {
    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Star => "star",
            BodyType::Planet => "planet",
            BodyType::Moon => "moon",
            BodyType::AsteroidBelt => "asteroid_belt",
            BodyType::GasGiant => "gas_giant",
            BodyType::DwarfPlanet => "dwarf_planet",
            BodyType::Station => "station",
            BodyType::Other => "other",
        }
    }
}

/// A body orbiting the system's star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    /// Unique body identifier
    pub id: String,
    /// Orbital distance in AU, used as the body's position along the x axis
    #[serde(rename = "orbitAU")]
    pub orbit_au: f64,
    /// Physical radius in kilometres, if known
    #[serde(default)]
    pub radius_km: Option<f64>,
    /// Kind of body
    #[serde(default, rename = "type")]
    pub body_type: BodyType,
}

impl CelestialBody {
    /// Create a body with a known radius.
    pub fn new(id: impl Into<String>, orbit_au: f64, radius_km: f64, body_type: BodyType) -> Self {
        Self {
            id: id.into(),
            orbit_au,
            radius_km: Some(radius_km),
            body_type,
        }
    }

    /// World position of the body (on the ecliptic line).
    #[inline]
    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.orbit_au, 0.0)
    }
}

/// The system's central star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct Star {
    /// World x coordinate in AU
    pub x: f64,
    /// World y coordinate in AU
    pub y: f64,
}

impl Star {
    /// World position of the star.
    #[inline]
    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }
}

/// A named place, optionally attached to a body (stations, outposts, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Unique place identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Id of the body this place is attached to
    #[serde(default)]
    pub linked_to: Option<String>,
    /// Own orbital distance, used when the place is not attached to a body
    #[serde(default, rename = "orbitAU")]
    pub orbit_au: Option<f64>,
    /// Physical radius in kilometres, if known
    #[serde(default)]
    pub radius_km: Option<f64>,
}

impl Place {
    /// Create a place attached to a body.
    pub fn linked(id: impl Into<String>, body_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            linked_to: Some(body_id.into()),
            orbit_au: None,
            radius_km: None,
        }
    }
}

/// Immutable scene snapshot: star, bodies and places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct Scene {
    /// Central star; absent means the origin
    #[serde(default)]
    pub star: Option<Star>,
    /// Orbiting bodies, in system-generator order
    #[serde(default)]
    pub bodies: Vec<CelestialBody>,
    /// Named places
    #[serde(default)]
    pub places: Vec<Place>,
}

impl Scene {
    /// Create a scene from its parts.
    pub fn new(star: Option<Star>, bodies: Vec<CelestialBody>, places: Vec<Place>) -> Self {
        Self {
            star,
            bodies,
            places,
        }
    }

    /// Parse a scene from the system-data layer's JSON representation.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Find a body by id.
    pub fn find_body(&self, id: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Find a place by id.
    pub fn find_place(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    /// The star, or a star at the origin when the scene has none.
    pub fn star_or_origin(&self) -> Star {
        self.star.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_defaults_to_origin() {
        let scene = Scene::default();
        let star = scene.star_or_origin();
        assert_eq!(star.x, 0.0);
        assert_eq!(star.y, 0.0);
    }

    #[test]
    fn test_parse_scene_json() {
        let json = r#"{
            "star": { "x": 0.0, "y": 0.0 },
            "bodies": [
                { "id": "terra", "orbitAU": 1.0, "radiusKm": 6371.0, "type": "planet" },
                { "id": "belt", "orbitAU": 2.7, "type": "asteroid_belt" }
            ],
            "places": [
                { "id": "dock", "linkedTo": "terra" }
            ]
        }"#;

        let scene = Scene::from_json_str(json).unwrap();
        assert_eq!(scene.bodies.len(), 2);
        assert_eq!(scene.find_body("terra").unwrap().radius_km, Some(6371.0));
        assert_eq!(scene.find_body("belt").unwrap().radius_km, None);
        assert_eq!(scene.find_body("belt").unwrap().body_type, BodyType::AsteroidBelt);
        assert_eq!(
            scene.find_place("dock").unwrap().linked_to.as_deref(),
            Some("terra")
        );
    }

    #[test]
    fn test_body_position_on_ecliptic() {
        let body = CelestialBody::new("mars", 1.52, 3389.5, BodyType::Planet);
        let pos = body.position();
        assert!((pos.x - 1.52).abs() < 1e-12);
        assert_eq!(pos.y, 0.0);
    }
}
