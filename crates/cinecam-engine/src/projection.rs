//! World (AU) to screen (px) transforms.
//!
//! The renderer draws `PIXELS_PER_AU` pixels per AU at zoom 1.0, with the
//! camera position mapped to the canvas center. Screen y grows downwards in
//! the same direction as world y.

use cinecam_models::{CameraView, CanvasSize, WorldPoint};

/// Screen pixels per AU at zoom 1.0.
pub const PIXELS_PER_AU: f64 = 100.0;

/// Kilometres per astronomical unit.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Reference frame (px) used to calibrate candidate zoom levels.
pub const REFERENCE_FRAME_PX: f64 = 400.0;

/// Lower bound for every zoom level.
pub const MIN_ZOOM: f64 = 0.1;

/// Convert kilometres to AU.
#[inline]
pub fn km_to_au(km: f64) -> f64 {
    km / KM_PER_AU
}

/// Floor a zoom level at `MIN_ZOOM`, mapping NaN to the floor as well.
#[inline]
pub fn floor_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        MIN_ZOOM
    } else {
        zoom.max(MIN_ZOOM)
    }
}

/// A point in screen space (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    /// Euclidean distance to another screen point.
    #[inline]
    pub fn distance_to(&self, other: &ScreenPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Camera transform for one canvas.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    center: WorldPoint,
    zoom: f64,
    canvas: CanvasSize,
}

impl Projection {
    /// Create a projection centered on `center` at `zoom`.
    pub fn new(center: WorldPoint, zoom: f64, canvas: CanvasSize) -> Self {
        Self {
            center,
            zoom,
            canvas,
        }
    }

    /// Projection for a camera view.
    pub fn for_view(view: &CameraView, canvas: CanvasSize) -> Self {
        Self::new(view.center(), view.zoom, canvas)
    }

    /// Same projection with the camera's vertical offset removed.
    pub fn on_ecliptic(&self) -> Self {
        Self {
            center: WorldPoint::new(self.center.x, 0.0),
            ..*self
        }
    }

    /// Pixels per AU at this zoom.
    #[inline]
    pub fn scale(&self) -> f64 {
        PIXELS_PER_AU * self.zoom
    }

    /// Canvas this projection targets.
    #[inline]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Project a world point to screen space.
    pub fn world_to_screen(&self, point: WorldPoint) -> ScreenPoint {
        let (cx, cy) = self.canvas.center();
        ScreenPoint {
            x: (point.x - self.center.x) * self.scale() + cx,
            y: (point.y - self.center.y) * self.scale() + cy,
        }
    }

    /// Inverse of [`Projection::world_to_screen`].
    pub fn screen_to_world(&self, point: ScreenPoint) -> WorldPoint {
        let (cx, cy) = self.canvas.center();
        WorldPoint {
            x: (point.x - cx) / self.scale() + self.center.x,
            y: (point.y - cy) / self.scale() + self.center.y,
        }
    }

    /// Project a length in kilometres to pixels.
    #[inline]
    pub fn km_to_pixels(&self, km: f64) -> f64 {
        km_to_au(km) * self.scale()
    }

    /// Whether `point` lies inside the canvas shrunk by `margin` on every side.
    ///
    /// A negative margin grows the accepted region beyond the canvas edges.
    pub fn is_within(&self, point: ScreenPoint, margin: f64) -> bool {
        point.x >= margin
            && point.x <= self.canvas.width - margin
            && point.y >= margin
            && point.y <= self.canvas.height - margin
    }
}
