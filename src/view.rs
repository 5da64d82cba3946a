//! Conversion between screen space and map space
//!
//! A [`MapView`] describes how a square map image is drawn onto a canvas:
//! scaled by `zoom` and shifted by `pan`. Screen coordinates are canvas
//! pixels with the y axis pointing down; map coordinates are meters with the
//! y axis pointing up.

use crate::error::{Error, Result};
use crate::types::Vec2;
use log::trace;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;

/// Relative zoom change per mouse wheel notch
pub const ZOOM_WHEEL_STEP: f64 = 0.1;

/// Zoom factor per zoom button press
pub const ZOOM_BUTTON_STEP: f64 = 1.2;

/// Presses shorter than this are clicks, longer ones are drags
pub const DRAG_THRESHOLD_MS: u64 = 200;

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    canvas: Size,
    image: Size,
    map_size: f64,
    zoom: f64,
    pan: Vec2,
}

impl MapView {
    /// Create a view of a map image on a canvas, fitted and centered
    ///
    /// `map_size` is the side length of the map in meters, see
    /// [`MapId::size`](crate::MapId::size).
    pub fn new(canvas: Size, image: Size, map_size: f64) -> Result<Self> {
        if !canvas.is_drawable() {
            return Err(Error::InvalidCanvasSize {
                width: canvas.width,
                height: canvas.height,
            });
        }
        if !image.is_drawable() {
            return Err(Error::InvalidImageSize {
                width: image.width,
                height: image.height,
            });
        }
        if !map_size.is_finite() || map_size <= 0.0 {
            return Err(Error::InvalidMapSize(map_size));
        }

        let mut view = Self {
            canvas,
            image,
            map_size,
            zoom: 1.0,
            pan: Vec2::ZERO,
        };
        view.reset();
        Ok(view)
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Offset of the image's top-left corner on the canvas
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn map_size(&self) -> f64 {
        self.map_size
    }

    /// Zoom level at which the whole image fits the canvas
    pub fn fit_zoom(&self) -> f64 {
        let zoom_x = self.canvas.width / self.image.width;
        let zoom_y = self.canvas.height / self.image.height;
        zoom_x.min(zoom_y)
    }

    /// Fit the image into the canvas and center it
    ///
    /// The fitted zoom is not clamped to [`MIN_ZOOM`]..[`MAX_ZOOM`], so very
    /// large images still fit entirely.
    pub fn reset(&mut self) {
        self.zoom = self.fit_zoom();
        self.pan = self.centered_pan(self.zoom);
        trace!("Reset map view to zoom {} pan {:?}", self.zoom, self.pan);
    }

    /// Replace the canvas size and fit the image again
    pub fn resize(&mut self, canvas: Size) -> Result<()> {
        if !canvas.is_drawable() {
            return Err(Error::InvalidCanvasSize {
                width: canvas.width,
                height: canvas.height,
            });
        }

        self.canvas = canvas;
        self.reset();
        Ok(())
    }

    fn centered_pan(&self, zoom: f64) -> Vec2 {
        Vec2::new(
            (self.canvas.width - self.image.width * zoom) / 2.0,
            (self.canvas.height - self.image.height * zoom) / 2.0,
        )
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom((self.zoom * ZOOM_BUTTON_STEP).min(MAX_ZOOM));
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom((self.zoom / ZOOM_BUTTON_STEP).max(MIN_ZOOM));
    }

    /// Apply one mouse wheel event
    ///
    /// Scrolling down (`delta_y > 0`) zooms out, anything else zooms in.
    pub fn wheel(&mut self, delta_y: f64) {
        let factor = if delta_y > 0.0 {
            1.0 - ZOOM_WHEEL_STEP
        } else {
            1.0 + ZOOM_WHEEL_STEP
        };
        self.set_zoom((self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM));
    }

    fn set_zoom(&mut self, zoom: f64) {
        trace!("Zoom {} -> {}", self.zoom, zoom);
        self.zoom = zoom;
    }

    /// Shift the image by a drag delta in screen pixels
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan = self.pan.add(Vec2::new(dx, dy));
    }

    /// Convert a canvas position to map coordinates
    ///
    /// Positions outside the image are clamped onto the map border.
    pub fn screen_to_map(&self, screen: Vec2) -> Vec2 {
        let image = screen.sub(self.pan).scale(1.0 / self.zoom);

        let x = image.x / self.image.width * self.map_size;
        let y = self.map_size - image.y / self.image.height * self.map_size;

        Vec2::new(x.clamp(0.0, self.map_size), y.clamp(0.0, self.map_size))
    }

    /// Convert map coordinates to a canvas position
    pub fn map_to_screen(&self, map: Vec2) -> Vec2 {
        let image = Vec2::new(
            map.x / self.map_size * self.image.width,
            (self.map_size - map.y) / self.map_size * self.image.height,
        );

        image.scale(self.zoom).add(self.pan)
    }

    /// Convert a map distance in meters to screen pixels
    ///
    /// Used to draw the glide circle around the target.
    pub fn meters_to_pixels(&self, meters: f64) -> f64 {
        meters / self.map_size * self.image.width * self.zoom
    }
}

/// Whether a press of the given duration counts as a click rather than a drag
pub fn is_click(duration_ms: u64) -> bool {
    duration_ms <= DRAG_THRESHOLD_MS
}
