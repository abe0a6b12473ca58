//! Core state types for the N-body simulation.
//!
//! - `Body`     one point mass (position, velocity, mass, radius, tint)
//! - `BodyView` read-only per-body snapshot handed to the renderer
//! - `Viewport` the `[0, width) x [0, height)` screen rectangle
//!
//! Coordinates are screen coordinates: origin top-left, y grows downward.

use nalgebra::Vector2;

use crate::error::{Result, SimError};

pub type NVec2 = Vector2<f64>;

/// Rendering colour of a body. Physics never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    White,
    Yellow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    m: f64, // mass, always > 0
    radius: f64, // draw radius, always >= 0
    pub tint: Tint,
}

impl Body {
    /// Create a body, rejecting masses the integrator cannot divide by.
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, tint: Tint) -> Result<Self> {
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidBodyState(format!(
                "mass must be positive and finite, got {m}"
            )));
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(SimError::InvalidBodyState(format!(
                "radius must be non-negative and finite, got {radius}"
            )));
        }
        Ok(Self { x, v, m, radius, tint })
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True when any part of the bounding circle leaves `viewport`.
    pub fn is_outside(&self, viewport: &Viewport) -> bool {
        self.x.x - self.radius < 0.0
            || self.x.x + self.radius >= viewport.width
            || self.x.y - self.radius < 0.0
            || self.x.y + self.radius >= viewport.height
    }

    pub fn view(&self, viewport: &Viewport) -> BodyView {
        BodyView {
            x: self.x,
            radius: self.radius,
            tint: self.tint,
            visible: !self.is_outside(viewport),
        }
    }
}

/// What the renderer needs to draw one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub x: NVec2,
    pub radius: f64,
    pub tint: Tint,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(SimError::InvalidArgument(format!(
                "viewport must be positive and finite, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> NVec2 {
        NVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 720.0,
        }
    }
}
