use drawerkit_core::{Point, Size};
use thiserror::Error;

use crate::drawer_state::DrawerState;
use crate::style::DrawerStyle;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("down position y ({down_y}) must be greater than up position y ({up_y})")]
    InvertedRestPositions { up_y: f32, down_y: f32 },
    #[error("toggle threshold must be a positive finite number, got {0}")]
    NonPositiveToggleThreshold(f32),
    #[error("container height must be a positive finite number, got {0}")]
    NonPositiveContainerHeight(f32),
    #[error("viewport must have positive finite dimensions, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

/// Validated drawer configuration.
///
/// Construction rejects geometry the drag and transition math cannot make
/// sense of instead of silently misbehaving.
#[derive(Clone, Debug)]
pub struct DrawerConfig {
    up_position: Point,
    down_position: Point,
    toggle_threshold: f32,
    container_height: f32,
    viewport: Size,
    style: DrawerStyle,
}

impl DrawerConfig {
    /// `viewport` is read once here; the drawer does not react to later
    /// window size changes.
    pub fn new(
        up_position: Point,
        down_position: Point,
        toggle_threshold: f32,
        container_height: f32,
        viewport: Size,
    ) -> Result<Self, ConfigError> {
        if !(down_position.y > up_position.y) {
            return Err(ConfigError::InvertedRestPositions {
                up_y: up_position.y,
                down_y: down_position.y,
            });
        }
        if !(toggle_threshold > 0.0 && toggle_threshold.is_finite()) {
            return Err(ConfigError::NonPositiveToggleThreshold(toggle_threshold));
        }
        if !(container_height > 0.0 && container_height.is_finite()) {
            return Err(ConfigError::NonPositiveContainerHeight(container_height));
        }
        if !(viewport.width > 0.0
            && viewport.height > 0.0
            && viewport.width.is_finite()
            && viewport.height.is_finite())
        {
            return Err(ConfigError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            up_position,
            down_position,
            toggle_threshold,
            container_height,
            viewport,
            style: DrawerStyle::default(),
        })
    }

    pub fn with_style(mut self, style: DrawerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn up_position(&self) -> Point {
        self.up_position
    }

    pub fn down_position(&self) -> Point {
        self.down_position
    }

    /// Rest position for a logical state.
    pub fn rest_position(&self, state: DrawerState) -> Point {
        match state {
            DrawerState::Up => self.up_position,
            DrawerState::Down => self.down_position,
        }
    }

    pub fn toggle_threshold(&self) -> f32 {
        self.toggle_threshold
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn style(&self) -> &DrawerStyle {
        &self.style
    }

    pub(crate) fn set_positions(&mut self, up: Point, down: Point) -> Result<(), ConfigError> {
        if !(down.y > up.y) {
            return Err(ConfigError::InvertedRestPositions {
                up_y: up.y,
                down_y: down.y,
            });
        }
        self.up_position = up;
        self.down_position = down;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
