//! Visual passthrough for the host's renderer.

use drawerkit_core::Color;

/// Corner radius applied to the top edges when `rounded_edges` is set.
pub const ROUNDED_CORNER_RADIUS: f32 = 10.0;

/// Drop shadow parameters applied when `shadow` is set.
pub const SHADOW_COLOR: Color = Color::from_rgb_u8(0xCE, 0xCD, 0xCD);
pub const SHADOW_RADIUS: f32 = 3.0;
pub const SHADOW_OPACITY: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub radius: f32,
    pub opacity: f32,
}

/// Style flags the drawer forwards to whoever renders its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerStyle {
    pub background_color: Color,
    pub rounded_edges: bool,
    pub shadow: bool,
}

impl DrawerStyle {
    /// Top corner radius, if rounded edges are enabled.
    pub fn corner_radius(&self) -> Option<f32> {
        self.rounded_edges.then_some(ROUNDED_CORNER_RADIUS)
    }

    /// Shadow parameters, if the shadow is enabled.
    pub fn shadow_spec(&self) -> Option<Shadow> {
        self.shadow.then_some(Shadow {
            color: SHADOW_COLOR,
            radius: SHADOW_RADIUS,
            opacity: SHADOW_OPACITY,
        })
    }
}

impl Default for DrawerStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            rounded_edges: false,
            shadow: false,
        }
    }
}
