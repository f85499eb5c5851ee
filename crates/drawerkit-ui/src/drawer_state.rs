use thiserror::Error;

/// Logical rest state of the drawer.
///
/// Discriminants match the wire values hosts historically exchanged for this
/// component (0 = down, 1 = up). Rest positions are always compared by this
/// tag, never by structural equality of points: two structurally-equal but
/// logically-distinct positions must not be conflated.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawerState {
    /// Collapsed, resting at the down position.
    Down = 0,
    /// Expanded, resting at the up position.
    Up = 1,
}

impl DrawerState {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn toggled(self) -> Self {
        match self {
            DrawerState::Down => DrawerState::Up,
            DrawerState::Up => DrawerState::Down,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid drawer state value {0}, expected 0 (down) or 1 (up)")]
pub struct InvalidDrawerState(pub u8);

impl TryFrom<u8> for DrawerState {
    type Error = InvalidDrawerState;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DrawerState::Down),
            1 => Ok(DrawerState::Up),
            other => Err(InvalidDrawerState(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_round_trip_matches_wire_values() {
        assert_eq!(DrawerState::Down.as_u8(), 0);
        assert_eq!(DrawerState::Up.as_u8(), 1);
        assert_eq!(DrawerState::try_from(0), Ok(DrawerState::Down));
        assert_eq!(DrawerState::try_from(1), Ok(DrawerState::Up));
        assert_eq!(DrawerState::try_from(2), Err(InvalidDrawerState(2)));
    }

    #[test]
    fn toggled_flips_state() {
        assert_eq!(DrawerState::Down.toggled(), DrawerState::Up);
        assert_eq!(DrawerState::Up.toggled(), DrawerState::Down);
    }
}
