//! Cell states.
//!
//! A cell is either empty (`Dead`) or occupied by one of the two competing
//! factions. The numeric codes `0/1/2` are stable and used by the Python
//! binding and any byte-oriented front end.

use serde::{Deserialize, Serialize};

/// The state of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// Empty cell.
    #[default]
    Dead,
    /// Occupied by the red faction.
    Red,
    /// Occupied by the green faction.
    Green,
}

impl Faction {
    /// Both live factions, red first.
    pub const LIVE: [Faction; 2] = [Faction::Red, Faction::Green];

    /// Whether the cell is occupied.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        !matches!(self, Faction::Dead)
    }

    /// The competing faction. `Dead` has no opponent.
    #[must_use]
    pub const fn opponent(self) -> Option<Faction> {
        match self {
            Faction::Red => Some(Faction::Green),
            Faction::Green => Some(Faction::Red),
            Faction::Dead => None,
        }
    }

    /// Stable numeric code (`0` dead, `1` red, `2` green).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Faction::Dead => 0,
            Faction::Red => 1,
            Faction::Green => 2,
        }
    }

    /// Inverse of [`Faction::code`].
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Faction> {
        match code {
            0 => Some(Faction::Dead),
            1 => Some(Faction::Red),
            2 => Some(Faction::Green),
            _ => None,
        }
    }

    /// Single-character rendering used by text dumps.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Faction::Dead => '-',
            Faction::Red => 'R',
            Faction::Green => 'G',
        }
    }

    /// Inverse of [`Faction::glyph`]. `.` is also accepted as dead.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Faction> {
        match glyph {
            '-' | '.' => Some(Faction::Dead),
            'R' | 'r' => Some(Faction::Red),
            'G' | 'g' => Some(Faction::Green),
            _ => None,
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Faction::Dead => "Dead",
            Faction::Red => "Red",
            Faction::Green => "Green",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Faction::default(), Faction::Dead);
        assert!(!Faction::Dead.is_alive());
        assert!(Faction::Red.is_alive());
        assert!(Faction::Green.is_alive());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Faction::Red.opponent(), Some(Faction::Green));
        assert_eq!(Faction::Green.opponent(), Some(Faction::Red));
        assert_eq!(Faction::Dead.opponent(), None);
    }

    #[test]
    fn test_codes() {
        for faction in [Faction::Dead, Faction::Red, Faction::Green] {
            assert_eq!(Faction::from_code(faction.code()), Some(faction));
        }
        assert_eq!(Faction::from_code(3), None);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Faction::Red.glyph(), 'R');
        assert_eq!(Faction::from_glyph('g'), Some(Faction::Green));
        assert_eq!(Faction::from_glyph('.'), Some(Faction::Dead));
        assert_eq!(Faction::from_glyph('x'), None);
        assert_eq!(format!("{}", Faction::Green), "Green");
    }
}
