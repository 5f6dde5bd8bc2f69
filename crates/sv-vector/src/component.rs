//! Vector lanes and their names

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of lanes in a [`crate::UInt3`]
pub const LANES: usize = 3;

/// A lane of a three-component vector
///
/// `R`, `G` and `B` are aliases of `X`, `Y` and `Z`; they address the same
/// storage.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Component {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Component {
    pub const R: Component = Component::X;
    pub const G: Component = Component::Y;
    pub const B: Component = Component::Z;

    /// All lanes in storage order
    pub const ALL: [Component; LANES] = [Component::X, Component::Y, Component::Z];

    /// Storage index of this lane
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Component::X),
            1 => Some(Component::Y),
            2 => Some(Component::Z),
            _ => None,
        }
    }

    /// Bit of this lane inside a [`ComponentMask`]
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Letter used for this lane under `naming`
    pub const fn letter(self, naming: Naming) -> char {
        match (naming, self) {
            (Naming::Position, Component::X) => 'x',
            (Naming::Position, Component::Y) => 'y',
            (Naming::Position, Component::Z) => 'z',
            (Naming::Color, Component::X) => 'r',
            (Naming::Color, Component::Y) => 'g',
            (Naming::Color, Component::Z) => 'b',
        }
    }

    /// Parse a single swizzle letter
    pub const fn from_letter(letter: char) -> Option<(Self, Naming)> {
        match letter {
            'x' => Some((Component::X, Naming::Position)),
            'y' => Some((Component::Y, Naming::Position)),
            'z' => Some((Component::Z, Naming::Position)),
            'r' => Some((Component::X, Naming::Color)),
            'g' => Some((Component::Y, Naming::Color)),
            'b' => Some((Component::Z, Naming::Color)),
            _ => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter(Naming::Position))
    }
}

/// Letter set a swizzle is spelled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Naming {
    /// `x`, `y`, `z`
    #[default]
    Position,
    /// `r`, `g`, `b`
    Color,
}

bitflags! {
    /// Set of lanes touched by a selector
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComponentMask: u8 {
        const X = 0x01;
        const Y = 0x02;
        const Z = 0x04;
    }
}

impl From<Component> for ComponentMask {
    fn from(c: Component) -> Self {
        ComponentMask::from_bits_retain(c.bit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_aliases() {
        assert_eq!(Component::R, Component::X);
        assert_eq!(Component::G, Component::Y);
        assert_eq!(Component::B, Component::Z);
    }

    #[test]
    fn test_index_roundtrip() {
        for c in Component::ALL {
            assert_eq!(Component::from_index(c.index()), Some(c));
        }
        assert_eq!(Component::from_index(3), None);
    }

    #[test]
    fn test_letters() {
        assert_eq!(Component::Z.letter(Naming::Position), 'z');
        assert_eq!(Component::Z.letter(Naming::Color), 'b');
        assert_eq!(Component::from_letter('g'), Some((Component::Y, Naming::Color)));
        assert_eq!(Component::from_letter('w'), None);
    }

    #[test]
    fn test_mask_bits() {
        assert_eq!(ComponentMask::from(Component::X), ComponentMask::X);
        assert_eq!(ComponentMask::from(Component::Z), ComponentMask::Z);
        assert_eq!(ComponentMask::all().bits(), 0x07);
    }
}
