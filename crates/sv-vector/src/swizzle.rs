//! Swizzle selectors
//!
//! A [`Swizzle`] is the tagged form of a swizzle accessor: the ordered lanes
//! it reads plus the letter set it is spelled with. A translator rewrites a
//! selector into a shader member access (`.zyx`); on the host the same
//! selector drives [`crate::UInt3::swizzle`].
//!
//! Writes go through [`WritableSwizzle`], which can only be built from a
//! selection with no repeated lane. In a `const` item a repeated lane is a
//! compile error.

use crate::component::{Component, ComponentMask, Naming};
use std::fmt;
use std::str::FromStr;
use sv_core::VectorError;

/// Largest number of lanes a swizzle may select
pub const MAX_SWIZZLE_LANES: usize = 4;

/// Read-only swizzle selecting `N` lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swizzle<const N: usize> {
    lanes: [Component; N],
    naming: Naming,
}

impl<const N: usize> Swizzle<N> {
    /// Create a selector spelled with `xyz` letters
    ///
    /// Panics unless `1 <= N <= 4`.
    pub const fn new(lanes: [Component; N]) -> Self {
        assert!(
            N >= 1 && N <= MAX_SWIZZLE_LANES,
            "a swizzle selects between one and four lanes"
        );
        Self {
            lanes,
            naming: Naming::Position,
        }
    }

    pub const fn with_naming(self, naming: Naming) -> Self {
        Self {
            lanes: self.lanes,
            naming,
        }
    }

    #[inline]
    pub const fn lanes(&self) -> [Component; N] {
        self.lanes
    }

    #[inline]
    pub const fn naming(&self) -> Naming {
        self.naming
    }

    /// Lanes touched by this selector
    pub const fn mask(&self) -> ComponentMask {
        let mut bits = 0u8;
        let mut i = 0;
        while i < N {
            bits |= self.lanes[i].bit();
            i += 1;
        }
        ComponentMask::from_bits_retain(bits)
    }

    /// Whether every lane is selected at most once
    pub const fn is_writable(&self) -> bool {
        let mut seen = 0u8;
        let mut i = 0;
        while i < N {
            let bit = self.lanes[i].bit();
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
            i += 1;
        }
        true
    }

    /// Upgrade to a writable selector
    pub fn writable(self) -> Result<WritableSwizzle<N>, VectorError> {
        if self.is_writable() {
            Ok(WritableSwizzle(self))
        } else {
            Err(VectorError::RepeatedComponent(self.to_string()))
        }
    }

    /// Shader member access for this selector, e.g. `.zyx`
    pub fn member(&self) -> String {
        format!(".{}", self)
    }
}

impl<const N: usize> fmt::Display for Swizzle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lane in &self.lanes {
            write!(f, "{}", lane.letter(self.naming))?;
        }
        Ok(())
    }
}

impl<const N: usize> Swizzle<N> {
    fn parse_lanes(s: &str) -> Result<Self, VectorError> {
        if N == 0 || N > MAX_SWIZZLE_LANES {
            return Err(VectorError::SelectorLength {
                expected: N.clamp(1, MAX_SWIZZLE_LANES),
                found: s.chars().count(),
            });
        }

        let mut lanes = [Component::X; N];
        let mut naming = None;
        let mut count = 0;

        for letter in s.chars() {
            let (lane, lane_naming) =
                Component::from_letter(letter).ok_or(VectorError::InvalidComponent(letter))?;
            match naming {
                None => naming = Some(lane_naming),
                Some(n) if n != lane_naming => {
                    return Err(VectorError::MixedNaming(s.to_string()));
                }
                Some(_) => {}
            }
            if count < N {
                lanes[count] = lane;
            }
            count += 1;
        }

        if count != N {
            return Err(VectorError::SelectorLength {
                expected: N,
                found: count,
            });
        }

        Ok(Swizzle::new(lanes).with_naming(naming.unwrap_or_default()))
    }
}

/// Widths outside `1..=4` are reported as `SelectorLength` against the
/// nearest valid width.
impl<const N: usize> FromStr for Swizzle<N> {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lanes(s).inspect_err(|e| {
            tracing::trace!("rejecting swizzle '{}': {}", s, e);
        })
    }
}

/// Swizzle with no repeated lane; the only kind that can be assigned through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WritableSwizzle<const N: usize>(Swizzle<N>);

impl<const N: usize> WritableSwizzle<N> {
    /// Panics if a lane repeats; in a `const` item this is a compile error.
    pub const fn new(lanes: [Component; N]) -> Self {
        let selector = Swizzle::new(lanes);
        assert!(
            selector.is_writable(),
            "a writable swizzle cannot repeat a lane"
        );
        Self(selector)
    }

    pub const fn with_naming(self, naming: Naming) -> Self {
        Self(self.0.with_naming(naming))
    }

    #[inline]
    pub const fn selector(&self) -> Swizzle<N> {
        self.0
    }

    #[inline]
    pub const fn lanes(&self) -> [Component; N] {
        self.0.lanes
    }
}

impl<const N: usize> From<WritableSwizzle<N>> for Swizzle<N> {
    fn from(w: WritableSwizzle<N>) -> Self {
        w.0
    }
}

impl<const N: usize> fmt::Display for WritableSwizzle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<const N: usize> FromStr for WritableSwizzle<N> {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Swizzle<N>>()?.writable()
    }
}
