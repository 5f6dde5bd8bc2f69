//! Text rendering of vectors
//!
//! Vectors render as `<a, b, c>`. The separator before each space comes
//! from a [`NumberFormat`]; formatter flags apply to every lane.

use std::fmt;
use sv_core::config::FormatConfig;

/// Number formatting conventions used when rendering vectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    group_separator: String,
}

impl NumberFormat {
    /// Culture-neutral format, separator `,`
    pub fn invariant() -> Self {
        Self::new(",")
    }

    pub fn new(group_separator: impl Into<String>) -> Self {
        Self {
            group_separator: group_separator.into(),
        }
    }

    pub fn group_separator(&self) -> &str {
        &self.group_separator
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}

impl From<&FormatConfig> for NumberFormat {
    fn from(config: &FormatConfig) -> Self {
        Self::new(config.group_separator.clone())
    }
}

/// Signature of the per-lane formatting function
type LaneFmt = fn(&u32, &mut fmt::Formatter<'_>) -> fmt::Result;

pub(crate) fn write_lanes(
    f: &mut fmt::Formatter<'_>,
    lanes: &[u32],
    separator: &str,
    lane: LaneFmt,
) -> fmt::Result {
    f.write_str("<")?;
    for (i, value) in lanes.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
            f.write_str(" ")?;
        }
        lane(value, f)?;
    }
    f.write_str(">")
}

/// Display adapter returned by `display_with`
#[derive(Debug, Clone, Copy)]
pub struct VectorDisplay<'a> {
    lanes: &'a [u32],
    format: &'a NumberFormat,
}

impl<'a> VectorDisplay<'a> {
    pub(crate) fn new(lanes: &'a [u32], format: &'a NumberFormat) -> Self {
        Self { lanes, format }
    }
}

impl fmt::Display for VectorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lanes(f, self.lanes, self.format.group_separator(), <u32 as fmt::Display>::fmt)
    }
}

impl fmt::LowerHex for VectorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lanes(f, self.lanes, self.format.group_separator(), <u32 as fmt::LowerHex>::fmt)
    }
}

impl fmt::UpperHex for VectorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lanes(f, self.lanes, self.format.group_separator(), <u32 as fmt::UpperHex>::fmt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_separator() {
        assert_eq!(NumberFormat::default().group_separator(), ",");
    }

    #[test]
    fn test_from_config() {
        let config = FormatConfig {
            group_separator: ";".to_string(),
            hex: false,
        };
        assert_eq!(NumberFormat::from(&config), NumberFormat::new(";"));
    }

    #[test]
    fn test_display_adapter() {
        let format = NumberFormat::new(" |");
        let lanes = [1u32, 20, 300];
        let display = VectorDisplay::new(&lanes, &format);
        assert_eq!(display.to_string(), "<1 | 20 | 300>");
        assert_eq!(format!("{:#x}", display), "<0x1 | 0x14 | 0x12c>");
    }
}
