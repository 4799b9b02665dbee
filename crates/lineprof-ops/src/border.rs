//! Boundary extension for sub-pixel sampling.
//!
//! When an interpolation neighbourhood reaches past the image edge, the
//! border mode decides which value stands in for the missing pixel:
//!
//! - [`BorderMode::Clamp`] - replicate the nearest edge pixel (default)
//! - [`BorderMode::Constant`] - use a fixed value
//! - [`BorderMode::Reflect101`] - mirror around the edge pixel without repeating it

use std::fmt;
use std::str::FromStr;

use crate::OpsError;

/// Policy for pixels outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BorderMode {
    /// Replicate the nearest edge pixel.
    #[default]
    Clamp,
    /// Every outside pixel has this value.
    Constant(f32),
    /// Mirror around the edge pixel: `... 2 1 | 0 1 2 ... n-1 | n-2 ...`.
    Reflect101,
}

/// Maps a possibly out-of-range index into `[0, len)`.
///
/// Returns `None` for [`BorderMode::Constant`] when `i` is outside, and for
/// any mode when `len == 0`.
///
/// ```
/// use lineprof_ops::border::{map_index, BorderMode};
///
/// assert_eq!(map_index(-2, 5, BorderMode::Clamp), Some(0));
/// assert_eq!(map_index(-2, 5, BorderMode::Reflect101), Some(2));
/// assert_eq!(map_index(-2, 5, BorderMode::Constant(0.0)), None);
/// assert_eq!(map_index(3, 5, BorderMode::Constant(0.0)), Some(3));
/// ```
pub fn map_index(i: isize, len: usize, mode: BorderMode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if i >= 0 && (i as usize) < len {
        return Some(i as usize);
    }

    match mode {
        BorderMode::Constant(_) => None,
        BorderMode::Clamp => Some(if i < 0 { 0 } else { len - 1 }),
        BorderMode::Reflect101 => {
            if len == 1 {
                return Some(0);
            }
            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            Some(if r < len { r } else { period as usize - r })
        }
    }
}

impl fmt::Display for BorderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clamp => write!(f, "clamp"),
            Self::Constant(v) => write!(f, "constant:{}", v),
            Self::Reflect101 => write!(f, "reflect"),
        }
    }
}

impl FromStr for BorderMode {
    type Err = OpsError;

    /// Parses `clamp`, `reflect` (or `reflect101`) and `constant:<value>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "clamp" | "edge" | "nearest" => Ok(Self::Clamp),
            "reflect" | "reflect101" => Ok(Self::Reflect101),
            other => {
                let value = other
                    .strip_prefix("constant:")
                    .ok_or_else(|| {
                        OpsError::InvalidParameter(format!(
                            "unknown border mode '{}'. Valid: clamp, reflect, constant:<value>",
                            s
                        ))
                    })?;
                value
                    .parse::<f32>()
                    .map(Self::Constant)
                    .map_err(|e| OpsError::InvalidParameter(format!("border constant '{}': {}", value, e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_mapping_handles_negative_and_overflow() {
        let mode = BorderMode::Clamp;

        assert_eq!(map_index(-3, 5, mode), Some(0));
        assert_eq!(map_index(-1, 5, mode), Some(0));
        assert_eq!(map_index(0, 5, mode), Some(0));
        assert_eq!(map_index(4, 5, mode), Some(4));
        assert_eq!(map_index(5, 5, mode), Some(4));
        assert_eq!(map_index(99, 5, mode), Some(4));
    }

    #[test]
    fn test_reflect101_short_and_long() {
        let mode = BorderMode::Reflect101;

        for i in -8..=8 {
            assert_eq!(map_index(i, 1, mode), Some(0));
        }

        let cases_len5 = [(-6, 2), (-4, 4), (-1, 1), (0, 0), (4, 4), (5, 3), (7, 1), (8, 0)];
        for (i, expected) in cases_len5 {
            assert_eq!(map_index(i, 5, mode), Some(expected), "index {}", i);
        }
    }

    #[test]
    fn test_constant_only_maps_inside() {
        let mode = BorderMode::Constant(7.0);
        assert_eq!(map_index(-1, 3, mode), None);
        assert_eq!(map_index(3, 3, mode), None);
        assert_eq!(map_index(1, 3, mode), Some(1));
    }

    #[test]
    fn test_empty_axis() {
        assert_eq!(map_index(0, 0, BorderMode::Clamp), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("clamp".parse::<BorderMode>().unwrap(), BorderMode::Clamp);
        assert_eq!("Reflect".parse::<BorderMode>().unwrap(), BorderMode::Reflect101);
        assert_eq!(
            "constant:0.5".parse::<BorderMode>().unwrap(),
            BorderMode::Constant(0.5)
        );
        assert!("wrap".parse::<BorderMode>().is_err());
        assert!("constant:abc".parse::<BorderMode>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for mode in [BorderMode::Clamp, BorderMode::Reflect101, BorderMode::Constant(2.5)] {
            assert_eq!(mode.to_string().parse::<BorderMode>().unwrap(), mode);
        }
    }
}
