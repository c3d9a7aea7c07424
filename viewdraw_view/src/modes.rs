// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// How the logical viewbox is scaled onto the surface.
///
/// Both modes preserve aspect ratio; they differ in which surface half-extent
/// one logical unit is matched to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScaleMode {
    /// Contain: the viewbox is scaled by the smaller half-extent, so the
    /// whole viewbox stays visible and the surface may letterbox.
    #[default]
    Fit,
    /// Cover: the viewbox is scaled by the larger half-extent, so it fills
    /// the surface and is cropped along the shorter axis.
    Fill,
}

impl ScaleMode {
    /// Picks the uniform unit scale for the given surface half-extents.
    #[must_use]
    pub fn unit_scale(self, half_width: f64, half_height: f64) -> f64 {
        match self {
            Self::Fit => half_width.min(half_height),
            Self::Fill => half_width.max(half_height),
        }
    }

    /// Lower-case name of the mode, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleMode {
    type Err = ScaleModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fit" => Ok(Self::Fit),
            "fill" => Ok(Self::Fill),
            _ => Err(ScaleModeError {
                name: s.to_string(),
            }),
        }
    }
}

/// Returned when parsing an unknown [`ScaleMode`] name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown scale mode `{name}` (expected `fit` or `fill`)")]
pub struct ScaleModeError {
    /// The rejected name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::ScaleMode;

    #[test]
    fn fit_contains_and_fill_covers() {
        assert_eq!(ScaleMode::Fit.unit_scale(400.0, 300.0), 300.0);
        assert_eq!(ScaleMode::Fill.unit_scale(400.0, 300.0), 400.0);
    }

    #[test]
    fn parse_round_trips_names() {
        for mode in [ScaleMode::Fit, ScaleMode::Fill] {
            assert_eq!(mode.name().parse::<ScaleMode>(), Ok(mode));
        }
        let err = "stretch".parse::<ScaleMode>().unwrap_err();
        assert_eq!(err.name, "stretch");
    }
}
