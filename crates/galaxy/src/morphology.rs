//! Morphological classification: elliptical, spiral and irregular galaxies.
//!
//! These are the base entities every facet ultimately wraps.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::describe::Describe;
use crate::error::GalaxyError;

/// Elliptical galaxy described by its projected semi-axes.
///
/// The ellipticity is derived once at construction as
/// `round(10 * (1 - b/a))`, where `a` is the semi-major and `b` the
/// semi-minor axis. Observed ellipticals range from E0 (round) to E7 (most
/// elongated). A zero semi-major axis leaves the ellipticity undefined, and
/// so does a computed value equal to [`Elliptical::UNDEFINED_ELLIPTICITY`].
/// Results beyond the `i32` range (only reachable with out-of-domain axes)
/// are clamped to `i32::MIN`/`i32::MAX`.
///
/// Only the axes are serialized; the ellipticity is recomputed when
/// deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EllipticalAxes", into = "EllipticalAxes")]
pub struct Elliptical {
    semi_major_axis: i32,
    semi_minor_axis: i32,
    ellipticity: Option<i32>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EllipticalAxes {
    semi_major_axis: i32,
    semi_minor_axis: i32,
}

impl Elliptical {
    /// Ellipticity index reported when the ellipticity is undefined
    pub const UNDEFINED_ELLIPTICITY: i32 = -1;

    /// Largest ellipticity observed in real elliptical galaxies (E7)
    pub const MAX_OBSERVED_ELLIPTICITY: i32 = 7;

    /// Builds an elliptical galaxy from its semi-axes. Any values are accepted.
    pub fn new(semi_major_axis: i32, semi_minor_axis: i32) -> Self {
        let ellipticity = Self::compute_ellipticity(semi_major_axis, semi_minor_axis);
        if ellipticity.is_none() {
            debug!(semi_major_axis, semi_minor_axis, "ellipticity undefined");
        }

        Self {
            semi_major_axis,
            semi_minor_axis,
            ellipticity,
        }
    }

    /// Like [`Elliptical::new`], but rejects negative axes and a semi-minor
    /// axis longer than the semi-major one.
    pub fn try_new(semi_major_axis: i32, semi_minor_axis: i32) -> Result<Self, GalaxyError> {
        let error = if semi_major_axis < 0 {
            Some(GalaxyError::NegativeAxis {
                axis: "semi-major",
                value: semi_major_axis,
            })
        } else if semi_minor_axis < 0 {
            Some(GalaxyError::NegativeAxis {
                axis: "semi-minor",
                value: semi_minor_axis,
            })
        } else if semi_minor_axis > semi_major_axis {
            Some(GalaxyError::MinorAxisExceedsMajor {
                major: semi_major_axis,
                minor: semi_minor_axis,
            })
        } else {
            None
        };

        match error {
            Some(error) => {
                warn!(%error, "rejected elliptical galaxy");
                Err(error)
            }
            None => Ok(Self::new(semi_major_axis, semi_minor_axis)),
        }
    }

    fn compute_ellipticity(semi_major_axis: i32, semi_minor_axis: i32) -> Option<i32> {
        if semi_major_axis == 0 {
            return None;
        }
        let axis_ratio = semi_minor_axis as f64 / semi_major_axis as f64;
        let scaled = (10.0 * (1.0 - axis_ratio)).round();
        if scaled < i32::MIN as f64 || scaled > i32::MAX as f64 {
            debug!(semi_major_axis, semi_minor_axis, scaled, "ellipticity clamped to i32 range");
        }
        match scaled.clamp(i32::MIN as f64, i32::MAX as f64) as i32 {
            Self::UNDEFINED_ELLIPTICITY => None,
            ellipticity => Some(ellipticity),
        }
    }

    pub fn semi_major_axis(&self) -> i32 {
        self.semi_major_axis
    }

    pub fn semi_minor_axis(&self) -> i32 {
        self.semi_minor_axis
    }

    /// Ellipticity on the 0-10 scale, `None` when undefined
    pub fn ellipticity(&self) -> Option<i32> {
        self.ellipticity
    }

    /// Ellipticity with `-1` standing in for "undefined"
    pub fn ellipticity_index(&self) -> i32 {
        self.ellipticity.unwrap_or(Self::UNDEFINED_ELLIPTICITY)
    }

    /// Hubble class label (`E0` through `E7`) when the ellipticity falls in
    /// the observed range.
    pub fn hubble_class(&self) -> Option<String> {
        self.ellipticity
            .filter(|e| (0..=Self::MAX_OBSERVED_ELLIPTICITY).contains(e))
            .map(|e| format!("E{}", e))
    }
}

impl Default for Elliptical {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl From<EllipticalAxes> for Elliptical {
    fn from(axes: EllipticalAxes) -> Self {
        Self::new(axes.semi_major_axis, axes.semi_minor_axis)
    }
}

impl From<Elliptical> for EllipticalAxes {
    fn from(galaxy: Elliptical) -> Self {
        Self {
            semi_major_axis: galaxy.semi_major_axis,
            semi_minor_axis: galaxy.semi_minor_axis,
        }
    }
}

impl Describe for Elliptical {
    fn describe(&self) -> String {
        match self.ellipticity {
            Some(ellipticity) => {
                format!("an eliptical galaxy with ellipticity of {}", ellipticity)
            }
            None => "an eliptical galaxy with undefined ellipticity".to_string(),
        }
    }
}

/// Spiral galaxy, with or without a central bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spiral {
    is_barred: bool,
}

impl Spiral {
    pub fn new(is_barred: bool) -> Self {
        Self { is_barred }
    }

    pub fn is_barred(&self) -> bool {
        self.is_barred
    }
}

impl Describe for Spiral {
    fn describe(&self) -> String {
        if self.is_barred {
            "a barred spiral galaxy".to_string()
        } else {
            "an unbarred spiral galaxy".to_string()
        }
    }
}

/// Irregular galaxy. Type I (Irr I) shows some structure, type II (Irr II)
/// shows none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Irregular {
    has_structure: bool,
}

impl Irregular {
    pub fn new(has_structure: bool) -> Self {
        Self { has_structure }
    }

    pub fn has_structure(&self) -> bool {
        self.has_structure
    }
}

impl Describe for Irregular {
    fn describe(&self) -> String {
        if self.has_structure {
            "an irregular galaxy type I".to_string()
        } else {
            "an irregular galaxy type II".to_string()
        }
    }
}

/// A galaxy of any morphology
///
/// Wraps the three morphologies for heterogeneous collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "morphology")]
pub enum Morphology {
    Elliptical(Elliptical),
    Spiral(Spiral),
    Irregular(Irregular),
}

impl Morphology {
    /// Human-readable name for the morphology
    pub fn name(&self) -> &'static str {
        match self {
            Self::Elliptical(_) => "Elliptical",
            Self::Spiral(_) => "Spiral",
            Self::Irregular(_) => "Irregular",
        }
    }
}

impl Describe for Morphology {
    fn describe(&self) -> String {
        match self {
            Self::Elliptical(galaxy) => galaxy.describe(),
            Self::Spiral(galaxy) => galaxy.describe(),
            Self::Irregular(galaxy) => galaxy.describe(),
        }
    }
}

impl From<Elliptical> for Morphology {
    fn from(galaxy: Elliptical) -> Self {
        Self::Elliptical(galaxy)
    }
}

impl From<Spiral> for Morphology {
    fn from(galaxy: Spiral) -> Self {
        Self::Spiral(galaxy)
    }
}

impl From<Irregular> for Morphology {
    fn from(galaxy: Irregular) -> Self {
        Self::Irregular(galaxy)
    }
}
