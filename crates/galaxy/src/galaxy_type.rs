//! Early/late type classification layered on top of any galaxy.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::describe::Describe;

/// Dominant type of a galaxy, deduced from star formation and gas content.
///
/// | Star formation | Gas rich | Class         |
/// |----------------|----------|---------------|
/// | ongoing        | yes      | Late-Type     |
/// | none           | no       | Early-Type    |
/// | mixed          | mixed    | Indeterminate |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeClass {
    /// Gas-poor, quiescent galaxies (mostly ellipticals and lenticulars)
    EarlyType,
    /// Gas-rich galaxies with ongoing star formation
    LateType,
    /// The two indicators disagree
    Indeterminate,
}

impl TypeClass {
    pub fn from_indicators(star_forming: bool, gas_rich: bool) -> Self {
        match (star_forming, gas_rich) {
            (true, true) => Self::LateType,
            (false, false) => Self::EarlyType,
            _ => Self::Indeterminate,
        }
    }

    /// Human-readable name for the type class
    pub fn name(&self) -> &'static str {
        match self {
            Self::EarlyType => "Early-Type",
            Self::LateType => "Late-Type",
            Self::Indeterminate => "Indeterminate",
        }
    }

    /// Fragment appended to the wrapped galaxy's description
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::EarlyType => " and is an Early-Type galaxy",
            Self::LateType => " and is a Late-Type galaxy",
            Self::Indeterminate => " can not deduce if it is an Early- or a Late-Type galaxy",
        }
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A galaxy classified as early or late type.
///
/// Owns the galaxy it wraps, which can be a bare morphology or another facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxyType<G> {
    star_forming: bool,
    gas_rich: bool,
    galaxy: G,
}

impl<G: Describe> GalaxyType<G> {
    pub fn new(star_forming: bool, gas_rich: bool, galaxy: G) -> Self {
        let classified = Self {
            star_forming,
            gas_rich,
            galaxy,
        };
        if classified.type_class() == TypeClass::Indeterminate {
            debug!(star_forming, gas_rich, "type indicators disagree");
        }
        classified
    }

    pub fn star_forming(&self) -> bool {
        self.star_forming
    }

    pub fn gas_rich(&self) -> bool {
        self.gas_rich
    }

    pub fn type_class(&self) -> TypeClass {
        TypeClass::from_indicators(self.star_forming, self.gas_rich)
    }

    /// The wrapped galaxy
    pub fn galaxy(&self) -> &G {
        &self.galaxy
    }

    pub fn into_inner(self) -> G {
        self.galaxy
    }
}

impl<G: Describe> Describe for GalaxyType<G> {
    fn describe(&self) -> String {
        format!("{}{}", self.galaxy.describe(), self.type_class().suffix())
    }
}
