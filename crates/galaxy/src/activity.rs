//! Activity classification: galaxies with an active nucleus.

use serde::{Deserialize, Serialize};
use tracing::warn;
use units::Luminosity;

use crate::describe::Describe;
use crate::error::GalaxyError;

/// An active galaxy, characterised by its nuclear luminosity.
///
/// The luminosity is usually measured at radio frequencies and quoted in
/// units of 10^44 erg/s. Owns the galaxy it wraps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveGalaxy<G> {
    luminosity: Luminosity,
    galaxy: G,
}

impl<G: Describe> ActiveGalaxy<G> {
    /// Plain `f64` values are read as multiples of 10^44 erg/s. Any value is
    /// accepted.
    pub fn new(luminosity: impl Into<Luminosity>, galaxy: G) -> Self {
        Self {
            luminosity: luminosity.into(),
            galaxy,
        }
    }

    /// Like [`ActiveGalaxy::new`], but rejects negative and non-finite
    /// luminosities.
    pub fn try_new(luminosity: impl Into<Luminosity>, galaxy: G) -> Result<Self, GalaxyError> {
        let luminosity = luminosity.into();
        if !luminosity.is_physical() {
            let error = GalaxyError::InvalidLuminosity(luminosity.to_1e44_erg_s());
            warn!(%error, "rejected active galaxy");
            return Err(error);
        }
        Ok(Self::new(luminosity, galaxy))
    }

    pub fn luminosity(&self) -> Luminosity {
        self.luminosity
    }

    /// The wrapped galaxy
    pub fn galaxy(&self) -> &G {
        &self.galaxy
    }

    pub fn into_inner(self) -> G {
        self.galaxy
    }
}

impl<G: Describe> Describe for ActiveGalaxy<G> {
    fn describe(&self) -> String {
        format!("{} with luminosity {}", self.galaxy.describe(), self.luminosity)
    }
}
