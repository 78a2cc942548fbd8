//! Named reference galaxies.

use std::fmt;

use crate::activity::ActiveGalaxy;
use crate::describe::Describe;
use crate::error::GalaxyError;
use crate::galaxy_type::GalaxyType;
use crate::morphology::{Elliptical, Irregular, Spiral};

/// A named galaxy whose layers have been erased behind [`Describe`]
pub struct CatalogEntry {
    pub name: String,
    pub galaxy: Box<dyn Describe>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, galaxy: impl Describe + 'static) -> Self {
        Self {
            name: name.into(),
            galaxy: Box::new(galaxy),
        }
    }

    /// `"<name> is a <description>"`
    pub fn line(&self) -> String {
        format!("{} is a {}", self.name, self.galaxy.describe())
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.line())
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.name)
            .field("description", &self.galaxy.describe())
            .finish()
    }
}

/// The four reference galaxies, in display order.
///
/// * Hercules A: elliptical, no star formation, gas poor
/// * Pinwheel: unbarred spiral, star forming, gas rich
/// * Small Magellanic Cloud: structured irregular, star forming, gas rich
/// * NGC 3227: active unbarred spiral, star forming, gas rich, 0.23×10^44 erg/s
pub fn reference_catalog() -> Result<Vec<CatalogEntry>, GalaxyError> {
    let hercules_a = GalaxyType::new(false, false, Elliptical::try_new(10, 7)?);
    let pinwheel = GalaxyType::new(true, true, Spiral::new(false));
    let small_magellanic_cloud = GalaxyType::new(true, true, Irregular::new(true));
    let ngc_3227 = ActiveGalaxy::try_new(0.23, GalaxyType::new(true, true, Spiral::new(false)))?;

    Ok(vec![
        CatalogEntry::new("HerculesA", hercules_a),
        CatalogEntry::new("Pinwheel", pinwheel),
        CatalogEntry::new("Small Magellanic Cloud", small_magellanic_cloud),
        CatalogEntry::new("NGC 3227", ngc_3227),
    ])
}
