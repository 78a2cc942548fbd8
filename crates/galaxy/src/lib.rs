//! Galaxy taxonomy by morphology, dominant type and activity.
//!
//! A galaxy starts as a morphology ([`Elliptical`], [`Spiral`] or [`Irregular`])
//! and can be wrapped by independent classification facets: [`GalaxyType`]
//! (early/late type) and [`ActiveGalaxy`] (luminosity). Every layer implements
//! [`Describe`], so facets nest in any order and each appends its own fragment
//! to the description of the galaxy it wraps.

pub mod activity;
pub mod catalog;
pub mod describe;
pub mod error;
pub mod galaxy_type;
pub mod morphology;

#[cfg(test)]
mod morphology_test;

// Re-export types
pub use activity::ActiveGalaxy;
pub use catalog::{CatalogEntry, reference_catalog};
pub use describe::{Classify, Describe};
pub use error::GalaxyError;
pub use galaxy_type::{GalaxyType, TypeClass};
pub use morphology::{Elliptical, Irregular, Morphology, Spiral};
