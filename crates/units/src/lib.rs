pub mod luminosity;


pub use luminosity::{LUMINOSITY_UNIT_ERG_S, Luminosity, SOLAR_LUMINOSITY_ERG_S};
