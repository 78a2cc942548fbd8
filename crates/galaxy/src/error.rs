//! Errors raised by the checked galaxy constructors

use thiserror::Error;

/// Out-of-domain input rejected by a `try_new` constructor.
///
/// The plain constructors accept any value; these errors only come from the
/// checked variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GalaxyError {
    /// An axis length below zero
    #[error("{axis} axis must be non-negative, got {value}")]
    NegativeAxis {
        /// Which axis was rejected ("semi-major" or "semi-minor")
        axis: &'static str,
        value: i32,
    },

    /// A semi-minor axis longer than the semi-major axis
    #[error("semi-minor axis {minor} exceeds semi-major axis {major}")]
    MinorAxisExceedsMajor { major: i32, minor: i32 },

    /// A luminosity that is negative, infinite or NaN
    #[error("luminosity must be finite and non-negative, got {0}*10^44 erg s^-1")]
    InvalidLuminosity(f64),
}
