use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Base unit of `Luminosity` in erg/s (10^44 erg s^-1)
pub const LUMINOSITY_UNIT_ERG_S: f64 = 1e44;

/// Luminosity of the Sun in erg/s (3.828 × 10³³ erg s⁻¹, IAU nominal)
pub const SOLAR_LUMINOSITY_ERG_S: f64 = 3.828e33;

/// One watt expressed in erg/s
const WATT_TO_ERG_S: f64 = 1e7;

/// A radiant power quantity using f64 precision.
///
/// The `Luminosity` struct uses 10^44 erg/s as the base unit, the scale at
/// which active galactic nuclei are usually quoted. Values given in the base
/// unit are stored untouched, so their decimal form survives formatting.
///
/// # Examples
///
/// ```rust
/// use units::Luminosity;
///
/// let seyfert = Luminosity::from_1e44_erg_s(0.23);
/// let quasar = Luminosity::from_erg_per_s(1e46);
///
/// assert_eq!(seyfert.to_string(), "0.23*10^44 erg s^-1");
/// let quasar_units = quasar.to_1e44_erg_s(); // ~100
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: 10^44 erg/s

impl Luminosity {
    /// Creates a zero luminosity value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Luminosity` from a value in units of 10^44 erg/s.
    pub fn from_1e44_erg_s(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Luminosity` from a value in erg/s.
    pub fn from_erg_per_s(value: f64) -> Self {
        Self(value / LUMINOSITY_UNIT_ERG_S)
    }

    /// Creates a new `Luminosity` from a value in watts.
    pub fn from_watts(value: f64) -> Self {
        Self::from_erg_per_s(value * WATT_TO_ERG_S)
    }

    /// Creates a new `Luminosity` from a value in solar luminosities.
    pub fn from_solar_luminosities(value: f64) -> Self {
        Self::from_erg_per_s(value * SOLAR_LUMINOSITY_ERG_S)
    }

    /// Returns the luminosity in units of 10^44 erg/s.
    ///
    /// Since 10^44 erg/s is the base unit, this simply returns the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Luminosity;
    ///
    /// let seyfert = Luminosity::from_1e44_erg_s(0.23);
    /// assert_eq!(seyfert.to_1e44_erg_s(), 0.23);
    /// ```
    pub fn to_1e44_erg_s(&self) -> f64 {
        self.0
    }

    /// Converts the luminosity to erg/s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Luminosity;
    ///
    /// let agn = Luminosity::from_1e44_erg_s(2.0);
    /// assert_eq!(agn.to_erg_per_s(), 2e44);
    /// ```
    pub fn to_erg_per_s(&self) -> f64 {
        self.0 * LUMINOSITY_UNIT_ERG_S
    }

    /// Converts the luminosity to watts (1 W = 10^7 erg/s).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Luminosity;
    ///
    /// let agn = Luminosity::from_1e44_erg_s(1.0);
    /// let watts = agn.to_watts(); // ~1e37 W
    /// ```
    pub fn to_watts(&self) -> f64 {
        self.to_erg_per_s() / WATT_TO_ERG_S
    }

    /// Converts the luminosity to solar luminosities (L☉).
    ///
    /// One unit of 10^44 erg/s is roughly 2.6 × 10^10 L☉, comparable to the
    /// total starlight of a large galaxy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Luminosity;
    ///
    /// let agn = Luminosity::from_1e44_erg_s(1.0);
    /// let solar = agn.to_solar_luminosities(); // ~2.6e10 L☉
    /// ```
    pub fn to_solar_luminosities(&self) -> f64 {
        self.to_erg_per_s() / SOLAR_LUMINOSITY_ERG_S
    }

    /// True for finite, non-negative values
    pub fn is_physical(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

/// Formats as `<value>*10^44 erg s^-1`, using the shortest decimal form of the
/// stored value.
impl fmt::Display for Luminosity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}*10^44 erg s^-1", self.0)
    }
}

impl From<f64> for Luminosity {
    fn from(value: f64) -> Self {
        Self::from_1e44_erg_s(value)
    }
}

impl Add for Luminosity {
    type Output = Luminosity;

    fn add(self, rhs: Luminosity) -> Luminosity {
        Luminosity(self.0 + rhs.0)
    }
}

impl Sub for Luminosity {
    type Output = Luminosity;

    fn sub(self, rhs: Luminosity) -> Luminosity {
        Luminosity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Luminosity {
    type Output = Luminosity;

    fn mul(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 * rhs)
    }
}

impl Div<f64> for Luminosity {
    type Output = Luminosity;

    fn div(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 / rhs)
    }
}

/// Division of Luminosity by Luminosity returns a dimensionless ratio
impl Div for Luminosity {
    type Output = f64;

    fn div(self, rhs: Luminosity) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Luminosity (commutative multiplication)
impl Mul<Luminosity> for f64 {
    type Output = Luminosity;

    fn mul(self, rhs: Luminosity) -> Luminosity {
        rhs * self
    }
}
