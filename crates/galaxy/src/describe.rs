//! The description capability shared by every galaxy layer.

use units::Luminosity;

use crate::activity::ActiveGalaxy;
use crate::galaxy_type::GalaxyType;

/// Anything that can render a human-readable description of itself.
///
/// Morphologies produce the base phrase ("a barred spiral galaxy"); facets
/// describe the galaxy they wrap and append their own fragment.
pub trait Describe {
    fn describe(&self) -> String;
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Wrapping helpers available on every describable galaxy.
///
/// ```rust
/// use galaxy::{Classify, Describe, Spiral};
///
/// let ngc_3227 = Spiral::new(false).with_type(true, true).with_activity(0.23);
/// assert!(ngc_3227.describe().ends_with("with luminosity 0.23*10^44 erg s^-1"));
/// ```
pub trait Classify: Describe + Sized {
    /// Wraps `self` in an early/late type facet
    fn with_type(self, star_forming: bool, gas_rich: bool) -> GalaxyType<Self> {
        GalaxyType::new(star_forming, gas_rich, self)
    }

    /// Wraps `self` in an activity facet
    fn with_activity(self, luminosity: impl Into<Luminosity>) -> ActiveGalaxy<Self> {
        ActiveGalaxy::new(luminosity, self)
    }
}

impl<T: Describe> Classify for T {}
