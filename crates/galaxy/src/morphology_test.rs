use proptest::prelude::*;

use crate::describe::Describe;
use crate::error::GalaxyError;
use crate::morphology::{Elliptical, Irregular, Morphology, Spiral};

// ============================================================================
// Elliptical ellipticity tests
// ============================================================================

#[test]
fn ellipticity_from_axes() {
    // round(10 * (1 - 7/10)) = 3
    assert_eq!(Elliptical::new(10, 7).ellipticity(), Some(3));
    // Round galaxy is E0
    assert_eq!(Elliptical::new(5, 5).ellipticity(), Some(0));
    // Degenerate flat disk
    assert_eq!(Elliptical::new(8, 0).ellipticity(), Some(10));
}

#[test]
fn ellipticity_rounds_half_away_from_zero() {
    // 10 * (1 - 15/20) = 2.5
    assert_eq!(Elliptical::new(20, 15).ellipticity(), Some(3));
    // 10 * (1 - 3/4) = 2.5
    assert_eq!(Elliptical::new(4, 3).ellipticity(), Some(3));
    // 10 * (1 - 2/3) = 3.33...
    assert_eq!(Elliptical::new(3, 2).ellipticity(), Some(3));
}

#[test]
fn ellipticity_undefined_for_zero_major_axis() {
    let galaxy = Elliptical::new(0, 4);
    assert_eq!(galaxy.ellipticity(), None);
    assert_eq!(galaxy.ellipticity_index(), Elliptical::UNDEFINED_ELLIPTICITY);
    assert_eq!(galaxy.hubble_class(), None);
}

#[test]
fn computed_sentinel_is_undefined() {
    // round(10 * (1 - 11/10)) = -1 collides with the undefined marker
    let galaxy = Elliptical::new(10, 11);
    assert_eq!(galaxy.ellipticity(), None);
    assert_eq!(galaxy.ellipticity_index(), -1);
    assert!(galaxy.describe().contains("undefined"));
    assert_eq!(
        galaxy.describe(),
        "an eliptical galaxy with undefined ellipticity"
    );
}

#[test]
fn extreme_axes_clamp_to_i32_range() {
    // 10 * (1 + 2^31) overflows i32
    assert_eq!(Elliptical::new(1, i32::MIN).ellipticity(), Some(i32::MAX));
    assert_eq!(Elliptical::new(1, i32::MAX).ellipticity(), Some(i32::MIN));
}

#[test]
fn default_elliptical_is_undefined() {
    let galaxy = Elliptical::default();
    assert_eq!(galaxy.semi_major_axis(), 0);
    assert_eq!(galaxy.semi_minor_axis(), 0);
    assert_eq!(
        galaxy.describe(),
        "an eliptical galaxy with undefined ellipticity"
    );
}

#[test]
fn out_of_domain_axes_are_accepted() {
    // Minor longer than major gives a negative ellipticity, still defined
    let galaxy = Elliptical::new(10, 20);
    assert_eq!(galaxy.ellipticity(), Some(-10));
    assert_eq!(galaxy.ellipticity_index(), -10);

    let galaxy = Elliptical::new(-10, 7);
    assert_eq!(galaxy.ellipticity(), Some(17));
}

#[test]
fn hubble_class_labels() {
    assert_eq!(Elliptical::new(10, 7).hubble_class().as_deref(), Some("E3"));
    assert_eq!(Elliptical::new(10, 10).hubble_class().as_deref(), Some("E0"));
    assert_eq!(Elliptical::new(10, 3).hubble_class().as_deref(), Some("E7"));
    // Flatter than any observed elliptical
    assert_eq!(Elliptical::new(10, 1).hubble_class(), None);
}

#[test]
fn elliptical_description() {
    assert_eq!(
        Elliptical::new(10, 7).describe(),
        "an eliptical galaxy with ellipticity of 3"
    );
    assert_eq!(
        Elliptical::new(0, 0).describe(),
        "an eliptical galaxy with undefined ellipticity"
    );
}

// ============================================================================
// Checked construction
// ============================================================================

#[test]
fn try_new_accepts_valid_axes() {
    let galaxy = Elliptical::try_new(10, 7).unwrap();
    assert_eq!(galaxy, Elliptical::new(10, 7));

    // Zero axes are allowed and stay undefined
    let galaxy = Elliptical::try_new(0, 0).unwrap();
    assert_eq!(galaxy.ellipticity(), None);
}

#[test]
fn try_new_rejects_out_of_domain_axes() {
    assert_eq!(
        Elliptical::try_new(-1, 0),
        Err(GalaxyError::NegativeAxis {
            axis: "semi-major",
            value: -1
        })
    );
    assert_eq!(
        Elliptical::try_new(5, -2),
        Err(GalaxyError::NegativeAxis {
            axis: "semi-minor",
            value: -2
        })
    );
    assert_eq!(
        Elliptical::try_new(5, 6),
        Err(GalaxyError::MinorAxisExceedsMajor { major: 5, minor: 6 })
    );
}

#[test]
fn error_messages() {
    let error = Elliptical::try_new(5, 6).unwrap_err();
    assert_eq!(error.to_string(), "semi-minor axis 6 exceeds semi-major axis 5");

    let error = Elliptical::try_new(-3, 0).unwrap_err();
    assert_eq!(error.to_string(), "semi-major axis must be non-negative, got -3");
}

// ============================================================================
// Spiral and Irregular
// ============================================================================

#[test]
fn spiral_description() {
    assert_eq!(Spiral::new(true).describe(), "a barred spiral galaxy");
    assert_eq!(Spiral::new(false).describe(), "an unbarred spiral galaxy");
    assert!(Spiral::new(true).is_barred());
}

#[test]
fn irregular_description() {
    assert_eq!(Irregular::new(true).describe(), "an irregular galaxy type I");
    assert_eq!(Irregular::new(false).describe(), "an irregular galaxy type II");
    assert!(!Irregular::new(false).has_structure());
}

// ============================================================================
// Morphology
// ============================================================================

#[test]
fn morphology_delegates_description() {
    let galaxies: Vec<Morphology> = vec![
        Elliptical::new(10, 7).into(),
        Spiral::new(true).into(),
        Irregular::new(false).into(),
    ];

    let names: Vec<_> = galaxies.iter().map(Morphology::name).collect();
    assert_eq!(names, ["Elliptical", "Spiral", "Irregular"]);

    assert_eq!(galaxies[0].describe(), Elliptical::new(10, 7).describe());
    assert_eq!(galaxies[1].describe(), "a barred spiral galaxy");
    assert_eq!(galaxies[2].describe(), "an irregular galaxy type II");
}

#[test]
fn elliptical_serializes_axes_only() {
    let json = serde_json::to_value(Elliptical::new(10, 7)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "semiMajorAxis": 10, "semiMinorAxis": 7 })
    );
}

#[test]
fn elliptical_recomputes_ellipticity_on_deserialize() {
    let galaxy: Elliptical =
        serde_json::from_str(r#"{ "semiMajorAxis": 20, "semiMinorAxis": 15 }"#).unwrap();
    assert_eq!(galaxy.ellipticity(), Some(3));

    let galaxy: Elliptical =
        serde_json::from_str(r#"{ "semiMajorAxis": 0, "semiMinorAxis": 15 }"#).unwrap();
    assert_eq!(galaxy.ellipticity(), None);
}

#[test]
fn morphology_is_tagged() {
    let json = serde_json::to_value(Morphology::from(Spiral::new(true))).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "morphology": "Spiral", "isBarred": true })
    );

    let galaxy: Morphology = serde_json::from_str(
        r#"{ "morphology": "Elliptical", "semiMajorAxis": 10, "semiMinorAxis": 7 }"#,
    )
    .unwrap();
    assert_eq!(galaxy, Morphology::Elliptical(Elliptical::new(10, 7)));
}

proptest! {
    #[test]
    fn ellipticity_stays_in_range(major in 1i32..10_000, fraction in 0.0f64..=1.0) {
        let minor = (major as f64 * fraction).floor() as i32;
        let ellipticity = Elliptical::new(major, minor).ellipticity().unwrap();
        prop_assert!((0..=10).contains(&ellipticity));
    }

    #[test]
    fn zero_major_axis_is_always_undefined(minor in any::<i32>()) {
        let description = Elliptical::new(0, minor).describe();
        prop_assert!(description.contains("undefined"));
    }
}
