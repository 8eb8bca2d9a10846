mod common;

use approx::assert_relative_eq;
use common::{MockLiquid, P_REF, light_heavy, mixture_of};
use lm_liquids::LiquidDatabase;
use lm_mixture::{LiquidMixture, MixtureError, MixtureModel, SolverConfig};
use proptest::prelude::*;

fn water() -> LiquidMixture {
    LiquidMixture::from_yaml_str("H2O:\n", &LiquidDatabase::builtin()).unwrap()
}

#[test]
fn pure_liquid_matches_closed_form() {
    let light = MockLiquid::light();
    let mixture = mixture_of(vec![light.clone()]);

    for p in [2e3, 5e4, P_REF, 1e6, 5e6] {
        let t = mixture.pv_invert(p, &[1.0]).unwrap();
        assert_relative_eq!(t, light.boiling_point(p), epsilon = 1e-5);
    }
}

#[test]
fn water_boils_near_its_normal_boiling_point() {
    let t = water().pv_invert(101_325.0, &[1.0]).unwrap();
    assert!((t - 373.15).abs() < 0.5, "T = {t}");
}

#[test]
fn water_heptane_residual_is_within_tolerance() {
    let mixture = LiquidMixture::from_yaml_str("H2O:\nC7H16:\n", &LiquidDatabase::builtin()).unwrap();
    let p = 101_325.0;
    let x = [0.5, 0.5];

    let t = mixture.pv_invert(p, &x).unwrap();
    let residual = mixture.pv(p, t, &x).unwrap() - p;
    assert!(residual.abs() < 1e-6 * p, "residual = {residual}");

    // Equimolar bubble point sits between the two normal boiling points
    assert!(t > 360.0 && t < 380.0, "T = {t}");
}

#[test]
fn pressure_above_the_bracket_is_a_convergence_error() {
    let err = water().pv_invert(1e9, &[1.0]).unwrap_err();
    assert!(matches!(err, MixtureError::Convergence { .. }));
}

#[test]
fn pressure_below_the_bracket_is_a_convergence_error() {
    let err = water().pv_invert(1.0, &[1.0]).unwrap_err();
    assert!(matches!(err, MixtureError::Convergence { .. }));
}

#[test]
fn non_physical_pressure_is_rejected() {
    let mixture = light_heavy();
    for p in [0.0, -1e5, f64::NAN, f64::INFINITY] {
        let err = mixture.pv_invert(p, &[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, MixtureError::Convergence { .. }), "p = {p}");
    }
}

#[test]
fn non_finite_composition_is_rejected() {
    let err = light_heavy().pv_invert(P_REF, &[f64::NAN, 0.5]).unwrap_err();
    assert!(matches!(err, MixtureError::NonFinite { what: "x", .. }));
}

#[test]
fn exhausted_budget_is_a_convergence_error() {
    let config = SolverConfig {
        max_iterations: 2,
        ..SolverConfig::default()
    };
    let err = water().pv_invert_with(101_325.0, &[1.0], &config).unwrap_err();
    assert!(matches!(err, MixtureError::Convergence { what } if what.contains("iterations")));
}

#[test]
fn looser_tolerance_still_lands_close() {
    let config = SolverConfig {
        t_tol: 1e-2,
        rel_tol: 1e-4,
        ..SolverConfig::default()
    };
    let light = MockLiquid::light();
    let t = mixture_of(vec![light.clone()])
        .pv_invert_with(P_REF, &[1.0], &config)
        .unwrap();
    assert!((t - light.tb).abs() < 1e-2);
}

proptest! {
    #[test]
    fn mixture_residual_is_small(x0 in 0.0_f64..=1.0_f64, p in 1e4_f64..1e6_f64) {
        let mixture = light_heavy();
        let x = [x0, 1.0 - x0];

        let t = mixture.pv_invert(p, &x).unwrap();
        let residual = mixture.pv(p, t, &x).unwrap() - p;
        prop_assert!(residual.abs() < 1e-6 * p, "residual = {}", residual);
        prop_assert!(t >= mixture.tpt(&x).unwrap() && t <= mixture.tc(&x).unwrap());
    }

    #[test]
    fn boiling_point_rises_with_pressure(p in 1e4_f64..1e6_f64) {
        let mixture = water();
        let t_low = mixture.pv_invert(p, &[1.0]).unwrap();
        let t_high = mixture.pv_invert(1.5 * p, &[1.0]).unwrap();
        prop_assert!(t_high > t_low);
    }
}
