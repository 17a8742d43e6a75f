//! Property tests for the fixed-point math functions

use proptest::prelude::*;
use tui_wireframe::fixed::{MathError, Q32};

proptest! {
    #[test]
    fn pythagorean_identity_holds_near_zero(x in -1.5f64..1.5) {
        let q = Q32::from_f64(x);
        let (s, c) = (q.sin().to_f64(), q.cos().to_f64());
        prop_assert!((s * s + c * c - 1.0).abs() < 1e-3, "x={} sin={} cos={}", x, s, c);
    }

    #[test]
    fn sin_tracks_f64_over_the_domain(x in -3.14f64..3.14) {
        let got = Q32::from_f64(x).sin().to_f64();
        prop_assert!((got - x.sin()).abs() < 1e-2, "sin({}) = {}", x, got);
    }

    #[test]
    fn wrapped_angles_stay_in_domain(x in -1000.0f64..1000.0) {
        let wrapped = Q32::from_f64(x).wrap_angle();
        prop_assert!(wrapped.in_trig_domain(), "{} -> {}", x, wrapped);
        prop_assert!((wrapped.sin().to_f64() - x.sin()).abs() < 1e-2);
    }

    #[test]
    fn sqrt_squares_back(x in 0.01f64..100.0) {
        let root = Q32::from_f64(x).sqrt().to_f64();
        prop_assert!((root * root - x).abs() < 2e-3, "sqrt({}) = {}", x, root);
    }

    #[test]
    fn checked_sin_rejects_only_out_of_domain(x in -10.0f64..10.0) {
        let q = Q32::from_f64(x);
        match q.checked_sin() {
            Ok(v) => {
                prop_assert!(q.in_trig_domain());
                prop_assert_eq!(v, q.sin());
            }
            Err(e) => {
                prop_assert!(!q.in_trig_domain());
                let is_domain = matches!(e, MathError::Domain { .. });
                prop_assert!(is_domain);
            }
        }
    }
}

#[test]
fn division_by_zero_is_an_error_when_checked() {
    assert!(matches!(
        Q32::ONE.checked_div(Q32::ZERO),
        Err(MathError::DivisionByZero { .. })
    ));
}
