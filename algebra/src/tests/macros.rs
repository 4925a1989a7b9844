/// Instantiates the generic group, encoding, msm and pairing suites for a
/// curve module that exposes `g1`, `g2` and the usual affine/projective
/// aliases.
#[allow(unused_macros)]
macro_rules! std_curve_tests {
    ($CURVE_IDENT: ident) => {
        use crate::{
            curves::{AffineCurve, PairingEngine, ProjectiveCurve},
            tests::{curves::*, encoding::*, msm::*, pairing::*},
        };

        #[test]
        fn test_g1_curve() {
            curve_tests::<G1Projective>();
        }

        #[test]
        fn test_sw_g1() {
            sw_tests::<g1::Parameters>();
        }

        #[test]
        fn test_g2_curve() {
            curve_tests::<G2Projective>();
        }

        #[test]
        fn test_sw_g2() {
            sw_tests::<g2::Parameters>();
        }

        #[test]
        fn test_g1_generator() {
            let generator = G1Affine::prime_subgroup_generator();
            assert!(generator.is_on_curve());
            assert!(generator.is_in_correct_subgroup_assuming_on_curve());
        }

        #[test]
        fn test_g2_generator() {
            let generator = G2Affine::prime_subgroup_generator();
            assert!(generator.is_on_curve());
            assert!(generator.is_in_correct_subgroup_assuming_on_curve());
        }

        #[test]
        fn test_g1_encoding() {
            encoding_test::<g1::Parameters>();
        }

        #[test]
        fn test_g2_encoding() {
            encoding_test::<g2::Parameters>();
        }

        #[test]
        fn test_g1_msm() {
            test_msm::<G1Affine>();
        }

        #[test]
        fn test_g2_msm() {
            test_msm::<G2Affine>();
        }

        #[test]
        fn test_g1_sum_par() {
            test_sum_par::<G1Projective>();
        }

        #[test]
        fn test_pairing() {
            pairing_tests::<$CURVE_IDENT>();
        }
    };
}
