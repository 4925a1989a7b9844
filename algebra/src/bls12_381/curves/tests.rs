use ark_std::{test_rng, vec::Vec};

use crate::{
    bls12_381::*,
    error::Error,
    fields::{Field, PrimeField},
    One, UniformRand, Zero,
};

std_curve_tests!(Bls12_381);

#[test]
fn test_g1_generator_raw() {
    let generator = G1Affine::prime_subgroup_generator();
    let lifted = G1Affine::get_point_from_x(generator.x, generator.y.sgn0()).unwrap();
    assert_eq!(lifted, generator);

    // Small x values lift to points outside the prime-order subgroup.
    let mut x = Fq::zero();
    for _ in 0..4 {
        if let Some(p) = G1Affine::get_point_from_x(x, false) {
            assert!(!p.is_in_correct_subgroup_assuming_on_curve());
        }
        x += &Fq::one();
    }
}

#[test]
fn test_scalar_scenario() {
    crate::tests::init_tracing();

    let g1 = G1Projective::prime_subgroup_generator();
    let g2 = G2Projective::prime_subgroup_generator();
    let a = Fr::from(123u64);
    let b = Fr::from(234u64);

    let ag1 = (g1 * a).into_affine();
    let bg2 = (g2 * b).into_affine();

    let expected = Bls12_381::pair_reduced(g1, g2)
        .unwrap()
        .pow((a * &b).into_repr());
    assert_eq!(Bls12_381::pair_reduced(ag1, bg2).unwrap(), expected);

    let double = Bls12_381::double_miller_loop(
        &Bls12_381::precompute_g1(&ag1),
        &Bls12_381::precompute_g2(&g2.into_affine()).unwrap(),
        &Bls12_381::precompute_g1(&g1.into_affine()),
        &Bls12_381::precompute_g2(&bg2).unwrap(),
    )
    .unwrap();
    assert_eq!(
        Bls12_381::final_exponentiation(&double).unwrap(),
        Bls12_381::pair_reduced(ag1, g2).unwrap() * &Bls12_381::pair_reduced(g1, bg2).unwrap()
    );
}

#[test]
fn test_g2_prepared_coefficients() {
    let q = G2Affine::prime_subgroup_generator();
    let prepared = Bls12_381::precompute_g2(&q).unwrap();

    // 63 doublings and 5 additions for |x| = 0xd201000000010000.
    assert_eq!(prepared.ell_coeffs.len(), 68);
    assert_eq!(G2Prepared::coefficient_count(), 68);
    assert!(!prepared.is_zero());

    let zero = Bls12_381::precompute_g2(&G2Affine::zero()).unwrap();
    assert!(zero.is_zero());
    assert!(zero.ell_coeffs.is_empty());
    assert!(G2Prepared::default().is_zero());
}

#[test]
fn test_invalid_precomputation() {
    let mut rng = test_rng();
    let p = Bls12_381::precompute_g1(&G1Projective::rand(&mut rng).into_affine());
    let mut q = Bls12_381::precompute_g2(&G2Projective::rand(&mut rng).into_affine()).unwrap();

    q.ell_coeffs.pop();
    assert_eq!(
        Bls12_381::miller_loop(&p, &q),
        Err(Error::InvalidPrecomputation {
            expected: 68,
            found: 67
        })
    );

    let good = Bls12_381::precompute_g2(&G2Affine::prime_subgroup_generator()).unwrap();
    assert_eq!(
        Bls12_381::double_miller_loop(&p, &good, &p, &q),
        Err(Error::InvalidPrecomputation {
            expected: 68,
            found: 67
        })
    );

    let mut extended = good.clone();
    extended.ell_coeffs.push(extended.ell_coeffs[0]);
    assert_eq!(
        Bls12_381::multi_miller_loop([(&p, &extended)]),
        Err(Error::InvalidPrecomputation {
            expected: 68,
            found: 69
        })
    );
}

#[test]
fn test_product_of_pairings_matches_pairs() {
    let mut rng = test_rng();
    let pairs = (0..4)
        .map(|_| {
            (
                G1Projective::rand(&mut rng).into_affine(),
                G2Projective::rand(&mut rng).into_affine(),
            )
        })
        .collect::<Vec<_>>();

    let expected = pairs
        .iter()
        .map(|(p, q)| Bls12_381::pair_reduced(*p, *q).unwrap())
        .product::<Fq12>();
    assert_eq!(Bls12_381::product_of_pairings(&pairs).unwrap(), expected);
    assert!(!expected.is_one());
}

#[test]
fn test_g1_cofactor_clearing() {
    let mut rng = test_rng();
    for _ in 0..10 {
        let x: Fq = Fq::rand(&mut rng);
        if let Some(p) = G1Affine::get_point_from_x(x, true) {
            let cleared = G1Affine::from(p.scale_by_cofactor());
            assert!(cleared.is_on_curve());
            assert!(cleared.is_in_correct_subgroup_assuming_on_curve());
        }
    }
}

#[test]
fn test_unreduced_miller_loop_is_a_conjugate() {
    let mut rng = test_rng();
    let p = G1Projective::rand(&mut rng).into_affine();
    let q = G2Projective::rand(&mut rng).into_affine();

    let f = Bls12_381::pair(p, q).unwrap();
    assert_eq!(
        Bls12_381::final_exponentiation(&f).unwrap(),
        Bls12_381::pair_reduced(p, q).unwrap()
    );

    // x < 0 ends the loop with a conjugation: the unreduced values of a
    // conjugate and of an inverse differ, the reduced ones coincide.
    let conjugate = f.unitary_inverse();
    let inverse = f.inverse().unwrap();
    assert_ne!(conjugate, inverse);
    assert_eq!(
        Bls12_381::final_exponentiation(&conjugate).unwrap(),
        Bls12_381::final_exponentiation(&inverse).unwrap()
    );
}
