use ark_std::test_rng;

use crate::{
    curves::{models::SWModelParameters, mnt6::MNT6Parameters},
    error::Error,
    fields::{Field, PrimeField},
    mnt6_298::*,
    One, UniformRand, Zero,
};

std_curve_tests!(MNT6_298);

// The negative loop count closes with one more addition, through -R.
const DOUBLINGS: usize = 148;
const ADDITIONS: usize = 71;

#[test]
fn test_twist_coefficients() {
    let twist = Parameters::TWIST;
    let a = Fq3::new(g1::Parameters::COEFF_A, Fq::zero(), Fq::zero());
    let b = Fq3::new(g1::Parameters::COEFF_B, Fq::zero(), Fq::zero());

    assert_eq!(g2::Parameters::COEFF_A, a * &twist.square());
    assert_eq!(g2::Parameters::COEFF_B, b * &twist.square() * &twist);

    let mut rng = test_rng();
    for _ in 0..10 {
        let e = Fq3::rand(&mut rng);
        assert_eq!(g2::Parameters::mul_by_a(&e), g2::Parameters::COEFF_A * &e);
    }
}

#[test]
fn test_g2_prepared_coefficients() {
    let prepared = MNT6_298::precompute_g2(&G2Affine::prime_subgroup_generator()).unwrap();
    assert_eq!(prepared.double_coefficients.len(), DOUBLINGS);
    assert_eq!(prepared.addition_coefficients.len(), ADDITIONS);

    let zero = MNT6_298::precompute_g2(&G2Affine::zero()).unwrap();
    assert!(zero.is_zero());
    assert!(zero.double_coefficients.is_empty());
}

#[test]
fn test_invalid_precomputation() {
    let mut rng = test_rng();
    let p = MNT6_298::precompute_g1(&G1Projective::rand(&mut rng).into_affine());
    let q = MNT6_298::precompute_g2(&G2Projective::rand(&mut rng).into_affine()).unwrap();

    let mut short = q.clone();
    short.addition_coefficients.pop();
    assert_eq!(
        MNT6_298::miller_loop(&p, &short),
        Err(Error::InvalidPrecomputation {
            expected: DOUBLINGS + ADDITIONS,
            found: DOUBLINGS + ADDITIONS - 1
        })
    );

    let mut long = q.clone();
    long.double_coefficients.push(long.double_coefficients[0].clone());
    assert_eq!(
        MNT6_298::multi_miller_loop([(&p, &q), (&p, &long)]),
        Err(Error::InvalidPrecomputation {
            expected: DOUBLINGS + ADDITIONS,
            found: DOUBLINGS + ADDITIONS + 1
        })
    );

    // A corrupted identity precomputation is never read.
    let mut zero = MNT6_298::precompute_g2(&G2Affine::zero()).unwrap();
    zero.double_coefficients.push(q.double_coefficients[0].clone());
    assert_eq!(MNT6_298::miller_loop(&p, &zero).unwrap(), Fq6::one());
}

#[test]
fn test_scalar_scenario() {
    let g1 = G1Projective::prime_subgroup_generator();
    let g2 = G2Projective::prime_subgroup_generator();
    let a = Fr::from(123u64);
    let b = Fr::from(234u64);

    let expected = MNT6_298::pair_reduced(g1, g2)
        .unwrap()
        .pow((a * &b).into_repr());
    assert_eq!(MNT6_298::pair_reduced(g1 * a, g2 * b).unwrap(), expected);
    assert!(!expected.is_one());
}
