use ark_std::test_rng;

use crate::{
    curves::{models::SWModelParameters, mnt4::MNT4Parameters},
    error::Error,
    fields::{Field, PrimeField},
    mnt4_298::*,
    One, UniformRand, Zero,
};

std_curve_tests!(MNT4_298);

// 148 doublings and 70 additions for the positive ate loop count.
const DOUBLINGS: usize = 148;
const ADDITIONS: usize = 70;

#[test]
fn test_twist_coefficients() {
    let twist = Parameters::TWIST;
    let a = Fq2::new(g1::Parameters::COEFF_A, Fq::zero());
    let b = Fq2::new(g1::Parameters::COEFF_B, Fq::zero());

    assert_eq!(g2::Parameters::COEFF_A, a * &twist.square());
    assert_eq!(g2::Parameters::COEFF_B, b * &twist.square() * &twist);
    assert_eq!(
        Fq2::new(G1_COEFF_A_NON_RESIDUE, Fq::zero()),
        g2::Parameters::COEFF_A
    );

    let mut rng = test_rng();
    for _ in 0..10 {
        let e = Fq2::rand(&mut rng);
        assert_eq!(g2::Parameters::mul_by_a(&e), g2::Parameters::COEFF_A * &e);
        assert_eq!(g1::Parameters::mul_by_a(&e.c0), g1::Parameters::COEFF_A * &e.c0);
    }
}

#[test]
fn test_g2_prepared_coefficients() {
    let prepared = MNT4_298::precompute_g2(&G2Affine::prime_subgroup_generator()).unwrap();
    assert_eq!(prepared.double_coefficients.len(), DOUBLINGS);
    assert_eq!(prepared.addition_coefficients.len(), ADDITIONS);
    assert!(!prepared.is_zero());

    let zero = MNT4_298::precompute_g2(&G2Affine::zero()).unwrap();
    assert!(zero.is_zero());
    assert!(zero.double_coefficients.is_empty());
    assert!(zero.addition_coefficients.is_empty());
}

#[test]
fn test_invalid_precomputation() {
    let mut rng = test_rng();
    let p = MNT4_298::precompute_g1(&G1Projective::rand(&mut rng).into_affine());
    let q = MNT4_298::precompute_g2(&G2Projective::rand(&mut rng).into_affine()).unwrap();

    let mut short = q.clone();
    short.double_coefficients.pop();
    assert_eq!(
        MNT4_298::miller_loop(&p, &short),
        Err(Error::InvalidPrecomputation {
            expected: DOUBLINGS + ADDITIONS,
            found: DOUBLINGS + ADDITIONS - 1
        })
    );

    let mut long = q.clone();
    long.addition_coefficients.push(long.addition_coefficients[0].clone());
    assert_eq!(
        MNT4_298::double_miller_loop(&p, &q, &p, &long),
        Err(Error::InvalidPrecomputation {
            expected: DOUBLINGS + ADDITIONS,
            found: DOUBLINGS + ADDITIONS + 1
        })
    );
}

#[test]
fn test_scalar_scenario() {
    let g1 = G1Projective::prime_subgroup_generator();
    let g2 = G2Projective::prime_subgroup_generator();
    let a = Fr::from(123u64);
    let b = Fr::from(234u64);

    let expected = MNT4_298::pair_reduced(g1, g2)
        .unwrap()
        .pow((a * &b).into_repr());
    assert_eq!(MNT4_298::pair_reduced(g1 * a, g2 * b).unwrap(), expected);
    assert!(!expected.is_one());
}
