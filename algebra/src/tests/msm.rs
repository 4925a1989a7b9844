use crate::{
    curves::{AffineCurve, ProjectiveCurve},
    error::Error,
    fields::{FpParameters, PrimeField},
    msm::{sum_par, VariableBaseMSM},
    One, UniformRand, Zero,
};
use ark_std::{test_rng, vec::Vec};
use itertools::Itertools;

fn naive_var_base_msm<G: AffineCurve>(
    bases: &[G],
    scalars: &[<G::ScalarField as PrimeField>::BigInt],
) -> G::Projective {
    let mut acc = G::Projective::zero();

    for (base, scalar) in bases.iter().zip_eq(scalars) {
        acc += &base.mul_bigint(*scalar);
    }
    acc
}

pub fn test_msm<G: AffineCurve>() {
    let mut rng = test_rng();

    // Below and above the window size switch.
    for &samples in &[1usize, 10, 100] {
        let mut v = (0..samples)
            .map(|_| G::ScalarField::rand(&mut rng).into_repr())
            .collect::<Vec<_>>();
        let g = (0..samples)
            .map(|_| G::Projective::rand(&mut rng).into_affine())
            .collect::<Vec<_>>();

        // Zero and unit scalars take their own paths through the buckets.
        if samples > 2 {
            v[0] = G::ScalarField::zero().into_repr();
            v[1] = G::ScalarField::one().into_repr();
        }

        let naive = naive_var_base_msm(g.as_slice(), v.as_slice());
        let fast = VariableBaseMSM::multi_scalar_mul(g.as_slice(), v.as_slice()).unwrap();

        assert_eq!(naive.into_affine(), fast.into_affine());
    }

    // Identity bases are skipped.
    let g = [G::zero(), G::prime_subgroup_generator()];
    let v = [
        G::ScalarField::rand(&mut rng).into_repr(),
        G::ScalarField::from(7u64).into_repr(),
    ];
    assert_eq!(
        VariableBaseMSM::multi_scalar_mul(&g, &v).unwrap(),
        G::prime_subgroup_generator().mul_bigint([7u64])
    );

    let empty: [G; 0] = [];
    assert!(VariableBaseMSM::multi_scalar_mul(&empty, &[]).unwrap().is_zero());

    let bases = [G::prime_subgroup_generator(); 3];
    let scalars = [G::ScalarField::one().into_repr(); 2];
    assert!(matches!(
        VariableBaseMSM::multi_scalar_mul(&bases, &scalars),
        Err(Error::InvalidArgument(_))
    ));

    // Scalars at or above the modulus would lose their top bits to the
    // windowing, so they are refused rather than silently truncated.
    let mut all_ones = <G::ScalarField as PrimeField>::BigInt::default();
    all_ones.as_mut().iter_mut().for_each(|limb| *limb = u64::MAX);
    let modulus = <G::ScalarField as PrimeField>::Params::MODULUS;
    for unreduced in [modulus, all_ones] {
        let scalars = [G::ScalarField::one().into_repr(), unreduced];
        let bases = [G::prime_subgroup_generator(); 2];
        assert_eq!(
            VariableBaseMSM::multi_scalar_mul(&bases, &scalars),
            Err(Error::InvalidArgument(
                "scalar is not reduced modulo the scalar field"
            ))
        );
    }
}

pub fn test_sum_par<G: ProjectiveCurve>() {
    let mut rng = test_rng();

    for &samples in &[0usize, 1, 7, 64, 129] {
        let points = (0..samples).map(|_| G::rand(&mut rng)).collect::<Vec<_>>();
        let expected = points.iter().fold(G::zero(), |acc, p| acc + p);
        assert_eq!(sum_par(&points), expected);
    }
}
