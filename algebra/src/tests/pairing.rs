use crate::{
    curves::{AffineCurve, PairingEngine, ProjectiveCurve},
    error::Error,
    fields::{Field, FpParameters, PrimeField},
    One, UniformRand, Zero,
};
use ark_std::test_rng;

/// Bilinearity, non-degeneracy and the order of the reduced pairing.
pub fn bilinearity_test<E: PairingEngine>() {
    let mut rng = test_rng();
    let a = E::G1Projective::rand(&mut rng);
    let b = E::G2Projective::rand(&mut rng);
    let s = E::Fr::rand(&mut rng);

    let sa = a * s;
    let sb = b * s;

    let ans1 = E::pair_reduced(sa, b).unwrap();
    let ans2 = E::pair_reduced(a, sb).unwrap();
    let ans3 = E::pair_reduced(a, b).unwrap().pow(s.into_repr());

    assert_eq!(ans1, ans2);
    assert_eq!(ans2, ans3);

    assert_ne!(ans1, E::Fqk::one());
    assert_ne!(ans2, E::Fqk::one());
    assert_ne!(ans3, E::Fqk::one());

    let r = <E::Fr as PrimeField>::Params::MODULUS;
    assert_eq!(ans1.pow(r), E::Fqk::one());
    assert_eq!(ans2.pow(r), E::Fqk::one());
    assert_eq!(ans3.pow(r), E::Fqk::one());

    // e(a + c, b) = e(a, b) * e(c, b)
    let c = E::G1Projective::rand(&mut rng);
    assert_eq!(
        E::pair_reduced(a + &c, b).unwrap(),
        E::pair_reduced(a, b).unwrap() * &E::pair_reduced(c, b).unwrap()
    );

    // e(-a, b) is the inverse of e(a, b)
    assert_eq!(
        E::pair_reduced(-a, b).unwrap() * &E::pair_reduced(a, b).unwrap(),
        E::Fqk::one()
    );
}

pub fn identity_test<E: PairingEngine>() {
    let mut rng = test_rng();
    let a = E::G1Projective::rand(&mut rng);
    let b = E::G2Projective::rand(&mut rng);

    assert_eq!(
        E::pair_reduced(E::G1Projective::zero(), b).unwrap(),
        E::Fqk::one()
    );
    assert_eq!(
        E::pair_reduced(a, E::G2Projective::zero()).unwrap(),
        E::Fqk::one()
    );
    assert_eq!(
        E::pair(E::G1Affine::zero(), E::G2Affine::zero()).unwrap(),
        E::Fqk::one()
    );
    assert_eq!(E::multi_miller_loop(ark_std::iter::empty()).unwrap(), E::Fqk::one());
    assert_eq!(E::product_of_pairings(&[]).unwrap(), E::Fqk::one());
    assert_eq!(
        E::final_exponentiation(&E::Fqk::one()).unwrap(),
        E::Fqk::one()
    );
    assert_eq!(
        E::final_exponentiation(&E::Fqk::zero()),
        Err(Error::NonInvertible)
    );
}

pub fn miller_loop_test<E: PairingEngine>() {
    let mut rng = test_rng();
    let a = E::G1Projective::rand(&mut rng).into_affine();
    let b = E::G2Projective::rand(&mut rng).into_affine();
    let c = E::G1Projective::rand(&mut rng).into_affine();
    let d = E::G2Projective::rand(&mut rng).into_affine();

    let pa = E::precompute_g1(&a);
    let qb = E::precompute_g2(&b).unwrap();
    let pc = E::precompute_g1(&c);
    let qd = E::precompute_g2(&d).unwrap();

    let ab = E::miller_loop(&pa, &qb).unwrap();
    assert_eq!(ab, E::pair(a, b).unwrap());

    let cd = E::miller_loop(&pc, &qd).unwrap();
    let double = E::double_miller_loop(&pa, &qb, &pc, &qd).unwrap();
    assert_eq!(
        E::final_exponentiation(&double).unwrap(),
        E::final_exponentiation(&(ab * &cd)).unwrap()
    );
    assert_eq!(
        E::final_exponentiation(&double).unwrap(),
        E::product_of_pairings(&[(a, b), (c, d)]).unwrap()
    );

    // e(s * a, b) * e(-a, s * b) = 1 in a single final exponentiation.
    let s = E::Fr::rand(&mut rng);
    let sa = a.mul_bigint(s.into_repr()).into_affine();
    let sb = b.mul_bigint(s.into_repr()).into_affine();
    assert_eq!(
        E::product_of_pairings(&[(sa, b), (-a, sb)]).unwrap(),
        E::Fqk::one()
    );

    // An identity in either slot contributes nothing to the product.
    let p_zero = E::precompute_g1(&E::G1Affine::zero());
    let q_zero = E::precompute_g2(&E::G2Affine::zero()).unwrap();
    assert_eq!(
        E::double_miller_loop(&pa, &qb, &p_zero, &qd).unwrap(),
        ab
    );
    assert_eq!(
        E::double_miller_loop(&pa, &qb, &pc, &q_zero).unwrap(),
        ab
    );
}

pub fn pairing_tests<E: PairingEngine>() {
    crate::tests::init_tracing();

    bilinearity_test::<E>();
    identity_test::<E>();
    miller_loop_test::<E>();
}
