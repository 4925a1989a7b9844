use ark_std::{rand::Rng, test_rng};
use core::str::FromStr;

use crate::{
    bls12_381::*,
    fields::{Field, FpParameters, LegendreSymbol, SquareRootField},
    One, Zero,
};

use crate::tests::fields::{field_test, frobenius_test, primefield_test, sqrt_field_test};

#[test]
fn test_fr() {
    let mut rng = test_rng();
    let a: Fr = rng.gen();
    let b: Fr = rng.gen();
    field_test(a, b);
    sqrt_field_test(a);
    primefield_test::<Fr>();
}

#[test]
fn test_fq() {
    let mut rng = test_rng();
    let a: Fq = rng.gen();
    let b: Fq = rng.gen();
    field_test(a, b);
    sqrt_field_test(a);
    primefield_test::<Fq>();
}

#[test]
fn test_fq2() {
    let mut rng = test_rng();
    let a: Fq2 = rng.gen();
    let b: Fq2 = rng.gen();
    field_test(a, b);
    sqrt_field_test(a);
    frobenius_test::<Fq2, _>(FqParameters::MODULUS, 13);
}

#[test]
fn test_fq6() {
    let mut rng = test_rng();
    let a: Fq6 = rng.gen();
    let b: Fq6 = rng.gen();
    field_test(a, b);
    frobenius_test::<Fq6, _>(FqParameters::MODULUS, 13);
}

#[test]
fn test_fq12() {
    let mut rng = test_rng();
    let a: Fq12 = rng.gen();
    let b: Fq12 = rng.gen();
    field_test(a, b);
    frobenius_test::<Fq12, _>(FqParameters::MODULUS, 13);
}

#[test]
fn test_fq_constants() {
    assert_eq!(FQ_ONE, Fq::one());
    assert_eq!(FQ_ZERO, Fq::zero());
    assert_eq!(FR_ONE, Fr::one());
    assert_eq!(FQ2_ONE, Fq2::one());
    assert_eq!(FQ6_ZERO, Fq6::zero());
    assert_eq!(FQ6_ONE, Fq6::one());
    assert_eq!(FqParameters::MODULUS_BITS, 381);
    assert_eq!(FrParameters::MODULUS_BITS, 255);
    assert_eq!(Fq::from_str("4").unwrap(), Fq::from(4u64));

    // u^2 = -1 in Fq2.
    let u = Fq2::new(Fq::zero(), Fq::one());
    assert_eq!(u.square(), -Fq2::one());
    assert_eq!((-Fq::one()).legendre(), LegendreSymbol::QuadraticNonResidue);

    // v^3 = u + 1 in Fq6, w^2 = v in Fq12.
    let v = Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero());
    let xi = Fq2::new(Fq::one(), Fq::one());
    assert_eq!(v.square() * &v, Fq6::new(xi, Fq2::zero(), Fq2::zero()));
    let w = Fq12::new(Fq6::zero(), Fq6::one());
    assert_eq!(w.square(), Fq12::new(v, Fq6::zero()));
}

#[test]
fn test_fq6_sparse_mul() {
    let mut rng = test_rng();
    for _ in 0..20 {
        let a: Fq6 = rng.gen();
        let c0: Fq2 = rng.gen();
        let c1: Fq2 = rng.gen();

        let mut by_1 = a;
        by_1.mul_by_1(&c1);
        assert_eq!(by_1, a * &Fq6::new(Fq2::zero(), c1, Fq2::zero()));

        let mut by_01 = a;
        by_01.mul_by_01(&c0, &c1);
        assert_eq!(by_01, a * &Fq6::new(c0, c1, Fq2::zero()));
    }
}

#[test]
fn test_fq12_sparse_mul() {
    let mut rng = test_rng();
    for _ in 0..20 {
        let a: Fq12 = rng.gen();
        let c0: Fq2 = rng.gen();
        let c1: Fq2 = rng.gen();
        let c4: Fq2 = rng.gen();

        let mut by_014 = a;
        by_014.mul_by_014(&c0, &c1, &c4);
        let sparse = Fq12::new(
            Fq6::new(c0, c1, Fq2::zero()),
            Fq6::new(Fq2::zero(), c4, Fq2::zero()),
        );
        assert_eq!(by_014, a * &sparse);

        let mut by_034 = a;
        by_034.mul_by_034(&c0, &c1, &c4);
        let sparse = Fq12::new(
            Fq6::new(c0, Fq2::zero(), Fq2::zero()),
            Fq6::new(c1, c4, Fq2::zero()),
        );
        assert_eq!(by_034, a * &sparse);
    }
}

#[test]
fn test_fq12_cyclotomic_subgroup() {
    let mut rng = test_rng();
    for _ in 0..10 {
        let f: Fq12 = rng.gen();

        // f^((p^6 - 1)(p^2 + 1)) lies in the cyclotomic subgroup.
        let mut g = f.unitary_inverse() * &f.inverse().unwrap();
        let mut g_p2 = g;
        g_p2.frobenius_map(2);
        g *= &g_p2;

        assert_eq!(g.cyclotomic_square(), g.square());
        assert_eq!(g.unitary_inverse(), g.inverse().unwrap());
        let x = [0xd201000000010000u64];
        assert_eq!(g.cyclotomic_exp(x), g.pow(x));

        let mut conj = g;
        conj.conjugate();
        assert_eq!(conj * &g, Fq12::one());
    }
}

#[test]
fn test_fq2_norm_and_legendre() {
    let mut rng = test_rng();
    for _ in 0..20 {
        let a: Fq2 = rng.gen();
        assert_eq!(a.norm(), a.c0.square() + &a.c1.square());
        assert_eq!(a.legendre(), a.norm().legendre());

        let s: Fq = rng.gen();
        let mut scaled = a;
        scaled.mul_assign_by_fp(&s);
        assert_eq!(scaled, a * &Fq2::new(s, Fq::zero()));
    }
}
