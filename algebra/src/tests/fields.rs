use crate::{
    biginteger::BigInteger,
    error::Error,
    fields::{Endianness, Field, FpParameters, LegendreSymbol, PrimeField, SquareRootField},
};
use ark_std::{rand::Rng, string::ToString, test_rng, vec};

pub const ITERATIONS: u32 = 40;

/// Ring axioms and inverses on random triples.
fn axiom_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let (a, b, c) = (F::rand(rng), F::rand(rng), F::rand(rng));

        assert_eq!((a + &b) + &c, a + &(b + &c));
        assert_eq!((a * &b) * &c, a * &(b * &c));
        assert_eq!(a * &(b + &c), a * &b + &(a * &c));
        assert_eq!(a + &b, b + &a);
        assert_eq!(a * &b, b * &a);
        assert!((a + &-a).is_zero());
        assert_eq!(a - &b, -(b - &a));
        assert_eq!(a * &a.inverse().unwrap(), F::one());
    }

    assert_eq!(F::zero().inverse(), Err(Error::NonInvertible));
    assert!(F::zero().inverse_in_place().is_err());
    assert!((-F::zero()).is_zero());
}

/// The specialised squaring and doubling agree with the generic paths.
fn power_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);

        assert_eq!(a.pow([0u64]), F::one());
        assert_eq!(a.pow([1u64]), a);
        assert_eq!(a.pow([2u64]), a.square());
        assert_eq!(a.pow([3u64]), a.square() * &a);
        assert_eq!(a.double(), a + &a);

        let mut b = a;
        b.square_in_place();
        assert_eq!(b, a * &a);
        b = a;
        b.double_in_place();
        assert_eq!(b, a.double());
    }

    let six = F::from(6u64);
    assert_eq!(six, F::from(2u64) * &F::from(3u64));
    assert_eq!((1u64..=3).map(F::from).sum::<F>(), six);
    assert_eq!((1u64..=3).map(F::from).product::<F>(), six);
    assert_eq!(F::from(true), F::one());
}

fn encoding_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        for endianness in [Endianness::Big, Endianness::Little] {
            let bytes = a.to_bytes(endianness);
            assert_eq!(bytes.len(), F::encoded_size());
            assert_eq!(F::from_bytes(&bytes, endianness), Ok(a));
        }
        if F::extension_degree() == 1 {
            let mut big = a.to_bytes(Endianness::Big);
            big.reverse();
            assert_eq!(big, a.to_bytes(Endianness::Little));
        }
    }

    let size = F::encoded_size();
    for bad in [vec![0u8; size - 1], vec![0u8; size + 1], vec![0xffu8; size]] {
        assert_eq!(F::from_bytes(&bad, Endianness::Big), Err(Error::DecodingError));
    }
    assert_eq!(F::from_bytes(&vec![0u8; size], Endianness::Little), Ok(F::zero()));
}

/// `a` and `b` are fixed inputs for the deterministic identities; the
/// random suites run on top.
pub fn field_test<F: Field>(a: F, b: F) {
    let (zero, one) = (F::zero(), F::one());
    assert!(zero.is_zero() && !zero.is_one());
    assert!(one.is_one() && !one.is_zero());
    assert_ne!(one + &one, one);

    assert_eq!(a - &a, zero);
    assert_eq!(zero - &a, -a);
    assert_eq!(a * &zero, zero);
    assert_eq!(a * &one, a);
    assert_eq!(
        (a + &b).square(),
        a.square() + &(a * &b).double() + &b.square()
    );

    let mut rng = test_rng();
    axiom_tests::<F, _>(&mut rng);
    power_tests::<F, _>(&mut rng);
    encoding_tests::<F, _>(&mut rng);
}

pub fn from_str_test<F: PrimeField>() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let n: u64 = rng.gen();
        let a = F::from_str(&n.to_string()).unwrap();
        assert_eq!(a, F::from(n));
        assert_eq!(Some(a), F::from_repr(n.into()));
    }

    assert!(F::from_str("0").unwrap().is_zero());
    for bad in ["", "00", "12a", "-1"] {
        assert_eq!(F::from_str(bad), Err(Error::DecodingError));
    }
    assert!(F::from_str(&"9".repeat(200)).is_err());
}

pub fn primefield_test<F: PrimeField>() {
    from_str_test::<F>();

    let one = F::one();
    assert_eq!(F::from_repr(F::Params::MODULUS), None);
    assert_eq!(F::size_in_bits(), F::Params::MODULUS_BITS as usize);

    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        assert_eq!(F::from_repr(a.into_repr()), Some(a));
        assert_eq!(a.sgn0(), a.into_repr().is_odd());
    }

    let g = F::multiplicative_generator();
    assert_eq!(g.pow(F::Params::MODULUS_MINUS_ONE_DIV_TWO), -one);

    let root = F::two_adic_root_of_unity();
    let s = F::Params::TWO_ADICITY;
    assert_eq!(g.pow(F::Params::T), root);
    assert_eq!(root.pow([1u64 << s]), one);
    assert_eq!(root.pow([1u64 << (s - 1)]), -one);
}

/// `sqrt` and `legendre` agree with each other and with squaring.
pub fn sqrt_field_test<F: SquareRootField>(elem: F) {
    let root = elem.square().sqrt().unwrap();
    assert!(root == elem || root == -elem);

    let mut rng = test_rng();
    let mut saw_non_residue = false;
    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        assert_eq!(a.square().legendre(), LegendreSymbol::QuadraticResidue);
        match a.legendre() {
            LegendreSymbol::QuadraticResidue => assert_eq!(a.sqrt().unwrap().square(), a),
            LegendreSymbol::QuadraticNonResidue => {
                saw_non_residue = true;
                assert_eq!(a.sqrt(), None);
            },
            LegendreSymbol::Zero => assert!(a.is_zero()),
        }
    }
    assert!(saw_non_residue);

    assert_eq!(F::zero().legendre(), LegendreSymbol::Zero);
    assert_eq!(F::zero().sqrt(), Some(F::zero()));
}

/// `frobenius_map(i)` is `x -> x^(p^i)` for `i < max_power`.
pub fn frobenius_test<F: Field, C: AsRef<[u64]>>(characteristic: C, max_power: usize) {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let mut expected = a;
        for power in 0..max_power {
            let mut mapped = a;
            mapped.frobenius_map(power);
            assert_eq!(mapped, expected);
            expected = expected.pow(&characteristic);
        }
    }
}
