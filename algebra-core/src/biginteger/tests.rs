use crate::biginteger::{BigInteger, BigInteger256, BigInteger384};
use ark_std::UniformRand;

fn biginteger_arithmetic_test<B: BigInteger>(a: B, b: B, zero: B) {
    // zero == zero
    assert_eq!(zero, zero);

    // zero.is_zero() == true
    assert!(zero.is_zero());

    // a == a
    assert_eq!(a, a);

    // a + 0 = a
    let mut a0_add = a;
    a0_add.add_nocarry(&zero);
    assert_eq!(a0_add, a);

    // a - 0 = a
    let mut a0_sub = a;
    a0_sub.sub_noborrow(&zero);
    assert_eq!(a0_sub, a);

    // a - a = 0
    let mut aa_sub = a;
    aa_sub.sub_noborrow(&a);
    assert_eq!(aa_sub, zero);

    // a + b = b + a
    let mut ab_add = a;
    ab_add.add_nocarry(&b);
    let mut ba_add = b;
    ba_add.add_nocarry(&a);
    assert_eq!(ab_add, ba_add);
}

fn biginteger_bits_test<B: BigInteger>() {
    let mut one = B::from(1u64);
    assert!(one.get_bit(0));
    assert!(!one.get_bit(1));
    one.muln(5);
    let thirty_two = one;
    assert!(!thirty_two.get_bit(0));
    assert!(!thirty_two.get_bit(1));
    assert!(!thirty_two.get_bit(2));
    assert!(!thirty_two.get_bit(3));
    assert!(!thirty_two.get_bit(4));
    assert!(thirty_two.get_bit(5), "{:?}", thirty_two);
    assert_eq!(thirty_two.num_bits(), 6);
    assert_eq!(
        thirty_two.to_bits_be(),
        ark_std::vec![true, false, false, false, false, false]
    );

    let mut back = thirty_two;
    back.divn(5);
    assert_eq!(back, B::from(1u64));
}

fn biginteger_bytes_test<B: BigInteger>(a: B) {
    let le = a.to_bytes_le();
    assert_eq!(le.len(), B::NUM_LIMBS * 8);
    assert_eq!(B::from_bytes_le(&le), Some(a));

    let mut be = a.to_bytes_be();
    be.reverse();
    assert_eq!(be, le);

    let too_long = ark_std::vec![0u8; B::NUM_LIMBS * 8 + 1];
    assert!(B::from_bytes_le(&too_long).is_none());
}

fn wnaf_test<B: BigInteger>(a: B) {
    let naf = a.find_wnaf();
    for pair in naf.windows(2) {
        assert!(pair[0] == 0 || pair[1] == 0);
    }
    // Recompose via Horner, most significant digit first.
    let mut acc = 0i128;
    if a.num_bits() < 100 {
        for d in naf.iter().rev() {
            acc = 2 * acc + i128::from(*d);
        }
        let limbs = a.as_ref();
        let expected = i128::from(limbs[0]) + (i128::from(limbs[1] & 0xffff_ffff) << 64);
        assert_eq!(acc, expected);
    }
}

fn test_biginteger<B: BigInteger>(zero: B) {
    let mut rng = ark_std::test_rng();
    let a = B::rand(&mut rng);
    let b = B::rand(&mut rng);
    biginteger_arithmetic_test(a, b, zero);
    biginteger_bits_test::<B>();
    biginteger_bytes_test(a);
    wnaf_test(B::from(0x1234_5678_9abc_def0u64));
    wnaf_test(B::from(u64::MAX));
}

#[test]
fn test_biginteger256() {
    test_biginteger(BigInteger256::new([0u64; 4]));
}

#[test]
fn test_biginteger384() {
    test_biginteger(BigInteger384::new([0u64; 6]));
}

#[test]
fn display_is_hex() {
    let a = BigInteger256::from(255u64);
    assert_eq!(
        ark_std::format!("{}", a),
        "0x00000000000000000000000000000000000000000000000000000000000000FF"
    );
}

#[test]
fn shifts_cross_limb_boundaries() {
    let mut a = BigInteger256::new([u64::MAX, 0, 0, 0]);
    a.muln(70);
    assert_eq!(a, BigInteger256::new([0, u64::MAX << 6, (1 << 6) - 1, 0]));
    a.divn(70);
    assert_eq!(a, BigInteger256::new([u64::MAX, 0, 0, 0]));

    a.muln(256);
    assert!(a.is_zero());
}

#[test]
fn ordering_starts_at_the_top_limb() {
    let low_heavy = BigInteger256::new([u64::MAX, u64::MAX, u64::MAX, 0]);
    let high_bit = BigInteger256::new([0, 0, 0, 1]);
    assert!(low_heavy < high_bit);
    assert_eq!(high_bit.num_bits(), 193);
}
