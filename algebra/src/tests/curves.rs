use crate::{
    curves::{
        models::{short_weierstrass_jacobian, short_weierstrass_projective, SWModelParameters},
        AffineCurve, ProjectiveCurve,
    },
    fields::{Field, FpParameters, PrimeField},
    One, UniformRand, Zero,
};
use ark_std::{rand::Rng, test_rng, vec::Vec};

pub const ITERATIONS: usize = 10;

/// Identity, inverses, commutativity and associativity, with every
/// combination of full and mixed additions giving the same sum.
fn group_law_tests<G: ProjectiveCurve>() {
    let mut rng = test_rng();
    let zero = G::zero();

    assert!((-zero).is_zero());
    assert!(zero.double().is_zero());
    assert!((zero + &zero).is_zero());
    assert!(zero.add_mixed(&G::Affine::zero()).is_zero());

    for _ in 0..ITERATIONS {
        let [a, b, c] = [(); 3].map(|_| G::rand(&mut rng));
        let [a_aff, b_aff, c_aff] = [a, b, c].map(|p| p.into_affine());

        assert_eq!(a + &zero, a);
        assert_eq!(zero + &a, a);
        assert_eq!(a.add_mixed(&G::Affine::zero()), a);
        assert_eq!(zero.add_mixed(&a_aff), a);
        assert!((a - &a).is_zero());
        assert!(a.add_mixed(&(-a_aff)).is_zero());
        assert_eq!((-a_aff).into_projective(), -a);
        assert_eq!(a + &b - &b, a);
        assert_eq!(a + &b, b + &a);

        let doubled = a.double();
        assert_eq!(a + &a, doubled);
        assert_eq!(a.add_mixed(&a_aff), doubled);
        let mut in_place = a;
        in_place.double_in_place();
        assert_eq!(in_place, doubled);
        assert_eq!((a + &b).double(), doubled + &b.double());

        let sums = [
            (a + &b) + &c,
            a + &(b + &c),
            (a + &c) + &b,
            a_aff.into_projective().add_mixed(&b_aff).add_mixed(&c_aff),
            b_aff.into_projective().add_mixed(&c_aff).add_mixed(&a_aff),
        ];
        for sum in &sums {
            assert_eq!(*sum, sums[0]);
            assert_eq!(sum.into_affine(), sums[0].into_affine());
        }
        assert_ne!(sums[0], a);
    }
}

fn scalar_tests<G: ProjectiveCurve>() {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let (a, b) = (G::rand(&mut rng), G::rand(&mut rng));
        let s = G::ScalarField::rand(&mut rng);

        let expected = a * s + &(b * s);
        assert_eq!((a + &b) * s, expected);
        assert_eq!(
            a.into_affine().mul_bigint(s.into_repr()) + &b.into_affine().mul_bigint(s.into_repr()),
            expected
        );

        let mut scaled = a;
        scaled *= s;
        assert!((scaled + &(a * -s)).is_zero());
        assert_eq!(-scaled, a * -s);
    }

    let a = G::rand(&mut rng);
    assert!(a.mul_bigint([0u64]).is_zero());
    assert_eq!(a.mul_bigint([1u64]), a);
    assert_eq!(a.mul_bigint([3u64]), a + &a + &a);
    assert_eq!(a.into_affine().mul_bigint([5u64]), a.double().double() + &a);
    assert!(a
        .mul_bigint(<G::ScalarField as PrimeField>::Params::MODULUS)
        .is_zero());
    assert!((a * G::ScalarField::zero()).is_zero());
    assert_eq!(a * G::ScalarField::one(), a);
}

fn normalization_tests<G: ProjectiveCurve>() {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let a = G::rand(&mut rng);
        assert_eq!(a.into_affine().into_projective(), a);
    }
    assert!(G::zero().into_affine().is_zero());
    assert!(G::Affine::zero().into_projective().is_zero());

    // A mix of identities, normalized and scaled points.
    let mut points = (0..ITERATIONS)
        .map(|i| match rng.gen_range(0..3) {
            0 => G::zero(),
            1 => G::rand(&mut rng).into_affine().into_projective(),
            _ if i % 2 == 0 => G::rand(&mut rng).double(),
            _ => G::rand(&mut rng),
        })
        .collect::<Vec<_>>();
    let expected = points
        .iter()
        .map(|p| p.into_affine().into_projective())
        .collect::<Vec<_>>();

    G::batch_normalization(&mut points);
    assert!(points.iter().all(|p| p.is_normalized()));
    assert_eq!(points, expected);
    assert_eq!(
        G::batch_normalization_into_affine(&points),
        expected.iter().map(|p| p.into_affine()).collect::<Vec<_>>()
    );

    let mut by_hand = G::zero();
    for p in &points {
        by_hand += p;
    }
    assert_eq!(points.iter().sum::<G>(), by_hand);
    assert_eq!(points.into_iter().sum::<G>(), by_hand);
}

pub fn curve_tests<G: ProjectiveCurve>() {
    let g = G::prime_subgroup_generator();
    assert!(!g.is_zero());
    assert_eq!(g.into_affine(), G::Affine::prime_subgroup_generator());

    group_law_tests::<G>();
    scalar_tests::<G>();
    normalization_tests::<G>();
}

/// Curve membership, lifting of `x`, the cofactor and the agreement of the
/// Jacobian and homogeneous coordinate systems.
pub fn sw_tests<P: SWModelParameters>() {
    use short_weierstrass_jacobian::{GroupAffine, GroupJacobian};
    use short_weierstrass_projective::GroupProjective;

    let mut rng = test_rng();

    let generator = GroupAffine::<P>::prime_subgroup_generator();
    assert!(generator.is_on_curve());
    assert!(generator.is_in_correct_subgroup_assuming_on_curve());
    assert!(GroupAffine::<P>::zero().is_on_curve());
    let off_curve = GroupAffine::<P>::new(generator.x, generator.y + &P::BaseField::one(), false);
    assert!(!off_curve.is_on_curve());

    let mut lifted = 0;
    while lifted < ITERATIONS {
        let x = P::BaseField::rand(&mut rng);
        match (
            GroupAffine::<P>::get_point_from_x(x, true),
            GroupAffine::<P>::get_point_from_x(x, false),
        ) {
            (Some(hi), Some(lo)) => {
                assert!(hi.is_on_curve() && lo.is_on_curve());
                assert!(hi.y.sgn0());
                assert_eq!(hi, -lo);

                let cleared = GroupAffine::<P>::from(hi.scale_by_cofactor());
                assert!(cleared.is_in_correct_subgroup_assuming_on_curve());
                assert_eq!(cleared, hi.mul_by_cofactor());
                lifted += 1;
            },
            (None, None) => {},
            _ => panic!("x lifted with only one sign"),
        }
    }

    for _ in 0..ITERATIONS {
        let jac = GroupJacobian::<P>::rand(&mut rng);
        let affine = jac.into_affine();
        assert_eq!(GroupJacobian::<P>::from(affine), jac);

        let hom = GroupProjective::<P>::from(jac);
        assert_eq!(GroupJacobian::<P>::from(hom), jac);
        assert_eq!(GroupProjective::<P>::from(jac.double()), hom.double());

        let hom_affine = hom.into_affine();
        assert_eq!((hom_affine.x, hom_affine.y), (affine.x, affine.y));
        assert_eq!(GroupProjective::<P>::from(hom_affine), hom);
    }
    assert!(GroupProjective::<P>::from(GroupJacobian::<P>::zero()).is_zero());
    assert!(GroupJacobian::<P>::from(GroupProjective::<P>::zero()).is_zero());

    curve_tests::<GroupProjective<P>>();
}
