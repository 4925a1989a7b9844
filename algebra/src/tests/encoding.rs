use crate::{
    curves::{
        models::{
            short_weierstrass_jacobian::{GroupAffine, GroupJacobian},
            SWModelParameters,
        },
        PointEncoding, PointFormat, ProjectiveCurve,
    },
    error::Error,
    fields::{Endianness, Field},
    One, UniformRand, Zero,
};
use ark_std::{test_rng, vec, vec::Vec};

const FORMATS: [PointFormat; 3] = [
    PointFormat::Compressed,
    PointFormat::Uncompressed,
    PointFormat::Hybrid,
];

fn uncompressed<P: SWModelParameters>(tag: u8, x: &P::BaseField, y: &P::BaseField) -> Vec<u8> {
    let mut bytes = vec![tag];
    x.write_bytes(Endianness::Big, &mut bytes);
    y.write_bytes(Endianness::Big, &mut bytes);
    bytes
}

fn has_unit_cofactor<P: SWModelParameters>() -> bool {
    P::COFACTOR[0] == 1 && P::COFACTOR[1..].iter().all(|&limb| limb == 0)
}

pub fn encoding_test<P: SWModelParameters>() {
    let mut rng = test_rng();
    let size = P::BaseField::encoded_size();

    for _ in 0..100 {
        let p = GroupJacobian::<P>::rand(&mut rng).into_affine();
        for format in FORMATS {
            let bytes = p.encode(format);
            let expected_len = match format {
                PointFormat::Compressed => 1 + size,
                _ => 1 + 2 * size,
            };
            assert_eq!(bytes.len(), expected_len);
            assert_eq!(GroupAffine::<P>::decode(&bytes), Ok(p));
        }

        // The sign bit in the tag follows sgn0(y).
        let tag = p.encode(PointFormat::Compressed)[0];
        assert_eq!(tag, 0x02 | p.y.sgn0() as u8);
        assert_eq!((-p).encode(PointFormat::Compressed)[0], tag ^ 1);
        assert_eq!(p.encode(PointFormat::Uncompressed)[0], 0x04);
        assert_eq!(p.encode(PointFormat::Hybrid)[0], 0x06 | p.y.sgn0() as u8);
    }

    // The identity is a single zero byte in every format.
    let zero = GroupAffine::<P>::zero();
    for format in FORMATS {
        assert_eq!(zero.encode(format), vec![0x00]);
    }
    assert_eq!(GroupAffine::<P>::decode(&[0x00]), Ok(zero));

    decoding_error_test::<P>();
}

fn decoding_error_test<P: SWModelParameters>() {
    let mut rng = test_rng();
    let size = P::BaseField::encoded_size();
    let p = GroupJacobian::<P>::rand(&mut rng).into_affine();

    assert_eq!(GroupAffine::<P>::decode(&[]), Err(Error::DecodingError));
    assert_eq!(GroupAffine::<P>::decode(&[0x00, 0x00]), Err(Error::DecodingError));
    for tag in [0x01u8, 0x05, 0x08, 0xff] {
        let mut bytes = p.encode(PointFormat::Uncompressed);
        bytes[0] = tag;
        assert_eq!(
            GroupAffine::<P>::decode(&bytes),
            Err(Error::InvalidArgument("unknown point encoding tag"))
        );
    }

    // Truncated and overlong bodies.
    for format in FORMATS {
        let bytes = p.encode(format);
        assert_eq!(
            GroupAffine::<P>::decode(&bytes[..bytes.len() - 1]),
            Err(Error::DecodingError)
        );
        let mut longer = bytes.clone();
        longer.push(0);
        assert_eq!(GroupAffine::<P>::decode(&longer), Err(Error::DecodingError));
    }

    // A coordinate that is not reduced.
    let mut bytes = vec![0x02];
    bytes.extend(vec![0xffu8; size]);
    assert_eq!(GroupAffine::<P>::decode(&bytes), Err(Error::DecodingError));
    let mut bytes = vec![0x04];
    bytes.extend(vec![0xffu8; 2 * size]);
    assert_eq!(GroupAffine::<P>::decode(&bytes), Err(Error::DecodingError));

    // An x with no point above it.
    loop {
        let x = P::BaseField::rand(&mut rng);
        if GroupAffine::<P>::get_point_from_x(x, false).is_none() {
            let mut bytes = vec![0x02];
            x.write_bytes(Endianness::Big, &mut bytes);
            assert_eq!(GroupAffine::<P>::decode(&bytes), Err(Error::DecodingError));
            break;
        }
    }

    // Coordinates off the curve, and a hybrid tag whose sign disagrees with y.
    let off_curve = uncompressed::<P>(0x04, &p.x, &(p.y + &P::BaseField::one()));
    assert_eq!(GroupAffine::<P>::decode(&off_curve), Err(Error::PointNotOnCurve));
    let wrong_sign = uncompressed::<P>(0x06 | !p.y.sgn0() as u8, &p.x, &p.y);
    assert_eq!(GroupAffine::<P>::decode(&wrong_sign), Err(Error::PointNotOnCurve));

    // A point of the full curve group outside the prime-order subgroup.
    if !has_unit_cofactor::<P>() {
        loop {
            let x = P::BaseField::rand(&mut rng);
            if let Some(q) = GroupAffine::<P>::get_point_from_x(x, true) {
                if q.is_in_correct_subgroup_assuming_on_curve() {
                    continue;
                }
                for format in FORMATS {
                    assert_eq!(
                        GroupAffine::<P>::decode(&q.encode(format)),
                        Err(Error::PointNotInSubgroup)
                    );
                }
                break;
            }
        }
    }
}
