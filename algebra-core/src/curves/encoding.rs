//! SEC1-style point encodings with big-endian coordinates:
//!
//! - `0x00`: the identity, a single byte;
//! - `0x02 + sgn0(y)` followed by `x`;
//! - `0x04` followed by `x` and `y`;
//! - `0x06 + sgn0(y)` followed by `x` and `y`.

use crate::{
    curves::models::SWModelParameters,
    error::Error,
    fields::{Endianness, Field, SquareRootField},
};
use ark_std::vec::Vec;

pub const TAG_IDENTITY: u8 = 0x00;
pub const TAG_COMPRESSED: u8 = 0x02;
pub const TAG_UNCOMPRESSED: u8 = 0x04;
pub const TAG_HYBRID: u8 = 0x06;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointFormat {
    /// `x` and the sign of `y`.
    Compressed,
    /// `x` and `y`.
    Uncompressed,
    /// `x`, `y`, and the sign of `y` folded into the tag.
    Hybrid,
}

/// Conversion of curve points to and from their SEC1-style byte strings.
pub trait PointEncoding: Sized {
    fn encode(&self, format: PointFormat) -> Vec<u8>;

    /// Parses any of the formats, dispatching on the tag byte. The result is
    /// checked to lie on the curve and in the prime-order subgroup.
    fn decode(bytes: &[u8]) -> Result<Self, Error>;
}

/// Encodes the affine coordinates of a point, `None` being the identity.
pub(crate) fn encode_coordinates<F: Field>(xy: Option<(&F, &F)>, format: PointFormat) -> Vec<u8> {
    let (x, y) = match xy {
        None => return vec![TAG_IDENTITY],
        Some(xy) => xy,
    };
    let sign = y.sgn0() as u8;
    let mut out = Vec::with_capacity(1 + 2 * F::encoded_size());
    match format {
        PointFormat::Compressed => {
            out.push(TAG_COMPRESSED | sign);
            x.write_bytes(Endianness::Big, &mut out);
        },
        PointFormat::Uncompressed => {
            out.push(TAG_UNCOMPRESSED);
            x.write_bytes(Endianness::Big, &mut out);
            y.write_bytes(Endianness::Big, &mut out);
        },
        PointFormat::Hybrid => {
            out.push(TAG_HYBRID | sign);
            x.write_bytes(Endianness::Big, &mut out);
            y.write_bytes(Endianness::Big, &mut out);
        },
    }
    out
}

/// Decodes the affine coordinates of a point on the curve of `P`, `None`
/// being the identity. Subgroup membership is left to the caller.
pub(crate) fn decode_coordinates<P: SWModelParameters>(
    bytes: &[u8],
) -> Result<Option<(P::BaseField, P::BaseField)>, Error> {
    let (&tag, body) = bytes.split_first().ok_or(Error::DecodingError)?;
    let size = P::BaseField::encoded_size();

    match tag {
        TAG_IDENTITY => {
            if body.is_empty() {
                Ok(None)
            } else {
                Err(Error::DecodingError)
            }
        },
        0x02 | 0x03 => {
            if body.len() != size {
                return Err(Error::DecodingError);
            }
            let x = P::BaseField::from_bytes(body, Endianness::Big)?;
            let mut y = rhs::<P>(&x).sqrt().ok_or(Error::DecodingError)?;
            if y.sgn0() != (tag & 1 == 1) {
                y = -y;
            }
            Ok(Some((x, y)))
        },
        0x04 | 0x06 | 0x07 => {
            if body.len() != 2 * size {
                return Err(Error::DecodingError);
            }
            let x = P::BaseField::from_bytes(&body[..size], Endianness::Big)?;
            let y = P::BaseField::from_bytes(&body[size..], Endianness::Big)?;
            if y.square() != rhs::<P>(&x) {
                return Err(Error::PointNotOnCurve);
            }
            if tag != TAG_UNCOMPRESSED && y.sgn0() != (tag & 1 == 1) {
                return Err(Error::PointNotOnCurve);
            }
            Ok(Some((x, y)))
        },
        _ => Err(Error::InvalidArgument("unknown point encoding tag")),
    }
}

/// `x^3 + a * x + b`
#[inline]
fn rhs<P: SWModelParameters>(x: &P::BaseField) -> P::BaseField {
    P::add_b(&((x.square() * x) + &P::mul_by_a(x)))
}

