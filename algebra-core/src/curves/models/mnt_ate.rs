//! The flipped ate pairing shared by the MNT4 and MNT6 engines.
//!
//! `Q` is walked on the twist in extended Jacobian coordinates and every
//! step records the coefficients of its line, so that evaluating a line at
//! `P` needs only `P`'s coordinates scaled by the twist. Both target fields
//! are quadratic over the twist field, which is all the loop relies on.

use crate::{
    error::Error,
    fields::{BitIteratorBE, Field, QuadExtField, QuadExtParameters},
};
use ark_std::{slice, vec::Vec};
use num_traits::{One, Zero};

/// Coefficients of the tangent at `R` on the way to `2R`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AteDoubleCoefficients<F> {
    pub c_h: F,
    pub c_4c: F,
    pub c_j: F,
    pub c_l: F,
}

/// Coefficients of the chord through `R` and `Q`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AteAdditionCoefficients<F> {
    pub c_l1: F,
    pub c_rz: F,
}

/// A `G2` point together with the lines of its Miller loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AteG2Prepared<F> {
    pub x: F,
    pub y: F,
    pub x_over_twist: F,
    pub y_over_twist: F,
    pub double_coefficients: Vec<AteDoubleCoefficients<F>>,
    pub addition_coefficients: Vec<AteAdditionCoefficients<F>>,
    pub infinity: bool,
}

impl<F: Field> AteG2Prepared<F> {
    pub fn is_zero(&self) -> bool {
        self.infinity
    }

    /// Runs the loop over `q = (x, y)`, a non-identity point of the twist
    /// `y^2 = x^3 + twist_a * x + b'`.
    pub(crate) fn compute(
        x: F,
        y: F,
        twist: &F,
        twist_a: &F,
        loop_count: &[u64],
        loop_count_is_neg: bool,
    ) -> Result<Self, Error> {
        let twist_inv = twist.inverse()?;
        let mut r = ExtendedPoint::from_affine(x, y);
        let mut double_coefficients = Vec::new();
        let mut addition_coefficients = Vec::new();

        for bit in BitIteratorBE::without_leading_zeros(loop_count).skip(1) {
            double_coefficients.push(r.double_with_line(twist_a));
            if bit {
                addition_coefficients.push(r.add_with_line(&x, &y));
            }
        }
        if loop_count_is_neg {
            let (rx, ry) = r.to_affine()?;
            addition_coefficients.push(r.add_with_line(&rx, &-ry));
        }

        Ok(Self {
            x,
            y,
            x_over_twist: x * &twist_inv,
            y_over_twist: y * &twist_inv,
            double_coefficients,
            addition_coefficients,
            infinity: false,
        })
    }
}

impl<F: Field> Default for AteG2Prepared<F> {
    fn default() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
            x_over_twist: F::zero(),
            y_over_twist: F::zero(),
            double_coefficients: Vec::new(),
            addition_coefficients: Vec::new(),
            infinity: true,
        }
    }
}

/// `(x / z^2, y / z^3)` with `t = z^2` kept alongside.
#[derive(Clone, Copy, Debug)]
struct ExtendedPoint<F> {
    x: F,
    y: F,
    z: F,
    t: F,
}

impl<F: Field> ExtendedPoint<F> {
    fn from_affine(x: F, y: F) -> Self {
        Self {
            x,
            y,
            z: F::one(),
            t: F::one(),
        }
    }

    fn to_affine(&self) -> Result<(F, F), Error> {
        let z_inv = self.z.inverse()?;
        let z_inv2 = z_inv.square();
        Ok((self.x * &z_inv2, self.y * &(z_inv2 * &z_inv)))
    }

    fn double_with_line(&mut self, twist_a: &F) -> AteDoubleCoefficients<F> {
        let xx = self.x.square();
        let yy = self.y.square();
        let tt = self.t.square();
        let yyyy = yy.square();
        let s = (self.x + &yy).square() - &xx - &yyyy;
        let m = xx.double() + &xx + &(*twist_a * &tt);
        let mm = m.square();

        let x = mm - &s.double().double();
        let y = m * &(s.double() - &x) - &yyyy.double().double().double();
        let z = (self.y + &self.z).square() - &yy - &self.z.square();
        let t = z.square();

        let line = AteDoubleCoefficients {
            c_h: (z + &self.t).square() - &t - &tt,
            c_4c: yy.double().double(),
            c_j: (m + &self.t).square() - &mm - &tt,
            c_l: (m + &self.x).square() - &mm - &xx,
        };
        *self = Self { x, y, z, t };
        line
    }

    /// Mixed addition of the affine point `(qx, qy)`.
    fn add_with_line(&mut self, qx: &F, qy: &F) -> AteAdditionCoefficients<F> {
        let qyy = qy.square();
        let u = self.t * qx;
        let s = ((self.z + qy).square() - &qyy - &self.t) * &self.t;
        let h = u - &self.x;
        let hh = h.square();
        let i = hh.double().double();
        let j = h * &i;
        let v = self.x * &i;
        let r = s - &self.y.double();

        let x = r.square() - &j - &v.double();
        let y = r * &(v - &x) - &(j * &self.y).double();
        let z = (self.z + &h).square() - &self.t - &hh;
        let t = z.square();

        *self = Self { x, y, z, t };
        AteAdditionCoefficients { c_l1: r, c_rz: z }
    }
}

/// Line counts `(doublings, additions)` of a prepared non-identity point.
pub(crate) fn coefficient_counts(loop_count: &[u64], loop_count_is_neg: bool) -> (usize, usize) {
    let (doublings, additions) = BitIteratorBE::without_leading_zeros(loop_count)
        .skip(1)
        .fold((0, 0), |(d, a), bit| (d + 1, a + bit as usize));
    (doublings, additions + loop_count_is_neg as usize)
}

/// The twisted image of a `G1` point, as consumed by the line evaluations.
pub(crate) struct TwistedG1<'a, F> {
    pub x_twist: &'a F,
    pub y_twist: &'a F,
    /// `x` embedded in the twist field.
    pub x: F,
}

struct LineWalk<'a, F> {
    p: TwistedG1<'a, F>,
    l1: F,
    y_over_twist: &'a F,
    doubles: slice::Iter<'a, AteDoubleCoefficients<F>>,
    additions: slice::Iter<'a, AteAdditionCoefficients<F>>,
}

impl<'a, F: Field> LineWalk<'a, F> {
    fn tangent(&mut self) -> Option<(F, F)> {
        let c = self.doubles.next()?;
        Some((c.c_l - &c.c_4c - &(c.c_j * self.p.x_twist), c.c_h * self.p.y_twist))
    }

    fn chord(&mut self) -> Option<(F, F)> {
        let c = self.additions.next()?;
        Some((
            c.c_rz * self.p.y_twist,
            -(*self.y_over_twist * &c.c_rz + &(self.l1 * &c.c_l1)),
        ))
    }
}

fn absorb<'a, Q, L>(f: &mut QuadExtField<Q>, walks: &mut [LineWalk<'a, Q::BaseField>], line: L)
where
    Q: QuadExtParameters,
    L: Fn(&mut LineWalk<'a, Q::BaseField>) -> Option<(Q::BaseField, Q::BaseField)>,
{
    for walk in walks.iter_mut() {
        if let Some((c0, c1)) = line(walk) {
            *f *= &QuadExtField::new(c0, c1);
        }
    }
}

/// The product of the flipped Miller loops of all pairs. Pairs with an
/// identity on either side are skipped; a non-identity `q` whose line
/// counts do not match the loop count is rejected.
pub(crate) fn multi_miller_loop<'a, Q, I>(
    pairs: I,
    loop_count: &[u64],
    loop_count_is_neg: bool,
) -> Result<QuadExtField<Q>, Error>
where
    Q: QuadExtParameters,
    Q::BaseField: 'a,
    I: IntoIterator<Item = (Option<TwistedG1<'a, Q::BaseField>>, &'a AteG2Prepared<Q::BaseField>)>,
{
    let (doublings, additions) = coefficient_counts(loop_count, loop_count_is_neg);
    let mut walks = Vec::new();
    for (p, q) in pairs {
        if q.is_zero() {
            continue;
        }
        if q.double_coefficients.len() != doublings || q.addition_coefficients.len() != additions {
            return Err(Error::InvalidPrecomputation {
                expected: doublings + additions,
                found: q.double_coefficients.len() + q.addition_coefficients.len(),
            });
        }
        if let Some(p) = p {
            walks.push(LineWalk {
                l1: p.x - &q.x_over_twist,
                p,
                y_over_twist: &q.y_over_twist,
                doubles: q.double_coefficients.iter(),
                additions: q.addition_coefficients.iter(),
            });
        }
    }

    let mut f = QuadExtField::<Q>::one();
    for bit in BitIteratorBE::without_leading_zeros(loop_count).skip(1) {
        f.square_in_place();
        absorb(&mut f, &mut walks, LineWalk::tangent);
        if bit {
            absorb(&mut f, &mut walks, LineWalk::chord);
        }
    }
    if loop_count_is_neg {
        absorb(&mut f, &mut walks, LineWalk::chord);
        f = f.inverse()?;
    }
    Ok(f)
}

/// Raises an element of the cyclotomic subgroup to `m_1 * q + m_0`, where
/// `m_0 = ±|w0|`. `elt_inv` must be the inverse of `elt`.
pub(crate) fn final_exponentiation_hard_part<Q: QuadExtParameters>(
    elt: &QuadExtField<Q>,
    elt_inv: &QuadExtField<Q>,
    m_1: &[u64],
    abs_w0: &[u64],
    w0_is_neg: bool,
) -> QuadExtField<Q> {
    let mut elt_q = *elt;
    elt_q.frobenius_map(1);
    let w0_base = if w0_is_neg { elt_inv } else { elt };
    elt_q.cyclotomic_exp(m_1) * &w0_base.cyclotomic_exp(abs_w0)
}
