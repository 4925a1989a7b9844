use crate::{
    curves::{
        bls12::{Bls12Parameters, TwistType},
        models::SWModelParameters,
        short_weierstrass_jacobian::{GroupAffine, GroupJacobian},
    },
    error::Error,
    fields::{BitIteratorBE, Field, Fp2},
};
use ark_std::vec::Vec;
use num_traits::{One, Zero};

pub type G2Affine<P> = GroupAffine<<P as Bls12Parameters>::G2Parameters>;
pub type G2Projective<P> = GroupJacobian<<P as Bls12Parameters>::G2Parameters>;

pub(crate) type EllCoeff<F> = (F, F, F);

/// The line coefficients of the Miller loop for a fixed G2 point,
/// computed in homogeneous coordinates on the twist as in eprint 2013/722.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: Bls12Parameters"),
    Debug(bound = "P: Bls12Parameters"),
    PartialEq(bound = "P: Bls12Parameters"),
    Eq(bound = "P: Bls12Parameters")
)]
pub struct G2Prepared<P: Bls12Parameters> {
    pub ell_coeffs: Vec<EllCoeff<Fp2<P::Fp2Params>>>,
    pub infinity: bool,
}

/// The running multiple of the G2 input, in homogeneous coordinates.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Copy(bound = ""), Debug(bound = ""))]
struct TwistPoint<P: Bls12Parameters> {
    x: Fp2<P::Fp2Params>,
    y: Fp2<P::Fp2Params>,
    z: Fp2<P::Fp2Params>,
}

impl<P: Bls12Parameters> G2Prepared<P> {
    /// Walks the bits of `|x|` below the leading one, recording a doubling
    /// line per bit and an addition line per set bit.
    pub fn from_affine(q: G2Affine<P>) -> Result<Self, Error> {
        if q.is_zero() {
            return Ok(Self::default());
        }

        let half = P::Fp::one().double().inverse()?;
        let mut ell_coeffs = Vec::with_capacity(Self::coefficient_count());
        let mut r = TwistPoint::<P> {
            x: q.x,
            y: q.y,
            z: Fp2::one(),
        };

        for bit in BitIteratorBE::without_leading_zeros(P::X).skip(1) {
            ell_coeffs.push(r.double_with_line(&half));
            if bit {
                ell_coeffs.push(r.add_with_line(&q));
            }
        }

        Ok(Self {
            ell_coeffs,
            infinity: false,
        })
    }

    /// Number of line coefficients a prepared non-identity point carries.
    pub fn coefficient_count() -> usize {
        BitIteratorBE::without_leading_zeros(P::X)
            .skip(1)
            .map(|bit| 1 + bit as usize)
            .sum()
    }

    pub fn is_zero(&self) -> bool {
        self.infinity
    }
}

impl<P: Bls12Parameters> Default for G2Prepared<P> {
    fn default() -> Self {
        Self {
            ell_coeffs: Vec::new(),
            infinity: true,
        }
    }
}

/// Places the three line coefficients where the sparse multiplication for
/// the twist expects them: the constant term, the `x_P` term and the `y_P`
/// term.
fn arrange<P: Bls12Parameters, F>(constant: F, by_x: F, by_y: F) -> (F, F, F) {
    match P::TWIST_TYPE {
        TwistType::M => (constant, by_x, by_y),
        TwistType::D => (by_y, by_x, constant),
    }
}

impl<P: Bls12Parameters> TwistPoint<P> {
    /// `r <- 2r`, returning the tangent line at the old `r`.
    fn double_with_line(&mut self, half: &P::Fp) -> EllCoeff<Fp2<P::Fp2Params>> {
        let (x, y, z) = (self.x, self.y, self.z);
        let yy = y.square();
        let zz = z.square();
        let xx3 = x.square().double() + &x.square();
        let e = P::G2Parameters::COEFF_B * &(zz.double() + &zz);
        let e3 = e.double() + &e;
        let h = (y + &z).square() - &yy - &zz;

        let mut xy_half = x * &y;
        xy_half.mul_assign_by_fp(half);
        let mut g = yy + &e3;
        g.mul_assign_by_fp(half);
        let ee = e.square();

        self.x = xy_half * &(yy - &e3);
        self.y = g.square() - &(ee.double() + &ee);
        self.z = yy * &h;

        arrange::<P, _>(e - &yy, xx3, -h)
    }

    /// `r <- r + q`, returning the chord through the old `r` and `q`.
    fn add_with_line(&mut self, q: &G2Affine<P>) -> EllCoeff<Fp2<P::Fp2Params>> {
        let theta = self.y - &(q.y * &self.z);
        let lambda = self.x - &(q.x * &self.z);
        let tt = theta.square();
        let ll = lambda.square();
        let lll = lambda * &ll;
        let x_ll = self.x * &ll;
        let h = lll + &(self.z * &tt) - &x_ll.double();

        self.y = theta * &(x_ll - &h) - &(lll * &self.y);
        self.x = lambda * &h;
        self.z *= &lll;

        arrange::<P, _>(theta * &q.x - &(lambda * &q.y), -theta, lambda)
    }
}
