use crate::{
    curves::{
        encoding::{decode_coordinates, encode_coordinates, PointEncoding, PointFormat},
        models::{short_weierstrass_projective::GroupProjective, SWModelParameters as Parameters},
        AffineCurve, ProjectiveCurve,
    },
    error::Error,
    fields::{batch_inversion, BitIteratorBE, Field, FpParameters, PrimeField, SquareRootField},
};
use ark_std::{
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, SubAssign},
    rand::{
        distributions::{Distribution, Standard},
        Rng,
    },
    vec::Vec,
    UniformRand,
};
use num_traits::{One, Zero};

/// Jacobian coordinates: `(X, Y, Z)` is the affine point `(X / Z^2, Y / Z^3)`
/// and any `Z = 0` is the identity.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: Parameters"),
    Clone(bound = "P: Parameters"),
    Debug(bound = "P: Parameters")
)]
pub struct GroupJacobian<P: Parameters> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
    _params: PhantomData<P>,
}

sw_point_model!(GroupJacobian);

impl<P: Parameters> GroupJacobian<P> {
    pub fn new(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        GroupJacobian {
            x,
            y,
            z,
            _params: PhantomData,
        }
    }

    fn z_powers(z: &P::BaseField) -> (P::BaseField, P::BaseField) {
        let z2 = z.square();
        (z2, z2 * z)
    }

    fn double_nonzero(&mut self) {
        let (x, y, z) = (self.x, self.y, self.z);
        if P::COEFF_A.is_zero() {
            // EFD dbl-2009-l.
            let xx = x.square();
            let yy = y.square();
            let yyyy = yy.square();
            let d = ((x + &yy).square() - &xx - &yyyy).double();
            let e = xx.double() + &xx;
            self.x = e.square() - &d.double();
            self.y = e * &(d - &self.x) - &yyyy.double().double().double();
            self.z = (y * &z).double();
        } else {
            // EFD dbl-2007-bl.
            let xx = x.square();
            let yy = y.square();
            let yyyy = yy.square();
            let zz = z.square();
            let s = ((x + &yy).square() - &xx - &yyyy).double();
            let m = xx.double() + &xx + &P::mul_by_a(&zz.square());
            let t = m.square() - &s.double();
            self.x = t;
            self.y = m * &(s - &t) - &yyyy.double().double().double();
            self.z = (y + &z).square() - &yy - &zz;
        }
    }

    /// EFD madd-2007-bl; both inputs non-zero.
    fn add_mixed_nonzero(&mut self, other: &GroupAffine<P>) {
        let z1z1 = self.z.square();
        let u2 = other.x * &z1z1;
        let s2 = other.y * &self.z * &z1z1;

        if u2 == self.x {
            if s2 == self.y {
                self.double_nonzero();
            } else {
                *self = Self::zero();
            }
            return;
        }

        let h = u2 - &self.x;
        let hh = h.square();
        let i = hh.double().double();
        let j = h * &i;
        let r = (s2 - &self.y).double();
        let v = self.x * &i;
        let x3 = r.square() - &j - &v.double();
        self.y = r * &(v - &x3) - &(self.y * &j).double();
        self.x = x3;
        self.z = (self.z + &h).square() - &z1z1 - &hh;
    }
}

impl<P: Parameters> Zero for GroupJacobian<P> {
    fn zero() -> Self {
        Self::new(P::BaseField::one(), P::BaseField::one(), P::BaseField::zero())
    }

    fn is_zero(&self) -> bool {
        self.z.is_zero()
    }
}

impl<'a, P: Parameters> AddAssign<&'a Self> for GroupJacobian<P> {
    /// EFD add-2007-bl.
    fn add_assign(&mut self, other: &'a Self) {
        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = *other;
            return;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * &z2z2;
        let u2 = other.x * &z1z1;
        let s1 = self.y * &other.z * &z2z2;
        let s2 = other.y * &self.z * &z1z1;

        if u1 == u2 {
            if s1 == s2 {
                self.double_nonzero();
            } else {
                *self = Self::zero();
            }
            return;
        }

        let h = u2 - &u1;
        let i = h.double().square();
        let j = h * &i;
        let r = (s2 - &s1).double();
        let v = u1 * &i;
        self.x = r.square() - &j - &v.double();
        self.y = r * &(v - &self.x) - &(s1 * &j).double();
        self.z = ((self.z + &other.z).square() - &z1z1 - &z2z2) * &h;
    }
}

impl<P: Parameters> From<GroupJacobian<P>> for GroupProjective<P> {
    /// `(X, Y, Z)` becomes `(X Z, Y, Z^3)`.
    fn from(p: GroupJacobian<P>) -> Self {
        if p.is_zero() {
            return Self::zero();
        }
        Self::new(p.x * &p.z, p.y, p.z.square() * &p.z)
    }
}

impl<P: Parameters> From<GroupProjective<P>> for GroupJacobian<P> {
    /// `(X, Y, Z)` becomes `(X Z, Y Z^2, Z)`.
    fn from(p: GroupProjective<P>) -> Self {
        if p.is_zero() {
            return Self::zero();
        }
        Self::new(p.x * &p.z, p.y * &p.z.square(), p.z)
    }
}
