use crate::{
    curves::{
        encoding::{decode_coordinates, encode_coordinates, PointEncoding, PointFormat},
        models::SWModelParameters as Parameters,
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

/// Homogeneous coordinates: `(X, Y, Z)` is the affine point `(X / Z, Y / Z)`
/// and any `Z = 0` is the identity.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: Parameters"),
    Clone(bound = "P: Parameters"),
    Debug(bound = "P: Parameters")
)]
pub struct GroupProjective<P: Parameters> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
    _params: PhantomData<P>,
}

sw_point_model!(GroupProjective);

impl<P: Parameters> GroupProjective<P> {
    pub fn new(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        GroupProjective {
            x,
            y,
            z,
            _params: PhantomData,
        }
    }

    fn z_powers(z: &P::BaseField) -> (P::BaseField, P::BaseField) {
        (*z, *z)
    }

    /// EFD dbl-2007-bl.
    fn double_nonzero(&mut self) {
        let xx = self.x.square();
        let w = P::mul_by_a(&self.z.square()) + &xx.double() + &xx;
        let s = (self.y * &self.z).double();
        let r = self.y * &s;
        let rr = r.square();
        let b = (self.x + &r).square() - &xx - &rr;
        let h = w.square() - &b.double();

        self.x = h * &s;
        self.y = w * &(b - &h) - &rr.double();
        self.z = s.square() * &s;
    }

    /// EFD madd-1998-cmo; both inputs non-zero.
    fn add_mixed_nonzero(&mut self, other: &GroupAffine<P>) {
        let u = other.y * &self.z - &self.y;
        let v = other.x * &self.z - &self.x;

        if v.is_zero() {
            if u.is_zero() {
                self.double_nonzero();
            } else {
                *self = Self::zero();
            }
            return;
        }

        let vv = v.square();
        let vvv = v * &vv;
        let r = vv * &self.x;
        let a = u.square() * &self.z - &vvv - &r.double();

        self.y = u * &(r - &a) - &(vvv * &self.y);
        self.x = v * &a;
        self.z *= &vvv;
    }
}

impl<P: Parameters> Zero for GroupProjective<P> {
    fn zero() -> Self {
        Self::new(P::BaseField::zero(), P::BaseField::one(), P::BaseField::zero())
    }

    fn is_zero(&self) -> bool {
        self.z.is_zero()
    }
}

impl<'a, P: Parameters> AddAssign<&'a Self> for GroupProjective<P> {
    /// EFD add-1998-cmo-2.
    fn add_assign(&mut self, other: &'a Self) {
        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = *other;
            return;
        }

        let y1z2 = self.y * &other.z;
        let x1z2 = self.x * &other.z;
        let u = other.y * &self.z - &y1z2;
        let v = other.x * &self.z - &x1z2;

        if v.is_zero() {
            if u.is_zero() {
                self.double_nonzero();
            } else {
                *self = Self::zero();
            }
            return;
        }

        let z1z2 = self.z * &other.z;
        let vv = v.square();
        let vvv = v * &vv;
        let r = vv * &x1z2;
        let a = u.square() * &z1z2 - &vvv - &r.double();

        self.x = v * &a;
        self.y = u * &(r - &a) - &(vvv * &y1z2);
        self.z = vvv * &z1z2;
    }
}
