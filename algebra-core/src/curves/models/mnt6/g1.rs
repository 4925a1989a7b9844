use crate::{
    curves::{
        mnt6::MNT6Parameters,
        short_weierstrass_jacobian::{GroupAffine, GroupJacobian},
    },
    fields::Fp3,
};
use num_traits::Zero;

pub type G1Affine<P> = GroupAffine<<P as MNT6Parameters>::G1Parameters>;
pub type G1Projective<P> = GroupJacobian<<P as MNT6Parameters>::G1Parameters>;

/// `P` with both coordinates scaled by the twist.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: MNT6Parameters"),
    Clone(bound = "P: MNT6Parameters"),
    Debug(bound = "P: MNT6Parameters"),
    PartialEq(bound = "P: MNT6Parameters"),
    Eq(bound = "P: MNT6Parameters")
)]
pub struct G1Prepared<P: MNT6Parameters> {
    pub p: G1Affine<P>,
    pub x_twist: Fp3<P::Fp3Params>,
    pub y_twist: Fp3<P::Fp3Params>,
}

impl<P: MNT6Parameters> G1Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.p.is_zero()
    }
}

impl<P: MNT6Parameters> From<G1Affine<P>> for G1Prepared<P> {
    fn from(p: G1Affine<P>) -> Self {
        let scaled = |c: &P::Fp| {
            let mut t = P::TWIST;
            t.mul_assign_by_fp(c);
            t
        };
        G1Prepared {
            x_twist: scaled(&p.x),
            y_twist: scaled(&p.y),
            p,
        }
    }
}

impl<P: MNT6Parameters> Default for G1Prepared<P> {
    fn default() -> Self {
        Self::from(G1Affine::<P>::zero())
    }
}
