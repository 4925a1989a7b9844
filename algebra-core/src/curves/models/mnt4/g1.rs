use crate::{
    curves::{
        mnt4::MNT4Parameters,
        short_weierstrass_jacobian::{GroupAffine, GroupJacobian},
    },
    fields::Fp2,
};
use num_traits::Zero;

pub type G1Affine<P> = GroupAffine<<P as MNT4Parameters>::G1Parameters>;
pub type G1Projective<P> = GroupJacobian<<P as MNT4Parameters>::G1Parameters>;

/// `P` with both coordinates scaled by the twist.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: MNT4Parameters"),
    Clone(bound = "P: MNT4Parameters"),
    Debug(bound = "P: MNT4Parameters"),
    PartialEq(bound = "P: MNT4Parameters"),
    Eq(bound = "P: MNT4Parameters")
)]
pub struct G1Prepared<P: MNT4Parameters> {
    pub p: G1Affine<P>,
    pub x_twist: Fp2<P::Fp2Params>,
    pub y_twist: Fp2<P::Fp2Params>,
}

impl<P: MNT4Parameters> G1Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.p.is_zero()
    }
}

impl<P: MNT4Parameters> From<G1Affine<P>> for G1Prepared<P> {
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

impl<P: MNT4Parameters> Default for G1Prepared<P> {
    fn default() -> Self {
        Self::from(G1Affine::<P>::zero())
    }
}
