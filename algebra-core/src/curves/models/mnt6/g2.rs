use crate::{
    curves::{
        mnt6::MNT6Parameters,
        mnt_ate::AteG2Prepared,
        short_weierstrass_jacobian::{GroupAffine, GroupJacobian},
    },
    fields::Fp3,
};

pub type G2Affine<P> = GroupAffine<<P as MNT6Parameters>::G2Parameters>;
pub type G2Projective<P> = GroupJacobian<<P as MNT6Parameters>::G2Parameters>;
pub type G2Prepared<P> = AteG2Prepared<Fp3<<P as MNT6Parameters>::Fp3Params>>;
