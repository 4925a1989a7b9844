use crate::{
    curves::{
        mnt4::MNT4Parameters,
        mnt_ate::AteG2Prepared,
        short_weierstrass_jacobian::{GroupAffine, GroupJacobian},
    },
    fields::Fp2,
};

pub type G2Affine<P> = GroupAffine<<P as MNT4Parameters>::G2Parameters>;
pub type G2Projective<P> = GroupJacobian<<P as MNT4Parameters>::G2Parameters>;
pub type G2Prepared<P> = AteG2Prepared<Fp2<<P as MNT4Parameters>::Fp2Params>>;
