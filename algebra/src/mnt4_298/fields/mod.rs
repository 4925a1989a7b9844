pub mod fr;
pub use self::fr::*;

pub mod fq;
pub use self::fq::*;

#[cfg(feature = "mnt4_298")]
pub mod fq2;
#[cfg(feature = "mnt4_298")]
pub use self::fq2::*;

#[cfg(feature = "mnt4_298")]
pub mod fq4;
#[cfg(feature = "mnt4_298")]
pub use self::fq4::*;
