use core::fmt;

/// This is an error that could occur during field, group or pairing arithmetic.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Error {
    /// We tried to invert zero.
    NonInvertible,
    /// The decoded coordinates do not satisfy the curve equation.
    PointNotOnCurve,
    /// The decoded point lies on the curve but outside the prime-order subgroup.
    PointNotInSubgroup,
    /// The bytes are malformed: wrong length, non-canonical coordinate, or an
    /// x-coordinate with no matching y.
    DecodingError,
    /// A G2 precomputation carries a different number of line coefficients
    /// than the loop count requires.
    InvalidPrecomputation { expected: usize, found: usize },
    /// The arguments are inconsistent with each other.
    InvalidArgument(&'static str),
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::NonInvertible => write!(f, "element is not invertible"),
            Error::PointNotOnCurve => write!(f, "point is not on the curve"),
            Error::PointNotInSubgroup => write!(f, "point is not in the prime-order subgroup"),
            Error::DecodingError => write!(f, "malformed encoding"),
            Error::InvalidPrecomputation { expected, found } => write!(
                f,
                "precomputation has {} line coefficients, expected {}",
                found, expected
            ),
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::string::ToString;

    #[test]
    fn display_mentions_counts() {
        let e = Error::InvalidPrecomputation {
            expected: 68,
            found: 67,
        };
        assert_eq!(
            e.to_string(),
            "precomputation has 67 line coefficients, expected 68"
        );
        assert_eq!(
            Error::InvalidArgument("length mismatch").to_string(),
            "invalid argument: length mismatch"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn boxes_as_std_error() {
        fn fails() -> Result<(), Box<dyn std::error::Error>> {
            Err(Error::NonInvertible)?
        }
        let e = fails().unwrap_err();
        assert_eq!(e.to_string(), "element is not invertible");
        assert_eq!(e.downcast_ref::<Error>(), Some(&Error::NonInvertible));
    }
}
