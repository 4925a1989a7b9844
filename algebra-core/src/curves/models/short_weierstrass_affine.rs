// Everything a short Weierstrass point type shares with its sibling
// representations: the affine type itself, equality up to scaling,
// conversions, scalar multiplication and sampling. The invoking module
// defines the group struct with `x`, `y`, `z` coordinates, its `new`,
// `zero` and addition formulas, plus
// `fn z_powers(z: &F) -> (F, F)`, the factors by which `Z` scales the
// `x` and `y` coordinates.
macro_rules! sw_point_model {
    ($Group:ident) => {
        /// An affine point; the identity is flagged by `infinity` and its
        /// coordinates carry no meaning.
        #[derive(Derivative)]
        #[derivative(
            Copy(bound = "P: Parameters"),
            Clone(bound = "P: Parameters"),
            Debug(bound = "P: Parameters")
        )]
        pub struct GroupAffine<P: Parameters> {
            pub x: P::BaseField,
            pub y: P::BaseField,
            pub infinity: bool,
            #[derivative(Debug = "ignore")]
            _params: PhantomData<P>,
        }

        impl<P: Parameters> GroupAffine<P> {
            pub fn new(x: P::BaseField, y: P::BaseField, infinity: bool) -> Self {
                GroupAffine {
                    x,
                    y,
                    infinity,
                    _params: PhantomData,
                }
            }

            /// The curve equation's right-hand side, `x^3 + a x + b`.
            fn rhs(x: &P::BaseField) -> P::BaseField {
                P::add_b(&(x.square() * x + &P::mul_by_a(x)))
            }

            /// Lifts `x` to a point on the curve, choosing the `y` whose
            /// `sgn0` is `greatest`. The point may lie outside the
            /// prime-order subgroup.
            pub fn get_point_from_x(x: P::BaseField, greatest: bool) -> Option<Self> {
                let y = Self::rhs(&x).sqrt()?;
                let y = if y.sgn0() == greatest { y } else { -y };
                Some(Self::new(x, y, false))
            }

            pub fn is_on_curve(&self) -> bool {
                self.infinity || self.y.square() == Self::rhs(&self.x)
            }

            /// `r * self == 0`, assuming `self` is on the curve.
            pub fn is_in_correct_subgroup_assuming_on_curve(&self) -> bool {
                let order = <P::ScalarField as PrimeField>::Params::MODULUS;
                self.mul_bits(BitIteratorBE::new(order)).is_zero()
            }

            pub fn scale_by_cofactor(&self) -> $Group<P> {
                self.mul_bits(BitIteratorBE::without_leading_zeros(P::COFACTOR))
            }

            pub(crate) fn mul_bits(&self, bits: impl Iterator<Item = bool>) -> $Group<P> {
                let mut acc = $Group::zero();
                for bit in bits {
                    acc.double_in_place();
                    if bit {
                        acc.add_assign_mixed(self);
                    }
                }
                acc
            }
        }

        impl<P: Parameters> PartialEq for GroupAffine<P> {
            fn eq(&self, other: &Self) -> bool {
                if self.infinity || other.infinity {
                    return self.infinity == other.infinity;
                }
                self.x == other.x && self.y == other.y
            }
        }

        impl<P: Parameters> Eq for GroupAffine<P> {}

        impl<P: Parameters> Hash for GroupAffine<P> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.infinity.hash(state);
                if !self.infinity {
                    self.x.hash(state);
                    self.y.hash(state);
                }
            }
        }

        impl<P: Parameters> Default for GroupAffine<P> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<P: Parameters> Zero for GroupAffine<P> {
            fn zero() -> Self {
                Self::new(P::BaseField::zero(), P::BaseField::one(), true)
            }

            fn is_zero(&self) -> bool {
                self.infinity
            }
        }

        impl<P: Parameters> Display for GroupAffine<P> {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                if self.infinity {
                    f.write_str("GroupAffine(Infinity)")
                } else {
                    write!(f, "GroupAffine(x={}, y={})", self.x, self.y)
                }
            }
        }

        impl<P: Parameters> AffineCurve for GroupAffine<P> {
            const COFACTOR: &'static [u64] = P::COFACTOR;
            type BaseField = P::BaseField;
            type ScalarField = P::ScalarField;
            type Projective = $Group<P>;

            fn prime_subgroup_generator() -> Self {
                let (x, y) = P::AFFINE_GENERATOR_COEFFS;
                Self::new(x, y, false)
            }

            fn mul_bigint<S: AsRef<[u64]>>(&self, by: S) -> $Group<P> {
                self.mul_bits(BitIteratorBE::without_leading_zeros(by))
            }

            fn mul_by_cofactor(&self) -> Self {
                self.scale_by_cofactor().into()
            }
        }

        impl<P: Parameters> PointEncoding for GroupAffine<P> {
            fn encode(&self, format: PointFormat) -> Vec<u8> {
                let xy = (!self.infinity).then(|| (&self.x, &self.y));
                encode_coordinates(xy, format)
            }

            fn decode(bytes: &[u8]) -> Result<Self, Error> {
                let point = match decode_coordinates::<P>(bytes)? {
                    Some((x, y)) => Self::new(x, y, false),
                    None => return Ok(Self::zero()),
                };
                if !point.is_in_correct_subgroup_assuming_on_curve() {
                    return Err(Error::PointNotInSubgroup);
                }
                Ok(point)
            }
        }

        impl<P: Parameters> Neg for GroupAffine<P> {
            type Output = Self;

            fn neg(self) -> Self {
                if self.infinity {
                    self
                } else {
                    Self::new(self.x, -self.y, false)
                }
            }
        }

        impl<P: Parameters> Add<Self> for GroupAffine<P> {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                $Group::from(self).add_mixed(&other).into()
            }
        }

        impl<'a, P: Parameters> AddAssign<&'a Self> for GroupAffine<P> {
            fn add_assign(&mut self, other: &'a Self) {
                *self = *self + *other;
            }
        }

        impl<P: Parameters> Mul<P::ScalarField> for GroupAffine<P> {
            type Output = $Group<P>;

            fn mul(self, by: P::ScalarField) -> $Group<P> {
                self.mul_bigint(by.into_repr())
            }
        }

        /// Lifts uniformly random `x` coordinates until one lands on the
        /// curve, then clears the cofactor. The discrete log of the result
        /// to the generator is unknown.
        impl<P: Parameters> Distribution<$Group<P>> for Standard {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $Group<P> {
                loop {
                    let x = P::BaseField::rand(rng);
                    let point = match GroupAffine::<P>::get_point_from_x(x, rng.gen()) {
                        Some(point) => point.scale_by_cofactor(),
                        None => continue,
                    };
                    if !point.is_zero() {
                        return point;
                    }
                }
            }
        }

        impl<P: Parameters> $Group<P> {
            /// `Z = 1` or the identity.
            fn has_unit_z(&self) -> bool {
                self.is_zero() || self.z.is_one()
            }
        }

        impl<P: Parameters> PartialEq for $Group<P> {
            /// Compares the affine images without inverting `Z`.
            fn eq(&self, other: &Self) -> bool {
                match (self.is_zero(), other.is_zero()) {
                    (true, true) => return true,
                    (false, false) => {},
                    _ => return false,
                }
                let (sx, sy) = Self::z_powers(&self.z);
                let (ox, oy) = Self::z_powers(&other.z);
                self.x * &ox == other.x * &sx && self.y * &oy == other.y * &sy
            }
        }

        impl<P: Parameters> Eq for $Group<P> {}

        impl<P: Parameters> Hash for $Group<P> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                GroupAffine::from(*self).hash(state)
            }
        }

        impl<P: Parameters> Default for $Group<P> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<P: Parameters> Display for $Group<P> {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                Display::fmt(&GroupAffine::from(*self), f)
            }
        }

        impl<P: Parameters> Neg for $Group<P> {
            type Output = Self;

            fn neg(self) -> Self {
                if self.is_zero() {
                    self
                } else {
                    Self::new(self.x, -self.y, self.z)
                }
            }
        }

        impl<'a, P: Parameters> SubAssign<&'a Self> for $Group<P> {
            fn sub_assign(&mut self, other: &'a Self) {
                *self += &-*other;
            }
        }

        impl_ops_from_ref!(additive [P: Parameters] $Group<P>);

        impl<P: Parameters> MulAssign<P::ScalarField> for $Group<P> {
            fn mul_assign(&mut self, by: P::ScalarField) {
                *self = self.mul_bigint(by.into_repr());
            }
        }

        impl<P: Parameters> Mul<P::ScalarField> for $Group<P> {
            type Output = Self;

            fn mul(self, by: P::ScalarField) -> Self {
                self.mul_bigint(by.into_repr())
            }
        }

        impl<P: Parameters> From<GroupAffine<P>> for $Group<P> {
            fn from(p: GroupAffine<P>) -> Self {
                if p.infinity {
                    Self::zero()
                } else {
                    Self::new(p.x, p.y, P::BaseField::one())
                }
            }
        }

        impl<P: Parameters> From<$Group<P>> for GroupAffine<P> {
            fn from(p: $Group<P>) -> Self {
                if p.is_zero() {
                    return Self::zero();
                }
                if p.z.is_one() {
                    return Self::new(p.x, p.y, false);
                }
                match p.z.inverse() {
                    Ok(z_inv) => {
                        let (sx, sy) = $Group::<P>::z_powers(&z_inv);
                        Self::new(p.x * &sx, p.y * &sy, false)
                    },
                    Err(_) => Self::zero(),
                }
            }
        }

        impl<P: Parameters> ProjectiveCurve for $Group<P> {
            const COFACTOR: &'static [u64] = P::COFACTOR;
            type BaseField = P::BaseField;
            type ScalarField = P::ScalarField;
            type Affine = GroupAffine<P>;

            fn prime_subgroup_generator() -> Self {
                GroupAffine::prime_subgroup_generator().into()
            }

            fn is_normalized(&self) -> bool {
                self.has_unit_z()
            }

            fn batch_normalization(v: &mut [Self]) {
                let mut z_inv = v
                    .iter()
                    .filter(|p| !p.has_unit_z())
                    .map(|p| p.z)
                    .collect::<Vec<_>>();
                batch_inversion(&mut z_inv);

                let pending = v.iter_mut().filter(|p| !p.has_unit_z());
                for (p, z_inv) in pending.zip(z_inv) {
                    let (sx, sy) = Self::z_powers(&z_inv);
                    p.x *= &sx;
                    p.y *= &sy;
                    p.z = P::BaseField::one();
                }
            }

            fn double_in_place(&mut self) -> &mut Self {
                if !self.is_zero() {
                    self.double_nonzero();
                }
                self
            }

            fn add_assign_mixed(&mut self, other: &GroupAffine<P>) {
                if other.infinity {
                    return;
                }
                if self.is_zero() {
                    *self = (*other).into();
                    return;
                }
                self.add_mixed_nonzero(other);
            }
        }
    };
}
