use super::{FieldElement, Modular};
use crate::curve::CurveParams;
use crate::Error;

use num_bigint::{BigInt, BigUint, Sign};

use std::fmt;

/// A point of a short Weierstrass curve in affine coordinates, or the
/// point at infinity.
///
/// Affine points are only handed out by [`CurveParams`], which checks
/// curve membership, or by the group law applied to such points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point(Option<(FieldElement, FieldElement)>);

impl Point {
    pub const IDENTITY: Self = Self(None);

    pub(crate) fn new_unchecked(x: FieldElement, y: FieldElement) -> Self {
        Self(Some((x, y)))
    }

    #[inline(always)]
    pub fn is_identity(&self) -> bool {
        self.0.is_none()
    }

    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        self.0.as_ref().map(|(x, y)| (x, y))
    }

    #[inline(always)]
    pub fn x(&self) -> Option<&FieldElement> {
        self.0.as_ref().map(|(x, _)| x)
    }

    #[inline(always)]
    pub fn y(&self) -> Option<&FieldElement> {
        self.0.as_ref().map(|(_, y)| y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.coordinates() {
            None => write!(f, "identity"),
            Some((x, y)) => {
                writeln!(f, "x: {}", x)?;
                write!(f, "y: {}", y)
            }
        }
    }
}

// Group law
impl CurveParams {
    /// Checks `y^2 = x^3 + ax + b`. The identity is always on the curve.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        let (x, y) = match point.coordinates() {
            Some(coords) => coords,
            None => return true,
        };
        let f = self.field();
        let y2 = f.square(y);
        let x3 = f.mul(&f.square(x), x);
        let ax = f.mul(self.a(), x);
        y2 == f.add(&f.add(&x3, &ax), self.b())
    }

    pub fn negate(&self, point: &Point) -> Point {
        match point.coordinates() {
            None => Point::IDENTITY,
            Some((x, y)) => Point::new_unchecked(x.clone(), self.field().neg(y)),
        }
    }

    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point, Error> {
        let (x1, y1) = match lhs.coordinates() {
            Some(coords) => coords,
            None => return Ok(rhs.clone()),
        };
        let (x2, y2) = match rhs.coordinates() {
            Some(coords) => coords,
            None => return Ok(lhs.clone()),
        };
        let f = self.field();

        // P + (-P), which also covers doubling a point with y = 0
        if x1 == x2 && f.add(y1, y2).is_zero() {
            return Ok(Point::IDENTITY);
        }

        let slope = if x1 == x2 && y1 == y2 {
            let numerator = f.add(&f.mul(&f.from_u64(3), &f.square(x1)), self.a());
            let denominator = f.add(y1, y1);
            f.div(&numerator, &denominator)
        } else {
            f.div(&f.sub(y2, y1), &f.sub(x2, x1))
        }
        .map_err(|_| Error::UndefinedInverse)?;

        let x3 = f.sub(&f.sub(&f.square(&slope), x1), x2);
        let y3 = f.sub(&f.mul(&slope, &f.sub(x1, &x3)), y1);

        Ok(Point::new_unchecked(x3, y3))
    }

    pub fn double(&self, point: &Point) -> Result<Point, Error> {
        self.add(point, point)
    }

    pub fn sub(&self, lhs: &Point, rhs: &Point) -> Result<Point, Error> {
        self.add(lhs, &self.negate(rhs))
    }

    /// Double-and-add over the bits of `|scalar|`, most significant first.
    /// A negative scalar multiplies the negated point.
    pub fn scalar_mul(&self, scalar: &BigInt, point: &Point) -> Result<Point, Error> {
        let (base, magnitude) = self.signed_base(scalar, point);
        let mut q = Point::IDENTITY;
        for bit in bits_be(&magnitude, 0) {
            q = self.double(&q)?;
            if bit {
                q = self.add(&q, &base)?;
            }
        }
        Ok(q)
    }

    /// Computes `this_scalar * this + other_scalar * other` with a single
    /// shared doubling chain.
    pub fn double_mul(
        &self,
        this_scalar: &BigInt,
        this: &Point,
        other_scalar: &BigInt,
        other: &Point,
    ) -> Result<Point, Error> {
        let (this_base, this_magnitude) = self.signed_base(this_scalar, this);
        let (other_base, other_magnitude) = self.signed_base(other_scalar, other);
        let sum = self.add(&this_base, &other_base)?;

        let len = this_magnitude
            .to_bytes_be()
            .len()
            .max(other_magnitude.to_bytes_be().len());

        let mut q = Point::IDENTITY;
        let pairs = bits_be(&this_magnitude, len).zip(bits_be(&other_magnitude, len));
        for (this_bit, other_bit) in pairs {
            q = self.double(&q)?;
            q = match (this_bit, other_bit) {
                (true, true) => self.add(&q, &sum)?,
                (true, false) => self.add(&q, &this_base)?,
                (false, true) => self.add(&q, &other_base)?,
                (false, false) => q,
            };
        }
        Ok(q)
    }

    fn signed_base(&self, scalar: &BigInt, point: &Point) -> (Point, BigUint) {
        let base = if scalar.sign() == Sign::Minus {
            self.negate(point)
        } else {
            point.clone()
        };
        (base, scalar.magnitude().clone())
    }
}

/// Bits of `number` from the most significant one down, after left-padding
/// its big-endian bytes to `len`.
fn bits_be(number: &BigUint, len: usize) -> impl Iterator<Item = bool> {
    let bytes = number.to_bytes_be();
    let mut padded = vec![0u8; len.saturating_sub(bytes.len())];
    padded.extend_from_slice(&bytes);
    padded
        .into_iter()
        .flat_map(|byte| (0..8u32).rev().map(move |i| (byte >> i) & 1 == 1))
}
