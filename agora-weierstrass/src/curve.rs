use crate::arithmetic::{u256_to_biguint, FieldElement, Modular, Point, PrimeField};
use crate::{Error, U256};

use num_bigint::{BigInt, BigUint};
use num_traits::One;

/// Domain parameters of a well-known curve `y^2 = x^3 + ax + b`.
pub trait NamedCurve {
    const NAME: &'static str;
    const PRIME_MODULUS: U256;
    const ORDER: U256;
    const GENERATOR_X: U256;
    const GENERATOR_Y: U256;
    const COEFF_A: U256;
    const COEFF_B: U256;
}

/// RFC 5639 brainpoolP256r1, the curve used for ICC/terminal key agreement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrainpoolP256r1;

impl NamedCurve for BrainpoolP256r1 {
    const NAME: &'static str = "brainpoolP256r1";
    const PRIME_MODULUS: U256 =
        U256::from_be_hex("a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377");
    const ORDER: U256 =
        U256::from_be_hex("a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7");
    const GENERATOR_X: U256 =
        U256::from_be_hex("8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262");
    const GENERATOR_Y: U256 =
        U256::from_be_hex("547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997");
    const COEFF_A: U256 =
        U256::from_be_hex("7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9");
    const COEFF_B: U256 =
        U256::from_be_hex("26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6");
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1;

impl NamedCurve for Secp256k1 {
    const NAME: &'static str = "secp256k1";
    const PRIME_MODULUS: U256 =
        U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
    const ORDER: U256 =
        U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
    const GENERATOR_X: U256 =
        U256::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
    const GENERATOR_Y: U256 =
        U256::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");
    const COEFF_A: U256 = U256::ZERO;
    const COEFF_B: U256 = U256::from_u8(7);
}

/// A non-singular short Weierstrass curve over a prime field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    field: PrimeField,
    a: FieldElement,
    b: FieldElement,
}

impl CurveParams {
    pub fn new(field: PrimeField, a: FieldElement, b: FieldElement) -> Result<Self, Error> {
        let a = field.element(a.into_inner());
        let b = field.element(b.into_inner());

        // 4a^3 + 27b^2 != 0
        let a3 = field.mul(&field.square(&a), &a);
        let b2 = field.square(&b);
        let discriminant = field.add(
            &field.mul(&field.from_u64(4), &a3),
            &field.mul(&field.from_u64(27), &b2),
        );
        if discriminant.is_zero() {
            tracing::debug!(%a, %b, "rejected singular curve");
            return Err(Error::SingularCurve);
        }

        Ok(Self { field, a, b })
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Builds an affine point, rejecting coordinates that miss the curve.
    pub fn point(&self, x: FieldElement, y: FieldElement) -> Result<Point, Error> {
        let point = Point::new_unchecked(
            self.field.element(x.into_inner()),
            self.field.element(y.into_inner()),
        );
        if self.is_on_curve(&point) {
            Ok(point)
        } else {
            tracing::debug!(%point, "rejected point off the curve");
            Err(Error::PointNotOnCurve)
        }
    }

    pub fn point_from_uint(&self, x: BigUint, y: BigUint) -> Result<Point, Error> {
        self.point(self.field.element(x), self.field.element(y))
    }
}

/// Curve parameters together with a generator and its order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    params: CurveParams,
    generator: Point,
    order: BigUint,
}

impl Domain {
    pub fn new(params: CurveParams, generator: Point, order: BigUint) -> Result<Self, Error> {
        if generator.is_identity() || !params.is_on_curve(&generator) {
            tracing::debug!(%generator, "rejected generator");
            return Err(Error::PointNotOnCurve);
        }
        if order <= BigUint::one()
            || !params
                .scalar_mul(&BigInt::from(order.clone()), &generator)?
                .is_identity()
        {
            tracing::debug!(%order, "rejected generator order");
            return Err(Error::InvalidScalar);
        }
        tracing::debug!(modulus = %params.field().modulus(), "curve domain ready");
        Ok(Self {
            params,
            generator,
            order,
        })
    }

    pub fn named<C: NamedCurve>() -> Result<Self, Error> {
        let field = PrimeField::from_u256(&C::PRIME_MODULUS)?;
        let a = field.element_from_u256(&C::COEFF_A);
        let b = field.element_from_u256(&C::COEFF_B);
        let params = CurveParams::new(field, a, b)?;
        let generator = params.point_from_uint(
            u256_to_biguint(&C::GENERATOR_X),
            u256_to_biguint(&C::GENERATOR_Y),
        )?;
        tracing::trace!(curve = C::NAME, "loading named curve");
        Self::new(params, generator, u256_to_biguint(&C::ORDER))
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn mul_generator(&self, scalar: &BigInt) -> Result<Point, Error> {
        self.params.scalar_mul(scalar, &self.generator)
    }
}
