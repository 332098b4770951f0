use super::field::FieldElement;
use crate::{Error, U256};

use bigint::Encoding;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Arithmetic modulo a runtime prime.
///
/// Every method returns a canonical element in `[0, modulus)`, even when
/// the operands were reduced against a different modulus.
pub trait Modular {
    fn modulus(&self) -> &BigUint;

    fn element(&self, number: BigUint) -> FieldElement {
        let reduced = if &number < self.modulus() {
            number
        } else {
            number % self.modulus()
        };
        FieldElement(reduced)
    }

    fn element_from_int(&self, number: &BigInt) -> FieldElement {
        let modulus = BigInt::from(self.modulus().clone());
        // NOTE mod_floor with a positive modulus is never negative,
        // so the magnitude is the residue itself
        let (_, magnitude) = number.mod_floor(&modulus).into_parts();
        FieldElement(magnitude)
    }

    fn from_u64(&self, number: u64) -> FieldElement {
        self.element(BigUint::from(number))
    }

    fn zero(&self) -> FieldElement {
        FieldElement(BigUint::zero())
    }

    fn one(&self) -> FieldElement {
        self.element(BigUint::one())
    }

    fn add(&self, lhs: &FieldElement, rhs: &FieldElement) -> FieldElement {
        self.element(lhs.inner() + rhs.inner())
    }

    fn neg(&self, value: &FieldElement) -> FieldElement {
        let reduced = value.inner() % self.modulus();
        self.element(self.modulus() - reduced)
    }

    fn sub(&self, lhs: &FieldElement, rhs: &FieldElement) -> FieldElement {
        let rhs = rhs.inner() % self.modulus();
        self.element(lhs.inner() + (self.modulus() - rhs))
    }

    fn mul(&self, lhs: &FieldElement, rhs: &FieldElement) -> FieldElement {
        self.element(lhs.inner() * rhs.inner())
    }

    fn square(&self, value: &FieldElement) -> FieldElement {
        self.mul(value, value)
    }

    fn pow(&self, base: &FieldElement, exponent: &BigUint) -> FieldElement {
        FieldElement(base.inner().modpow(exponent, self.modulus()))
    }

    /// Fermat inversion, `x^(p - 2)`. Only valid for a prime modulus.
    fn inverse(&self, value: &FieldElement) -> Result<FieldElement, Error> {
        let value = self.element(value.inner().clone());
        if value.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let exponent = self.modulus() - BigUint::from(2u32);
        Ok(self.pow(&value, &exponent))
    }

    fn div(&self, lhs: &FieldElement, rhs: &FieldElement) -> Result<FieldElement, Error> {
        Ok(self.mul(lhs, &self.inverse(rhs)?))
    }
}

pub fn u256_to_biguint(number: &U256) -> BigUint {
    BigUint::from_bytes_be(&number.to_be_bytes())
}
