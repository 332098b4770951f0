use super::modular::{u256_to_biguint, Modular};
use crate::{Error, U256};

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use std::fmt;

/// Residue modulo the prime of the [`PrimeField`] that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement(pub(crate) BigUint);

impl FieldElement {
    pub fn inner(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Big-endian bytes left-padded with zeros to `len`.
    pub fn to_be_bytes(&self, len: usize) -> Vec<u8> {
        let bytes = self.0.to_bytes_be();
        if bytes.len() >= len {
            return bytes;
        }
        let mut padded = vec![0u8; len - bytes.len()];
        padded.extend_from_slice(&bytes);
        padded
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    byte_len: usize,
}

impl PrimeField {
    /// Primality is the caller's responsibility; only trivially composite
    /// moduli are rejected.
    pub fn new(modulus: BigUint) -> Result<Self, Error> {
        let two = BigUint::from(2u32);
        if modulus < two || (modulus.is_even() && modulus != two) {
            tracing::debug!(%modulus, "rejected field modulus");
            return Err(Error::InvalidModulus);
        }
        let byte_len = ((modulus.bits() + 7) / 8) as usize;
        Ok(Self { modulus, byte_len })
    }

    pub fn from_u256(modulus: &U256) -> Result<Self, Error> {
        Self::new(u256_to_biguint(modulus))
    }

    /// Length of a fixed-width big-endian encoding of an element.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn element_from_u256(&self, number: &U256) -> FieldElement {
        self.element(u256_to_biguint(number))
    }
}

impl Modular for PrimeField {
    fn modulus(&self) -> &BigUint {
        &self.modulus
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::{NamedCurve, Secp256k1};

    use num_bigint::BigInt;

    fn small_field() -> PrimeField {
        PrimeField::new(BigUint::from(17u32)).unwrap()
    }

    fn hex(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
    }

    #[test]
    fn modulus_validation() {
        assert_eq!(PrimeField::new(BigUint::zero()), Err(Error::InvalidModulus));
        assert_eq!(PrimeField::new(BigUint::from(1u32)), Err(Error::InvalidModulus));
        assert_eq!(PrimeField::new(BigUint::from(18u32)), Err(Error::InvalidModulus));
        assert!(PrimeField::new(BigUint::from(2u32)).is_ok());
        assert_eq!(small_field().byte_len(), 1);
        assert_eq!(PrimeField::from_u256(&Secp256k1::PRIME_MODULUS).unwrap().byte_len(), 32);
    }

    #[test]
    fn operations_with_small_modulus() {
        let f = small_field();
        let a = f.from_u64(15);
        let b = f.from_u64(9);
        assert_eq!(f.add(&a, &b), f.from_u64(7));
        assert_eq!(f.mul(&a, &b), f.from_u64(16));
        assert_eq!(f.sub(&a, &b), f.from_u64(6));
        assert_eq!(f.sub(&b, &a), f.from_u64(11));
        assert_eq!(f.neg(&a), f.from_u64(2));
        assert_eq!(f.neg(&f.zero()), f.zero());
        assert_eq!(f.from_u64(40), f.from_u64(6));
        assert_eq!(f.element_from_int(&BigInt::from(-1)), f.from_u64(16));
        assert_eq!(f.element_from_int(&BigInt::from(-35)), f.from_u64(16));
    }

    #[test]
    fn field_laws_hold_exhaustively() {
        let f = small_field();
        for i in 0..17 {
            let x = f.from_u64(i);
            assert_eq!(f.add(&x, &f.zero()), x);
            assert_eq!(f.add(&x, &f.neg(&x)), f.zero());
            for j in 0..17 {
                let y = f.from_u64(j);
                assert_eq!(f.add(&x, &y), f.add(&y, &x));
                assert_eq!(f.mul(&x, &y), f.mul(&y, &x));
                assert_eq!(f.add(&f.sub(&x, &y), &y), x);
            }
        }
    }

    #[test]
    fn inversion() {
        let f = small_field();
        assert_eq!(f.inverse(&f.zero()), Err(Error::DivisionByZero));
        assert_eq!(f.inverse(&f.from_u64(34)), Err(Error::DivisionByZero));
        assert_eq!(f.div(&f.one(), &f.zero()), Err(Error::DivisionByZero));
        for i in 1..17 {
            let x = f.from_u64(i);
            assert_eq!(f.mul(&x, &f.inverse(&x).unwrap()), f.one());
        }
        assert_eq!(f.inverse(&f.from_u64(2)).unwrap(), f.from_u64(9));

        let two = PrimeField::new(BigUint::from(2u32)).unwrap();
        assert_eq!(two.inverse(&two.one()).unwrap(), two.one());
    }

    #[test]
    fn operations_with_large_modulus() {
        let f = PrimeField::from_u256(&Secp256k1::PRIME_MODULUS).unwrap();
        let a = f.element(hex("ffffaaaabbbb123456789eeee"));
        let b = f.element(hex("12345678901234567890ffffddddeeee7890"));
        assert_eq!(
            f.add(&a, &b),
            f.element(hex("1234567890223451233cbbb101235678677e"))
        );
        assert_eq!(
            f.mul(&a, &b),
            f.element(hex(
                "123450671f20a8b0a93d71f37ba2ec0d166be8a54889e735d97664ad9f5e0"
            ))
        );

        let a = f.element_from_u256(&Secp256k1::GENERATOR_X);
        let b = f.element_from_u256(&Secp256k1::GENERATOR_Y);
        assert_eq!(
            f.add(&a, &b),
            f.element(hex(
                "c1f940f620808011b3455e91dc9813afffb3b123d4537cf2f63a51eb1208ec50"
            ))
        );
        assert_eq!(
            f.mul(&a, &b),
            f.element(hex(
                "fd3dc529c6eb60fb9d166034cf3c1a5a72324aa9dfd3428a56d7e1ce0179fd9b"
            ))
        );

        let a_min_b = f.sub(&a, &b);
        let b_min_a = f.sub(&b, &a);
        assert_eq!(a_min_b, f.neg(&b_min_a));
        assert_eq!(
            a_min_b,
            f.element(hex(
                "31838c07d338f746f7fb6699c076025e058448928748d4bfbdaab0cb1be742e0"
            ))
        );
        assert_eq!(
            b_min_a,
            f.element(hex(
                "ce7c73f82cc708b9080499663f89fda1fa7bb76d78b72b4042554f33e418b94f"
            ))
        );
        assert_eq!(f.mul(&a, &f.inverse(&a).unwrap()), f.one());
    }

    #[test]
    fn fixed_width_encoding() {
        let f = small_field();
        let x = f.from_u64(5);
        assert_eq!(x.to_be_bytes(3), vec![0, 0, 5]);
        assert_eq!(f.zero().to_be_bytes(2), vec![0, 0]);
        assert_eq!(f.from_u64(16).to_string(), "10");
    }
}
