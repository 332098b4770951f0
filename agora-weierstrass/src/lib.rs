#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod config;
pub mod curve;
pub mod keypair;
pub mod parse;

pub use arithmetic::{FieldElement, Modular, Point, PrimeField};
pub use bigint::U256;
pub use config::DomainConfig;
pub use curve::{BrainpoolP256r1, CurveParams, Domain, NamedCurve, Secp256k1};
pub use keypair::Keypair;
pub use num_bigint::{BigInt, BigUint};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("attempted to invert a zero field element")]
    DivisionByZero,
    #[error("zero denominator in point addition")]
    UndefinedInverse,
    #[error("point is not on the curve")]
    PointNotOnCurve,
    #[error("modulus must be an odd prime (or 2)")]
    InvalidModulus,
    #[error("singular curve: 4a^3 + 27b^2 = 0")]
    SingularCurve,
    #[error("scalar out of range")]
    InvalidScalar,
    #[error("pubkey-privkey mismatch")]
    InvalidKeypair,
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}
