mod field;
mod modular;
mod point;

pub use field::{FieldElement, PrimeField};
pub use modular::Modular;
pub(crate) use modular::u256_to_biguint;
pub use point::Point;
