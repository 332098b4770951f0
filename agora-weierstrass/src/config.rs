use crate::arithmetic::{FieldElement, Modular, PrimeField};
use crate::curve::{CurveParams, Domain};
use crate::parse::parse_hex_uint;
use crate::Error;

use serde::{Deserialize, Serialize};

/// Curve domain described by hex strings, as found in configuration files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainConfig {
    pub modulus: String,
    pub a: String,
    pub b: String,
    pub generator_x: String,
    pub generator_y: String,
    pub order: String,
}

impl TryFrom<DomainConfig> for Domain {
    type Error = Error;
    fn try_from(config: DomainConfig) -> Result<Self, Self::Error> {
        let field = PrimeField::new(parse_hex_uint(&config.modulus)?)?;
        let a = parse_canonical(&field, &config.a)?;
        let b = parse_canonical(&field, &config.b)?;
        let params = CurveParams::new(field, a, b)?;
        let generator = params.point(
            parse_canonical(params.field(), &config.generator_x)?,
            parse_canonical(params.field(), &config.generator_y)?,
        )?;
        Domain::new(params, generator, parse_hex_uint(&config.order)?)
    }
}

/// Field elements must already be reduced, the same rule SEC1 decoding applies.
fn parse_canonical(field: &PrimeField, slice: &str) -> Result<FieldElement, Error> {
    let number = parse_hex_uint(slice)?;
    if &number >= field.modulus() {
        tracing::debug!(%number, "rejected unreduced field element");
        return Err(Error::InvalidEncoding(format!(
            "{} exceeds the field modulus",
            slice
        )));
    }
    Ok(field.element(number))
}

impl From<&Domain> for DomainConfig {
    fn from(domain: &Domain) -> Self {
        let params = domain.params();
        let (x, y) = match domain.generator().coordinates() {
            Some((x, y)) => (x.to_string(), y.to_string()),
            // NOTE unreachable, `Domain::new` rejects an identity generator
            None => (String::new(), String::new()),
        };
        Self {
            modulus: format!("0x{:x}", params.field().modulus()),
            a: format!("0x{}", params.a()),
            b: format!("0x{}", params.b()),
            generator_x: format!("0x{}", x),
            generator_y: format!("0x{}", y),
            order: format!("0x{:x}", domain.order()),
        }
    }
}
