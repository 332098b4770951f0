use crate::arithmetic::{Modular, Point};
use crate::curve::CurveParams;
use crate::Error;

use num_bigint::BigUint;

// SEC1 leading bytes
const IDENTITY_TAG: u8 = 0x00;
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Parses a big-endian hex integer with an optional `0x` prefix.
pub fn parse_hex_uint(slice: &str) -> Result<BigUint, Error> {
    let digits = strip_hex_prefix(slice);
    if digits.is_empty() {
        return Err(Error::InvalidEncoding("empty hex string".to_string()));
    }
    // NOTE `parse_bytes` alone would let a sign and `_` separators through
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidEncoding(format!(
            "invalid hex integer: {}",
            slice
        )));
    }
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| Error::InvalidEncoding(format!("invalid hex integer: {}", slice)))
}

fn strip_hex_prefix(slice: &str) -> &str {
    slice.strip_prefix("0x").unwrap_or(slice)
}

/// SEC1 uncompressed encoding, `04 || x || y`, or a single zero byte for the
/// identity.
pub fn encode_point(params: &CurveParams, point: &Point) -> Vec<u8> {
    match point.coordinates() {
        None => vec![IDENTITY_TAG],
        Some((x, y)) => {
            let len = params.field().byte_len();
            let mut bytes = Vec::with_capacity(1 + 2 * len);
            bytes.push(UNCOMPRESSED_TAG);
            bytes.extend_from_slice(&x.to_be_bytes(len));
            bytes.extend_from_slice(&y.to_be_bytes(len));
            bytes
        }
    }
}

pub fn decode_point(params: &CurveParams, bytes: &[u8]) -> Result<Point, Error> {
    let len = params.field().byte_len();
    match bytes {
        [IDENTITY_TAG] => Ok(Point::IDENTITY),
        [UNCOMPRESSED_TAG, coords @ ..] if coords.len() == 2 * len => {
            let x = BigUint::from_bytes_be(&coords[..len]);
            let y = BigUint::from_bytes_be(&coords[len..]);
            let modulus = params.field().modulus();
            if &x >= modulus || &y >= modulus {
                return Err(Error::InvalidEncoding(
                    "coordinate exceeds the field modulus".to_string(),
                ));
            }
            params.point_from_uint(x, y)
        }
        _ => Err(Error::InvalidEncoding(format!(
            "expected 1 or {} bytes in SEC1 encoding, got {}",
            1 + 2 * len,
            bytes.len()
        ))),
    }
}

pub fn point_to_hex(params: &CurveParams, point: &Point) -> String {
    format!("0x{}", hex::encode(encode_point(params, point)))
}

pub fn point_from_hex(params: &CurveParams, slice: &str) -> Result<Point, Error> {
    let bytes = hex::decode(strip_hex_prefix(slice))
        .map_err(|e| Error::InvalidEncoding(e.to_string()))?;
    decode_point(params, &bytes)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::{Domain, Secp256k1};

    const SEC_G_HEX: &str = "0x0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    #[test]
    fn hex_integers() {
        assert_eq!(parse_hex_uint("0x11").unwrap(), BigUint::from(17u32));
        assert_eq!(parse_hex_uint("ff").unwrap(), BigUint::from(255u32));
        assert!(matches!(parse_hex_uint("0x"), Err(Error::InvalidEncoding(_))));
        assert!(matches!(parse_hex_uint("0xzz"), Err(Error::InvalidEncoding(_))));
        for malformed in ["0x0x11", "+11", "-11", "1_1", " 11"] {
            assert!(matches!(
                parse_hex_uint(malformed),
                Err(Error::InvalidEncoding(_))
            ));
        }
    }

    #[test]
    fn generator_encoding() {
        let domain = Domain::named::<Secp256k1>().unwrap();
        let params = domain.params();
        assert_eq!(point_to_hex(params, domain.generator()), SEC_G_HEX);
        assert_eq!(
            &point_from_hex(params, SEC_G_HEX).unwrap(),
            domain.generator()
        );
        assert_eq!(encode_point(params, &Point::IDENTITY), vec![0]);
        assert!(decode_point(params, &[0]).unwrap().is_identity());
    }

    #[test]
    fn malformed_encodings() {
        let domain = Domain::named::<Secp256k1>().unwrap();
        let params = domain.params();

        // wrong length
        assert!(matches!(
            point_from_hex(params, &SEC_G_HEX[..SEC_G_HEX.len() - 2]),
            Err(Error::InvalidEncoding(_))
        ));
        // compressed encodings are not accepted
        let mut compressed = encode_point(params, domain.generator());
        compressed[0] = 0x02;
        assert!(matches!(
            decode_point(params, &compressed),
            Err(Error::InvalidEncoding(_))
        ));
        // flipped y is off the curve
        let mut tampered = encode_point(params, domain.generator());
        tampered[64] ^= 1;
        assert_eq!(decode_point(params, &tampered), Err(Error::PointNotOnCurve));
        // coordinates above the modulus
        let mut oversized = vec![0x04];
        oversized.extend_from_slice(&[0xff; 64]);
        assert!(matches!(
            decode_point(params, &oversized),
            Err(Error::InvalidEncoding(_))
        ));
        assert!(matches!(
            point_from_hex(params, "0x04zz"),
            Err(Error::InvalidEncoding(_))
        ));
        // a single optional prefix
        let doubled_prefix = format!("0x{}", SEC_G_HEX);
        assert!(matches!(
            point_from_hex(params, &doubled_prefix),
            Err(Error::InvalidEncoding(_))
        ));
        assert!(point_from_hex(params, &SEC_G_HEX[2..]).is_ok());
    }
}
