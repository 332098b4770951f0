use crate::arithmetic::Point;
use crate::curve::Domain;
use crate::Error;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand_core::{CryptoRng, RngCore};

use std::fmt;

// extra random bytes drawn beyond the order's width to flatten modular bias
const WIDE_REDUCTION_BYTES: usize = 16;

#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    privkey: BigUint,
    pubkey: Point,
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("privkey", &"<redacted>")
            .field("pubkey", &self.pubkey)
            .finish()
    }
}

impl Keypair {
    pub fn new(domain: &Domain, privkey: BigUint) -> Result<Self, Error> {
        if privkey.is_zero() || &privkey >= domain.order() {
            tracing::debug!("rejected private key outside [1, order)");
            return Err(Error::InvalidScalar);
        }
        let pubkey = domain.mul_generator(&BigInt::from(privkey.clone()))?;
        Ok(Self { privkey, pubkey })
    }

    pub fn new_checked(domain: &Domain, privkey: BigUint, pubkey: Point) -> Result<Self, Error> {
        let keypair = Self::new(domain, privkey)?;
        if keypair.pubkey != pubkey {
            Err(Error::InvalidKeypair)
        } else {
            Ok(keypair)
        }
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R, domain: &Domain) -> Result<Self, Error> {
        let order = domain.order();
        let len = ((order.bits() + 7) / 8) as usize + WIDE_REDUCTION_BYTES;
        let mut bytes = vec![0u8; len];
        rng.fill_bytes(&mut bytes);
        // uniform in [1, order)
        let privkey = BigUint::from_bytes_be(&bytes) % (order - BigUint::one()) + BigUint::one();
        tracing::trace!("generated random keypair");
        Self::new(domain, privkey)
    }

    pub fn pubkey(&self) -> &Point {
        &self.pubkey
    }

    pub fn privkey(&self) -> &BigUint {
        &self.privkey
    }

    /// Raw Diffie-Hellman point `privkey * peer_pubkey`, no key derivation.
    pub fn shared_point(&self, domain: &Domain, peer_pubkey: &Point) -> Result<Point, Error> {
        let params = domain.params();
        if peer_pubkey.is_identity() || !params.is_on_curve(peer_pubkey) {
            tracing::debug!("rejected peer public key");
            return Err(Error::PointNotOnCurve);
        }
        let shared = params.scalar_mul(&BigInt::from(self.privkey.clone()), peer_pubkey)?;
        if shared.is_identity() {
            tracing::debug!("peer public key lies in a small subgroup");
            return Err(Error::PointNotOnCurve);
        }
        Ok(shared)
    }
}
