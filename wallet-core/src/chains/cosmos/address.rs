// wallet-core/src/chains/cosmos/address.rs
//
// Cosmos Address Module
// Flow: Public Key (33B compressed) → SHA-256 → RIPEMD-160 (20B) → bech32(prefix)

use crate::crypto::{ecdsa::PUBLIC_KEY_LENGTH, hash::hash160};
use crate::error::{CryptoError, EncodingError, WalletError, WalletResult};
use bech32::{primitives::decode::CheckedHrpstring, Bech32, Hrp};

/// Default human-readable part
pub const DEFAULT_BECH32_PREFIX: &str = "cosmos";

/// Cosmos Address Generator
pub struct CosmosAddress;

impl CosmosAddress {
    /// bech32 address of a compressed secp256k1 public key
    ///
    /// # Returns
    /// `"cosmos1..."` for prefix `"cosmos"`
    pub fn from_public_key(public_key: &[u8], prefix: &str) -> WalletResult<String> {
        if public_key.len() != PUBLIC_KEY_LENGTH {
            return Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Expected {}-byte compressed public key, got {} bytes",
                PUBLIC_KEY_LENGTH,
                public_key.len()
            ))));
        }
        Self::from_hash(&hash160(public_key), prefix)
    }

    /// bech32-encode a 20-byte account hash
    pub fn from_hash(hash: &[u8; 20], prefix: &str) -> WalletResult<String> {
        let hrp = Self::parse_prefix(prefix)?;
        bech32::encode::<Bech32>(hrp, hash)
            .map_err(|e| WalletError::Encoding(EncodingError::InvalidAddress(e.to_string())))
    }

    /// Decode an address back to its 20-byte hash, requiring `prefix`
    pub fn decode(address: &str, prefix: &str) -> WalletResult<[u8; 20]> {
        let expected = Self::parse_prefix(prefix)?;
        let checked = CheckedHrpstring::new::<Bech32>(address)
            .map_err(|e| WalletError::Encoding(EncodingError::InvalidAddress(e.to_string())))?;

        if checked.hrp() != expected {
            return Err(WalletError::Encoding(EncodingError::InvalidAddress(format!(
                "Expected prefix '{}', got '{}'",
                prefix,
                checked.hrp()
            ))));
        }

        let data: Vec<u8> = checked.byte_iter().collect();
        <[u8; 20]>::try_from(data.as_slice()).map_err(|_| {
            WalletError::Encoding(EncodingError::InvalidAddress(format!(
                "Expected 20-byte payload, got {} bytes",
                data.len()
            )))
        })
    }

    #[inline]
    pub fn is_valid(address: &str, prefix: &str) -> bool {
        Self::decode(address, prefix).is_ok()
    }

    fn parse_prefix(prefix: &str) -> WalletResult<Hrp> {
        Hrp::parse(prefix).map_err(|e| {
            WalletError::Validation(format!("Invalid bech32 prefix '{}': {}", prefix, e))
        })
    }
}
