// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32 / BIP-44
//
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{DerivationPath, XPrv};
use std::str::FromStr;
use zeroize::Zeroizing;

/// secp256k1 Key Deriver - BIP-32 Standard
///
/// Walks a derivation path from an extended private key. No intermediate
/// extended key outlives the call.
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Parse a BIP-32 path string (`m/44'/118'/0'/0/0`)
    pub fn parse_path(path: &str) -> WalletResult<DerivationPath> {
        DerivationPath::from_str(path).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid path '{}': {}",
                path, e
            )))
        })
    }

    /// Derive the extended private key at `path` below `root`
    pub fn derive_xprv(root: &XPrv, path: &str) -> WalletResult<XPrv> {
        let derivation_path = Self::parse_path(path)?;

        let mut child = root.clone();
        for child_num in derivation_path {
            child = child.derive_child(child_num).map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Child derivation failed: {}",
                    e
                )))
            })?;
        }
        Ok(child)
    }

    /// Derive single private key below `root`
    ///
    /// # Returns
    /// 32-byte private key, auto-zeroize on drop
    pub fn derive(root: &XPrv, path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let child = Self::derive_xprv(root, path)?;
        let key_bytes: [u8; 32] = child.private_key().to_bytes().into();
        Ok(Zeroizing::new(key_bytes))
    }

    /// Validate path format
    #[inline]
    pub fn is_valid_path(path: &str) -> bool {
        DerivationPath::from_str(path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;

    // BIP-39 seed of "abandon ... about" (empty passphrase)
    const TEST_SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";
    const COSMOS_0_PRIVATE_KEY: &str =
        "c4a48e2fce1481cd3294b4490f6678090ea98d3d0e5cd984558ab0968741b104";

    fn root() -> XPrv {
        XPrv::new(hex::decode(TEST_SEED).unwrap()).unwrap()
    }

    #[test]
    fn test_derive_cosmos_key() {
        let key = Secp256k1Deriver::derive(&root(), DerivationPaths::COSMOS_0).unwrap();
        assert_eq!(hex::encode(&*key), COSMOS_0_PRIVATE_KEY);
    }

    #[test]
    fn test_different_paths_different_keys() {
        let root = root();
        let a = Secp256k1Deriver::derive(&root, &DerivationPaths::cosmos(0)).unwrap();
        let b = Secp256k1Deriver::derive(&root, &DerivationPaths::cosmos(1)).unwrap();
        assert_ne!(&*a, &*b);
    }

    #[test]
    fn test_invalid_path_rejected() {
        let result = Secp256k1Deriver::derive(&root(), "m/44'/abc");
        assert!(matches!(
            result,
            Err(WalletError::Crypto(CryptoError::DerivationFailed(_)))
        ));
    }

    #[test]
    fn test_is_valid_path() {
        assert!(Secp256k1Deriver::is_valid_path("m/44'/118'/0'/0/0"));
        assert!(!Secp256k1Deriver::is_valid_path("invalid"));
    }
}
