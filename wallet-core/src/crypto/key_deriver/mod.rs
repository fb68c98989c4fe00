// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (BIP-39 Mnemonic → PBKDF2, 64 bytes)      │
// │                    │                            │
// │                    ▼                            │
// │         MasterKey (BIP-32 root, xprv | xpub)    │
// │                    │  path m/44'/118'/0'/0/0    │
// │                    ▼                            │
// │         KeyPair (32B secret, 33B compressed)    │
// └─────────────────────────────────────────────────┘

pub mod secp256k1;

pub use secp256k1::Secp256k1Deriver;

use crate::crypto::ecdsa;
use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{XPrv, XPub};
use std::str::FromStr;
use zeroize::Zeroizing;

// =============================================================================
// MASTER KEY
// =============================================================================

/// Root of a hierarchical deterministic key tree.
///
/// Only a private root can produce key pairs; a public-only root (imported
/// from an `xpub`) fails derivation with [`CryptoError::MissingPrivateKey`].
#[derive(Clone)]
pub enum MasterKey {
    Private(XPrv),
    Public(XPub),
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MasterKey::Private(_) => f.write_str("MasterKey::Private([REDACTED])"),
            MasterKey::Public(_) => f.write_str("MasterKey::Public(..)"),
        }
    }
}

impl MasterKey {
    /// BIP-32 master key from a seed (16..=64 bytes)
    pub fn from_seed(seed: &[u8]) -> WalletResult<Self> {
        KeyDeriver::validate_seed(seed)?;
        let root = XPrv::new(seed).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Failed to create master key: {}",
                e
            )))
        })?;
        Ok(MasterKey::Private(root))
    }

    #[inline]
    pub fn has_private_key(&self) -> bool {
        matches!(self, MasterKey::Private(_))
    }
}

impl FromStr for MasterKey {
    type Err = WalletError;

    /// Parses a base58 extended key: `xprv…` gives a private root, `xpub…` a public-only one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(xprv) = XPrv::from_str(s) {
            return Ok(MasterKey::Private(xprv));
        }
        XPub::from_str(s).map(MasterKey::Public).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid extended key: {}",
                e
            )))
        })
    }
}

// =============================================================================
// KEY PAIR
// =============================================================================

/// Derived secp256k1 key pair.
///
/// `public_key` is always the compressed image of `private_key`; the only
/// constructors compute it from the secret.
#[derive(Clone)]
pub struct KeyPair {
    private_key: Zeroizing<[u8; 32]>,
    public_key: [u8; ecdsa::PUBLIC_KEY_LENGTH],
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl KeyPair {
    /// Key pair from raw 32-byte secret
    pub fn from_private_key(priv_key: &[u8]) -> WalletResult<Self> {
        let secret = Zeroizing::new(<[u8; 32]>::try_from(priv_key).map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Expected 32-byte private key, got {} bytes",
                priv_key.len()
            )))
        })?);
        let public_key = ecdsa::public_key_from_private(&*secret)?;
        Ok(Self {
            private_key: secret,
            public_key,
        })
    }

    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    #[inline]
    pub fn public_key(&self) -> &[u8; ecdsa::PUBLIC_KEY_LENGTH] {
        &self.public_key
    }
}

// =============================================================================
// DERIVER
// =============================================================================

pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the key pair at `path` below `master`
    ///
    /// # Arguments
    /// * `master` - HD root
    /// * `path` - Derivation path (e.g., "m/44'/118'/0'/0/0")
    pub fn derive(master: &MasterKey, path: &str) -> WalletResult<KeyPair> {
        let root = match master {
            MasterKey::Private(root) => root,
            MasterKey::Public(_) => {
                Secp256k1Deriver::parse_path(path)?;
                tracing::warn!(path, "derivation requested from a public-only master key");
                return Err(WalletError::Crypto(CryptoError::MissingPrivateKey));
            }
        };

        tracing::debug!(path, "deriving secp256k1 key pair");
        let private_key = Secp256k1Deriver::derive(root, path)?;
        KeyPair::from_private_key(&*private_key)
    }

    /// Validate seed length (BIP-32: 128..=512 bits)
    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if !(16..=64).contains(&seed.len()) {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected 16..=64 bytes, got {}",
                seed.len()
            ))));
        }
        Ok(())
    }
}
