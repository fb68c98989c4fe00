// wallet-core/src/crypto/ecdsa.rs
//
// secp256k1 ECDSA primitives over 32-byte digests
// Nonce: RFC 6979 (deterministic), signatures normalized to low-S, compact r||s encoding

use crate::error::{CryptoError, WalletError, WalletResult};
use k256::ecdsa::{
    signature::hazmat::{PrehashSigner, PrehashVerifier},
    Signature, SigningKey, VerifyingKey,
};

/// Length of a raw secp256k1 secret scalar.
pub const PRIVATE_KEY_LENGTH: usize = 32;
/// Length of a compressed SEC1 public key.
pub const PUBLIC_KEY_LENGTH: usize = 33;
/// Length of a compact `r || s` signature.
pub const SIGNATURE_LENGTH: usize = 64;

fn signing_key(priv_key: &[u8]) -> WalletResult<SigningKey> {
    if priv_key.len() != PRIVATE_KEY_LENGTH {
        return Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
            "Expected {}-byte private key, got {} bytes",
            PRIVATE_KEY_LENGTH,
            priv_key.len()
        ))));
    }
    SigningKey::from_slice(priv_key).map_err(|e| {
        WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
            "Invalid secp256k1 private key (must be 32 bytes, non-zero, below curve order): {}",
            e
        )))
    })
}

/// Compressed public key (33 bytes) of a 32-byte private key.
pub fn public_key_from_private(priv_key: &[u8]) -> WalletResult<[u8; PUBLIC_KEY_LENGTH]> {
    let key = signing_key(priv_key)?;
    let encoded = key.verifying_key().to_encoded_point(true);

    let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
    public_key.copy_from_slice(encoded.as_bytes());
    Ok(public_key)
}

/// Signs a 32-byte digest, returning the 64-byte compact signature.
///
/// Identical `(digest, priv_key)` input always produces the identical signature.
pub fn sign_digest(digest: &[u8; 32], priv_key: &[u8]) -> WalletResult<[u8; SIGNATURE_LENGTH]> {
    let key = signing_key(priv_key).map_err(|e| match e {
        WalletError::Crypto(CryptoError::InvalidKeyFormat(msg)) => {
            WalletError::Crypto(CryptoError::SigningFailed(msg))
        }
        other => other,
    })?;

    let signature: Signature = key
        .sign_prehash(digest)
        .map_err(|e| WalletError::Crypto(CryptoError::SigningFailed(e.to_string())))?;
    let signature = signature.normalize_s().unwrap_or(signature);

    let mut out = [0u8; SIGNATURE_LENGTH];
    out.copy_from_slice(&signature.to_bytes());
    Ok(out)
}

/// Checks a compact signature over `digest` against a SEC1 public key.
///
/// Malformed signature or key bytes verify as `false`.
pub fn verify_digest(digest: &[u8; 32], signature: &[u8], public_key: &[u8]) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(public_key) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(signature) else {
        return false;
    };
    verifying_key.verify_prehash(digest, &signature).is_ok()
}
