// wallet-core/src/chains/cosmos/signer.rs
//
// Cosmos Signer Module - Offline amino JSON signing
// sign message → canonical JSON → SHA-256 → secp256k1 ECDSA → base64 + pubkey → append

use super::address::CosmosAddress;
use super::canonical::canonical_json_bytes;
use super::types::{PubKey, SignMeta, StdSignMsg, StdSignature, StdTx, PUBKEY_TYPE};
use crate::crypto::{ecdsa, hash::sha256, KeyPair};
use crate::error::WalletResult;
use base64::{engine::general_purpose::STANDARD, Engine as _};

// =============================================================================
// PROTOCOL STEPS
// =============================================================================

/// Sign message for `tx` under `meta`
#[inline]
pub fn create_sign_msg(tx: &StdTx, meta: &SignMeta) -> StdSignMsg {
    StdSignMsg::new(tx, meta)
}

/// `SHA-256(canonical_json(sign_msg))`, the digest that actually gets signed
pub fn sign_msg_digest(sign_msg: &StdSignMsg) -> WalletResult<[u8; 32]> {
    let bytes = canonical_json_bytes(sign_msg)?;
    Ok(sha256(&bytes))
}

/// Signs arbitrary bytes: `ECDSA(SHA-256(bytes))`
pub fn sign_bytes(bytes: &[u8], private_key: &[u8]) -> WalletResult<[u8; ecdsa::SIGNATURE_LENGTH]> {
    ecdsa::sign_digest(&sha256(bytes), private_key)
}

/// Raw 64-byte signature over a sign message
pub fn create_signature_bytes(
    sign_msg: &StdSignMsg,
    private_key: &[u8],
) -> WalletResult<[u8; ecdsa::SIGNATURE_LENGTH]> {
    let digest = sign_msg_digest(sign_msg)?;
    ecdsa::sign_digest(&digest, private_key)
}

/// Signature entry (base64 signature + tagged base64 public key)
pub fn create_signature(sign_msg: &StdSignMsg, key_pair: &KeyPair) -> WalletResult<StdSignature> {
    let signature = create_signature_bytes(sign_msg, key_pair.private_key())?;
    Ok(StdSignature {
        signature: STANDARD.encode(signature),
        pub_key: PubKey {
            key_type: PUBKEY_TYPE.to_string(),
            value: STANDARD.encode(key_pair.public_key()),
        },
    })
}

/// Signs `tx` and returns a copy with the signature appended.
///
/// Existing signatures are kept as-is; re-signing always appends.
pub fn sign_tx(tx: &StdTx, meta: &SignMeta, key_pair: &KeyPair) -> WalletResult<StdTx> {
    let sign_msg = create_sign_msg(tx, meta);
    let signature = create_signature(&sign_msg, key_pair)?;

    let mut signed = tx.clone();
    signed
        .signatures
        .get_or_insert_with(Vec::new)
        .push(signature);

    tracing::debug!(
        chain_id = %meta.chain_id,
        account_number = %meta.account_number,
        sequence = %meta.sequence,
        signatures = signed.signatures().len(),
        "signed transaction"
    );
    Ok(signed)
}

// =============================================================================
// SIGNER
// =============================================================================

/// Cosmos Signer - key pair bound to its bech32 address
///
/// # Security Architecture
/// - **Zeroize**: private key trong `KeyPair` tự động ghi đè bằng 0 khi Drop
/// - **Replay Protection**: `SignMeta` (chain id, account number, sequence) bắt buộc mỗi lần ký
/// - **No Debug Leak**: Custom Debug impl không hiển thị private key
pub struct CosmosSigner {
    key_pair: KeyPair,
    address: String,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị private key
impl std::fmt::Debug for CosmosSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmosSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl CosmosSigner {
    /// # Arguments
    /// * `key_pair` - Signing key pair
    /// * `prefix` - bech32 prefix used for [`address`](Self::address)
    pub fn new(key_pair: KeyPair, prefix: &str) -> WalletResult<Self> {
        let address = CosmosAddress::from_public_key(key_pair.public_key(), prefix)?;
        Ok(Self { key_pair, address })
    }

    /// Signer from a raw 32-byte private key
    pub fn from_private_key(priv_key: &[u8], prefix: &str) -> WalletResult<Self> {
        Self::new(KeyPair::from_private_key(priv_key)?, prefix)
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[inline]
    pub fn public_key(&self) -> &[u8; ecdsa::PUBLIC_KEY_LENGTH] {
        self.key_pair.public_key()
    }

    /// See [`sign_tx`]
    pub fn sign_tx(&self, tx: &StdTx, meta: &SignMeta) -> WalletResult<StdTx> {
        sign_tx(tx, meta, &self.key_pair)
    }

    /// See [`create_signature`]
    pub fn sign_msg(&self, sign_msg: &StdSignMsg) -> WalletResult<StdSignature> {
        create_signature(sign_msg, &self.key_pair)
    }

    /// See [`sign_bytes`]
    pub fn sign_bytes(&self, bytes: &[u8]) -> WalletResult<[u8; ecdsa::SIGNATURE_LENGTH]> {
        sign_bytes(bytes, self.key_pair.private_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::cosmos::types::{Coin, Msg, StdFee};
    use crate::error::{CryptoError, WalletError};
    use serde_json::json;

    const TEST_PRIVATE_KEY: &str =
        "c4a48e2fce1481cd3294b4490f6678090ea98d3d0e5cd984558ab0968741b104";
    const TEST_PUBLIC_KEY_B64: &str = "Ak9OKtmcNNYLm6YoPJQxqEGK+GcyEpYfl6d7Y3f80Fti";
    const TEST_ADDRESS: &str = "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4";

    // SHA-256 of the canonical sign message for the empty test-chain tx
    const EMPTY_TX_DIGEST: &str =
        "8c8982d6455564ed3c938e3253ee0d16a4e8325e6f56419892aab4b0df7f6d15";
    // RFC 6979, low-S
    const EMPTY_TX_SIGNATURE_B64: &str =
        "ufL00rEq7ojodTON5PM5zZ4bVDl2rHHbWsVlUV1x6GcTZ4PP5G6nSjEgBbVMfqE/G4ECqJykeJLuQTlG2Tgtow==";

    fn key_pair() -> KeyPair {
        KeyPair::from_private_key(&hex::decode(TEST_PRIVATE_KEY).unwrap()).unwrap()
    }

    fn empty_tx() -> StdTx {
        StdTx::new(
            vec![],
            StdFee::new(vec![], "200000"),
            "",
        )
    }

    fn test_meta() -> SignMeta {
        SignMeta::new("test-chain", "0", "0")
    }

    #[test]
    fn test_empty_tx_digest() {
        let sign_msg = create_sign_msg(&empty_tx(), &test_meta());
        assert_eq!(hex::encode(sign_msg_digest(&sign_msg).unwrap()), EMPTY_TX_DIGEST);
    }

    #[test]
    fn test_sign_tx_fixture() {
        let signed = sign_tx(&empty_tx(), &test_meta(), &key_pair()).unwrap();
        let signatures = signed.signatures();

        assert_eq!(signatures.len(), 1);
        assert_eq!(signatures[0].signature, EMPTY_TX_SIGNATURE_B64);
        assert_eq!(signatures[0].pub_key.key_type, PUBKEY_TYPE);
        assert_eq!(signatures[0].pub_key.value, TEST_PUBLIC_KEY_B64);
    }

    #[test]
    fn test_sign_tx_does_not_mutate_input() {
        let tx = empty_tx();
        let signed = sign_tx(&tx, &test_meta(), &key_pair()).unwrap();
        assert!(tx.signatures.is_none());
        assert_eq!(signed.msg, tx.msg);
        assert_eq!(signed.fee, tx.fee);
        assert_eq!(signed.memo, tx.memo);
    }

    #[test]
    fn test_resign_appends() {
        let once = sign_tx(&empty_tx(), &test_meta(), &key_pair()).unwrap();
        let twice = sign_tx(&once, &test_meta(), &key_pair()).unwrap();

        assert_eq!(twice.signatures().len(), 2);
        assert_eq!(twice.signatures()[0], once.signatures()[0]);
        // deterministic nonce: same key, same message, same signature
        assert_eq!(twice.signatures()[1], once.signatures()[0]);
    }

    #[test]
    fn test_meta_is_bound() {
        let a = sign_tx(&empty_tx(), &test_meta(), &key_pair()).unwrap();
        let b = sign_tx(&empty_tx(), &SignMeta::new("other-chain", "0", "0"), &key_pair())
            .unwrap();
        assert_ne!(a.signatures()[0].signature, b.signatures()[0].signature);
    }

    #[test]
    fn test_float_in_msg_is_encoding_error() {
        let tx = StdTx::new(
            vec![Msg::new("custom/Msg", json!({ "ratio": 0.5 }))],
            StdFee::new(vec![Coin::new("uatom", "1")], "1"),
            "",
        );
        assert!(matches!(
            sign_tx(&tx, &test_meta(), &key_pair()),
            Err(WalletError::Encoding(_))
        ));
    }

    #[test]
    fn test_sign_bytes_matches_signature_bytes() {
        let sign_msg = create_sign_msg(&empty_tx(), &test_meta());
        let canonical = canonical_json_bytes(&sign_msg).unwrap();
        let pair = key_pair();
        assert_eq!(
            sign_bytes(&canonical, pair.private_key()).unwrap(),
            create_signature_bytes(&sign_msg, pair.private_key()).unwrap()
        );
    }

    #[test]
    fn test_signer_struct() {
        let signer =
            CosmosSigner::from_private_key(&hex::decode(TEST_PRIVATE_KEY).unwrap(), "cosmos")
                .unwrap();
        assert_eq!(signer.address(), TEST_ADDRESS);

        let signed = signer.sign_tx(&empty_tx(), &test_meta()).unwrap();
        assert_eq!(signed.signatures()[0].signature, EMPTY_TX_SIGNATURE_B64);
    }

    #[test]
    fn test_invalid_private_key() {
        for bad in [&[1u8; 31][..], &[1u8; 33][..]] {
            assert!(matches!(
                CosmosSigner::from_private_key(bad, "cosmos"),
                Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(_)))
            ));
            assert!(matches!(
                sign_bytes(b"x", bad),
                Err(WalletError::Crypto(CryptoError::SigningFailed(_)))
            ));
        }
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let signer =
            CosmosSigner::from_private_key(&hex::decode(TEST_PRIVATE_KEY).unwrap(), "cosmos")
                .unwrap();
        let debug_output = format!("{:?}", signer);
        assert!(!debug_output.contains(TEST_PRIVATE_KEY));
        assert!(debug_output.contains("CosmosSigner"));
        assert!(debug_output.contains(TEST_ADDRESS));
    }
}
