// wallet-core/src/chains/cosmos/verifier.rs
//
// Signature verification for amino JSON signed transactions
//
// A mismatch is `false`, never an error. Each entry is checked against its own
// embedded public key; which key belongs in which slot is not checked here.

use super::signer::{create_sign_msg, sign_msg_digest};
use super::types::{SignMeta, StdSignMsg, StdSignature, StdTx};
use crate::crypto::{ecdsa, hash::sha256};

/// `true` iff `tx` carries at least one signature and every one verifies
pub fn verify_tx(tx: &StdTx, meta: &SignMeta) -> bool {
    let sign_msg = create_sign_msg(tx, meta);
    verify_signatures(&sign_msg, tx.signatures())
}

/// List policy on a prepared sign message: non-empty and all valid
pub fn verify_signatures(sign_msg: &StdSignMsg, signatures: &[StdSignature]) -> bool {
    if signatures.is_empty() {
        tracing::debug!("no signatures attached");
        return false;
    }

    let digest = match sign_msg_digest(sign_msg) {
        Ok(digest) => digest,
        Err(e) => {
            tracing::warn!(error = %e, "sign message cannot be canonicalized");
            return false;
        }
    };

    signatures.iter().enumerate().all(|(index, signature)| {
        let valid = verify_digest_signature(&digest, signature);
        if !valid {
            tracing::debug!(index, "signature does not verify");
        }
        valid
    })
}

/// Checks one signature entry against a sign message
pub fn verify_signature(sign_msg: &StdSignMsg, signature: &StdSignature) -> bool {
    match sign_msg_digest(sign_msg) {
        Ok(digest) => verify_digest_signature(&digest, signature),
        Err(e) => {
            tracing::warn!(error = %e, "sign message cannot be canonicalized");
            false
        }
    }
}

/// Checks raw signature bytes over `SHA-256(bytes)`
pub fn verify_signature_bytes(bytes: &[u8], signature: &[u8], public_key: &[u8]) -> bool {
    ecdsa::verify_digest(&sha256(bytes), signature, public_key)
}

fn verify_digest_signature(digest: &[u8; 32], signature: &StdSignature) -> bool {
    let decoded = signature
        .signature_bytes()
        .and_then(|sig| Ok((sig, signature.public_key_bytes()?)));
    match decoded {
        Ok((signature_bytes, public_key)) => {
            ecdsa::verify_digest(digest, &signature_bytes, &public_key)
        }
        Err(e) => {
            tracing::debug!(error = %e, "signature entry cannot be decoded");
            false
        }
    }
}
