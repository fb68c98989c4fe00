// wallet-core/src/chains/cosmos/mod.rs

//! Cosmos SDK Chain Support (legacy amino JSON signing)
//!
//! # Key Features
//! - **Address Derivation**: bech32 `prefix1...` addresses from compressed public keys via [`CosmosAddress`].
//! - **Wallets**: mnemonic / master key → address + key pair via [`CosmosWallet`].
//! - **Canonical JSON**: deterministic sign bytes via [`canonical_json_bytes`].
//! - **Signing**: append-only multi-signature transactions via [`sign_tx`] / [`CosmosSigner`].
//! - **Verification**: all-or-nothing signature checks via [`verify_tx`].
//! - **Broadcast**: submission envelope via [`create_broadcast_tx`].

pub mod address;
pub mod broadcast;
pub mod canonical;
pub mod signer;
pub mod types;
pub mod verifier;
pub mod wallet;

// Re-exports for cleaner API access
pub use address::{CosmosAddress, DEFAULT_BECH32_PREFIX};
pub use broadcast::{create_broadcast_tx, BroadcastMode, BroadcastTx, DEFAULT_BROADCAST_MODE};
pub use canonical::{canonical_json_bytes, canonical_json_string};
pub use signer::{
    create_sign_msg, create_signature, create_signature_bytes, sign_bytes, sign_tx, CosmosSigner,
};
pub use types::{Coin, Msg, PubKey, SignMeta, StdFee, StdSignMsg, StdSignature, StdTx, PUBKEY_TYPE};
pub use verifier::{verify_signature, verify_signature_bytes, verify_signatures, verify_tx};
pub use wallet::{create_master_key_from_mnemonic, CosmosWallet};
