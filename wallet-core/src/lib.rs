// wallet-core/src/lib.rs

//! Cosmos SDK wallet core: deterministic key derivation, bech32 addresses
//! and canonical (amino JSON) transaction signing.
//!
//! No network I/O, no persistence, no shared state: every operation is a
//! pure function of its inputs and safe to call from any thread.
//!
//! ```text
//! mnemonic ─► seed ─► MasterKey ─► KeyPair ─► address ─► CosmosWallet
//! StdTx + SignMeta ─► StdSignMsg ─► canonical JSON ─► SHA-256 ─► ECDSA ─► signed StdTx
//! signed StdTx + SignMeta ─► verify_tx ─► bool
//! signed StdTx + mode ─► BroadcastTx
//! ```

pub mod api;
pub mod chains;
pub mod crypto;
pub mod error;

pub use chains::CosmosChainConfig;
pub use error::{WalletError, WalletResult};
