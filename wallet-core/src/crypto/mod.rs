// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! Chain-agnostic primitives consumed by the Cosmos signing protocol:
//!
//! - **Hashing**: SHA-256 / RIPEMD-160 via [`hash`].
//! - **ECDSA**: deterministic secp256k1 sign/verify over digests via [`ecdsa`].
//! - **Mnemonic**: BIP-39 phrase validation and seed derivation via [`WalletMnemonic`].
//! - **Key Derivation**: BIP-32 master key → key pair via [`KeyDeriver`].
//! - **Derivation Paths**: BIP-44 path builders via [`DerivationPaths`].

pub mod ecdsa;
pub mod hash;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use key_deriver::{KeyDeriver, KeyPair, MasterKey};
pub use mnemonic::WalletMnemonic;
pub use paths::DerivationPaths;
