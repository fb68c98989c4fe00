// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - BIP-44 paths for Cosmos SDK chains
// BIP-44 (Purpose), SLIP-44 (Coin Types)

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 coin types used by Cosmos SDK chains (all secp256k1)
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    /// Cosmos Hub, Osmosis, Celestia, Juno, ... share 118
    pub const COSMOS: u32 = 118;
    pub const TERRA: u32 = 330;
    pub const KAVA: u32 = 459;
    pub const SECRET: u32 = 529;
    pub const CRYPTO_ORG: u32 = 394;
}

/// BIP-44 purpose field
pub const BIP44_PURPOSE: u32 = 44;

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Pre-built Derivation Paths
///
/// # Convention
/// BIP-44: `m/44'/coin'/account'/change/index`: purpose, coin and account
/// hardened; change and index normal.
pub struct DerivationPaths;

impl DerivationPaths {
    /// Default Cosmos key path: coin 118, account/change/index 0
    pub const COSMOS_0: &'static str = "m/44'/118'/0'/0/0";

    /// Cosmos path with custom address index
    #[inline]
    pub fn cosmos(index: u32) -> String {
        Self::bip44(BIP44_PURPOSE, coin_type::COSMOS, 0, 0, index)
    }

    /// Cosmos path with custom account & index (multi-account)
    #[inline]
    pub fn cosmos_account(account: u32, index: u32) -> String {
        Self::bip44(BIP44_PURPOSE, coin_type::COSMOS, account, 0, index)
    }

    /// Tạo BIP-44 path tùy chỉnh
    ///
    /// # Arguments
    /// * `purpose` - 44 (BIP-44)
    /// * `coin_type` - SLIP-44 coin type (dùng constants từ `coin_type::*`)
    /// * `account` - Account index (thường 0)
    /// * `change` - 0 = external, 1 = internal
    /// * `index` - Address index
    #[inline]
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32, index: u32) -> String {
        format!(
            "m/{}'/{}'/{}'/{}/{}",
            purpose, coin_type, account, change, index
        )
    }
}
