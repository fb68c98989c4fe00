// src/chains/mod.rs
pub mod cosmos;

use crate::crypto::{paths::coin_type, DerivationPaths};
use crate::error::WalletResult;
use cosmos::{CosmosWallet, SignMeta, StdFee};
use serde::{Deserialize, Serialize};

// Cấu hình chung cho các Cosmos SDK chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmosChainConfig {
    pub chain_id: String,
    pub name: String,
    pub bech32_prefix: String,
    pub coin_type: u32,
    pub derivation_path: String,
    pub denom: String,
    pub default_gas: String,
}

// Helper để tạo nhanh config cho các mạng phổ biến
impl CosmosChainConfig {
    pub fn cosmos_hub() -> Self {
        Self {
            chain_id: "cosmoshub-4".to_string(),
            name: "Cosmos Hub".to_string(),
            bech32_prefix: "cosmos".to_string(),
            coin_type: coin_type::COSMOS,
            derivation_path: DerivationPaths::COSMOS_0.to_string(),
            denom: "uatom".to_string(),
            default_gas: "200000".to_string(),
        }
    }

    pub fn cosmos_testnet() -> Self {
        Self {
            chain_id: "theta-testnet-001".to_string(),
            name: "Cosmos Hub Testnet".to_string(),
            ..Self::cosmos_hub()
        }
    }

    pub fn osmosis() -> Self {
        Self {
            chain_id: "osmosis-1".to_string(),
            name: "Osmosis".to_string(),
            bech32_prefix: "osmo".to_string(),
            denom: "uosmo".to_string(),
            ..Self::cosmos_hub()
        }
    }

    /// Sign metadata for this chain at the given account state
    pub fn sign_meta(&self, account_number: u64, sequence: u64) -> SignMeta {
        SignMeta::new(
            self.chain_id.clone(),
            account_number.to_string(),
            sequence.to_string(),
        )
    }

    /// Fee paying `amount` of the chain's denom with the default gas limit
    pub fn fee(&self, amount: u64) -> StdFee {
        StdFee::new(
            vec![cosmos::Coin::new(self.denom.clone(), amount.to_string())],
            self.default_gas.clone(),
        )
    }

    /// Wallet at this chain's prefix and derivation path
    pub fn wallet_from_mnemonic(&self, mnemonic: &str) -> WalletResult<CosmosWallet> {
        CosmosWallet::from_mnemonic(mnemonic, &self.bech32_prefix, &self.derivation_path)
    }
}

impl Default for CosmosChainConfig {
    fn default() -> Self {
        Self::cosmos_hub()
    }
}
