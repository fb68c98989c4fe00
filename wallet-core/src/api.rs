// wallet-core/src/api.rs
//
// Flat functional API with protocol defaults
// (prefix "cosmos", path m/44'/118'/0'/0/0, broadcast mode "sync").

use crate::chains::cosmos::{
    self, BroadcastMode, BroadcastTx, CosmosAddress, CosmosWallet, SignMeta, StdSignMsg,
    StdSignature, StdTx, DEFAULT_BECH32_PREFIX, DEFAULT_BROADCAST_MODE,
};
use crate::crypto::{DerivationPaths, KeyDeriver, KeyPair, MasterKey};
use crate::error::WalletResult;

/// Default key derivation path
pub const DEFAULT_KEY_PATH: &str = DerivationPaths::COSMOS_0;

// Core Initialization
pub fn init_core() -> WalletResult<()> {
    use tracing_subscriber::EnvFilter;

    // A host application may already own the global subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
    Ok(())
}

// --- Key Management ---

pub fn create_wallet_from_mnemonic(
    mnemonic: &str,
    prefix: Option<&str>,
    path: Option<&str>,
) -> WalletResult<CosmosWallet> {
    CosmosWallet::from_mnemonic(
        mnemonic,
        prefix.unwrap_or(DEFAULT_BECH32_PREFIX),
        path.unwrap_or(DEFAULT_KEY_PATH),
    )
}

pub fn create_master_key_from_mnemonic(mnemonic: &str) -> WalletResult<MasterKey> {
    cosmos::create_master_key_from_mnemonic(mnemonic, None)
}

pub fn create_wallet_from_master_key(
    master: &MasterKey,
    prefix: Option<&str>,
    path: Option<&str>,
) -> WalletResult<CosmosWallet> {
    CosmosWallet::from_master_key(
        master,
        prefix.unwrap_or(DEFAULT_BECH32_PREFIX),
        path.unwrap_or(DEFAULT_KEY_PATH),
    )
}

pub fn create_key_pair_from_master_key(
    master: &MasterKey,
    path: Option<&str>,
) -> WalletResult<KeyPair> {
    KeyDeriver::derive(master, path.unwrap_or(DEFAULT_KEY_PATH))
}

pub fn create_address(public_key: &[u8], prefix: Option<&str>) -> WalletResult<String> {
    CosmosAddress::from_public_key(public_key, prefix.unwrap_or(DEFAULT_BECH32_PREFIX))
}

/// 20-byte account hash behind `address`
pub fn decode_address(address: &str, prefix: Option<&str>) -> WalletResult<[u8; 20]> {
    CosmosAddress::decode(address, prefix.unwrap_or(DEFAULT_BECH32_PREFIX))
}

pub fn is_valid_address(address: &str, prefix: Option<&str>) -> bool {
    CosmosAddress::is_valid(address, prefix.unwrap_or(DEFAULT_BECH32_PREFIX))
}

// --- Signing ---

pub fn create_sign_msg(tx: &StdTx, meta: &SignMeta) -> StdSignMsg {
    cosmos::create_sign_msg(tx, meta)
}

pub fn create_signature(sign_msg: &StdSignMsg, key_pair: &KeyPair) -> WalletResult<StdSignature> {
    cosmos::create_signature(sign_msg, key_pair)
}

pub fn sign_tx(tx: &StdTx, meta: &SignMeta, key_pair: &KeyPair) -> WalletResult<StdTx> {
    cosmos::sign_tx(tx, meta, key_pair)
}

// --- Verification ---

pub fn verify_tx(tx: &StdTx, meta: &SignMeta) -> bool {
    cosmos::verify_tx(tx, meta)
}

pub fn verify_signature(sign_msg: &StdSignMsg, signature: &StdSignature) -> bool {
    cosmos::verify_signature(sign_msg, signature)
}

// --- Broadcast ---

pub fn create_broadcast_tx(tx: StdTx, mode: Option<BroadcastMode>) -> BroadcastTx {
    cosmos::create_broadcast_tx(tx, mode.unwrap_or(DEFAULT_BROADCAST_MODE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::cosmos::{Coin, Msg, StdFee};
    use serde_json::json;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const TEST_ADDRESS: &str = "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4";

    #[test]
    fn test_defaults() {
        let wallet = create_wallet_from_mnemonic(TEST_MNEMONIC, None, None).unwrap();
        assert_eq!(wallet.address(), TEST_ADDRESS);

        let master = create_master_key_from_mnemonic(TEST_MNEMONIC).unwrap();
        let from_master = create_wallet_from_master_key(&master, None, None).unwrap();
        assert_eq!(from_master.address(), TEST_ADDRESS);

        let pair = create_key_pair_from_master_key(&master, None).unwrap();
        assert_eq!(create_address(pair.public_key(), None).unwrap(), TEST_ADDRESS);
    }

    #[test]
    fn test_address_helpers() {
        assert!(is_valid_address(TEST_ADDRESS, None));
        assert!(!is_valid_address(TEST_ADDRESS, Some("osmo")));

        let pair = create_key_pair_from_master_key(
            &create_master_key_from_mnemonic(TEST_MNEMONIC).unwrap(),
            None,
        )
        .unwrap();
        assert_eq!(
            decode_address(TEST_ADDRESS, None).unwrap(),
            crate::crypto::hash::hash160(pair.public_key())
        );
    }

    #[test]
    fn test_end_to_end() {
        init_core().unwrap();
        init_core().unwrap();

        let wallet = create_wallet_from_mnemonic(TEST_MNEMONIC, None, None).unwrap();
        let key_pair = wallet.key_pair().unwrap();
        let tx = StdTx::new(
            vec![Msg::new(
                "cosmos-sdk/MsgSend",
                json!({
                    "from_address": wallet.address(),
                    "to_address": wallet.address(),
                    "amount": [{ "denom": "uatom", "amount": "1" }]
                }),
            )],
            StdFee::new(vec![Coin::new("uatom", "5000")], "200000"),
            "",
        );
        let meta = SignMeta::new("cosmoshub-4", "1", "0");

        let signed = sign_tx(&tx, &meta, &key_pair).unwrap();
        assert!(verify_tx(&signed, &meta));

        let sign_msg = create_sign_msg(&signed, &meta);
        let signature = create_signature(&sign_msg, &key_pair).unwrap();
        assert!(verify_signature(&sign_msg, &signature));
        assert_eq!(signature, signed.signatures()[0]);

        let envelope = create_broadcast_tx(signed.clone(), None);
        assert_eq!(envelope.mode, BroadcastMode::Sync);
        assert_eq!(envelope.tx, signed);
    }
}
