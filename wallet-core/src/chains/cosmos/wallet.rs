// wallet-core/src/chains/cosmos/wallet.rs
//
// Wallet Builder: mnemonic | master key → (address, public key, private key)

use super::address::CosmosAddress;
use crate::crypto::{ecdsa::PUBLIC_KEY_LENGTH, KeyDeriver, KeyPair, MasterKey, WalletMnemonic};
use crate::error::WalletResult;
use zeroize::Zeroizing;

/// Address + key material for one derivation path.
///
/// Derived per call and never cached; dropping it zeroes the private key.
#[derive(Clone)]
pub struct CosmosWallet {
    address: String,
    private_key: Zeroizing<[u8; 32]>,
    public_key: [u8; PUBLIC_KEY_LENGTH],
}

impl std::fmt::Debug for CosmosWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmosWallet")
            .field("address", &self.address)
            .field("public_key", &hex::encode(self.public_key))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Mnemonic → seed → BIP-32 master key
pub fn create_master_key_from_mnemonic(
    mnemonic: &str,
    passphrase: Option<&str>,
) -> WalletResult<MasterKey> {
    let mnemonic = WalletMnemonic::from_phrase(mnemonic)?;
    let seed = mnemonic.to_seed(passphrase)?;
    MasterKey::from_seed(&*seed)
}

impl CosmosWallet {
    /// Wallet from a BIP-39 mnemonic (empty passphrase)
    ///
    /// # Arguments
    /// * `mnemonic` - 12..24 word phrase
    /// * `prefix` - bech32 prefix (e.g. "cosmos")
    /// * `path` - Derivation path (e.g. "m/44'/118'/0'/0/0")
    pub fn from_mnemonic(mnemonic: &str, prefix: &str, path: &str) -> WalletResult<Self> {
        Self::from_mnemonic_with_passphrase(mnemonic, None, prefix, path)
    }

    pub fn from_mnemonic_with_passphrase(
        mnemonic: &str,
        passphrase: Option<&str>,
        prefix: &str,
        path: &str,
    ) -> WalletResult<Self> {
        let master = create_master_key_from_mnemonic(mnemonic, passphrase)?;
        Self::from_master_key(&master, prefix, path)
    }

    pub fn from_master_key(master: &MasterKey, prefix: &str, path: &str) -> WalletResult<Self> {
        let key_pair = KeyDeriver::derive(master, path)?;
        Self::from_key_pair(&key_pair, prefix)
    }

    pub fn from_key_pair(key_pair: &KeyPair, prefix: &str) -> WalletResult<Self> {
        let address = CosmosAddress::from_public_key(key_pair.public_key(), prefix)?;
        Ok(Self {
            address,
            private_key: Zeroizing::new(*key_pair.private_key()),
            public_key: *key_pair.public_key(),
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[inline]
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.public_key
    }

    /// # Warning
    /// Never log or persist this value.
    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// Key pair for signing with this wallet
    pub fn key_pair(&self) -> WalletResult<KeyPair> {
        KeyPair::from_private_key(&*self.private_key)
    }
}
