// wallet-core/src/chains/cosmos/types.rs
//
// Cosmos SDK legacy (amino JSON) transaction model
// Field names are wire-fixed; do not rename.

use crate::error::{EncodingError, WalletError, WalletResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Public key type tag embedded in every signature
pub const PUBKEY_TYPE: &str = "tendermint/PubKeySecp256k1";

/// Token amount (`amount` is a decimal integer string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// Fee; extra members such as `granter` or `payer` are kept and signed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StdFee {
    pub fn new(amount: Vec<Coin>, gas: impl Into<String>) -> Self {
        Self {
            amount,
            gas: gas.into(),
            extra: Map::new(),
        }
    }
}

/// A transaction message: amino type tag plus arbitrary JSON body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Msg {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub value: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Msg {
    pub fn new(msg_type: impl Into<String>, value: Value) -> Self {
        Self {
            msg_type: msg_type.into(),
            value,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub key_type: String,
    /// base64 compressed secp256k1 point
    pub value: String,
}

/// One attached signature, carrying the signer's own public key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    /// base64 compact `r || s`
    pub signature: String,
    pub pub_key: PubKey,
}

impl StdSignature {
    /// Raw compact signature bytes
    pub fn signature_bytes(&self) -> WalletResult<Vec<u8>> {
        decode_base64(&self.signature)
    }

    /// Raw SEC1 public key bytes
    pub fn public_key_bytes(&self) -> WalletResult<Vec<u8>> {
        decode_base64(&self.pub_key.value)
    }
}

fn decode_base64(value: &str) -> WalletResult<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|e| WalletError::Encoding(EncodingError::InvalidBase64(e.to_string())))
}

/// Transaction, signed or not.
///
/// `signatures` is `None` until the first signature is attached and only ever
/// grows by appending. Unknown sibling fields survive a round trip through
/// `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdTx {
    pub msg: Vec<Msg>,
    pub fee: StdFee,
    #[serde(default)]
    pub memo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<StdSignature>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StdTx {
    pub fn new(msg: Vec<Msg>, fee: StdFee, memo: impl Into<String>) -> Self {
        Self {
            msg,
            fee,
            memo: memo.into(),
            signatures: None,
            extra: Map::new(),
        }
    }

    #[inline]
    pub fn signatures(&self) -> &[StdSignature] {
        self.signatures.as_deref().unwrap_or_default()
    }
}

/// Context bound into every signature; not part of the transaction body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignMeta {
    pub chain_id: String,
    pub account_number: String,
    pub sequence: String,
}

impl SignMeta {
    pub fn new(
        chain_id: impl Into<String>,
        account_number: impl Into<String>,
        sequence: impl Into<String>,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            account_number: account_number.into(),
            sequence: sequence.into(),
        }
    }
}

/// The exact value that is canonicalized, hashed and signed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StdSignMsg {
    pub account_number: String,
    pub chain_id: String,
    pub fee: StdFee,
    pub memo: String,
    pub msgs: Vec<Msg>,
    pub sequence: String,
}

impl StdSignMsg {
    /// Builds the sign message from the fixed field set; `msgs` keeps tx order
    pub fn new(tx: &StdTx, meta: &SignMeta) -> Self {
        Self {
            account_number: meta.account_number.clone(),
            chain_id: meta.chain_id.clone(),
            fee: tx.fee.clone(),
            memo: tx.memo.clone(),
            msgs: tx.msg.clone(),
            sequence: meta.sequence.clone(),
        }
    }
}
