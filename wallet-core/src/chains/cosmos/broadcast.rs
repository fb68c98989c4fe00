// wallet-core/src/chains/cosmos/broadcast.rs
//
// Broadcast envelope: `{ "tx": <signed tx>, "mode": "sync" | "async" | "block" }`
// Unknown modes are carried through verbatim.

use super::types::StdTx;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BROADCAST_MODE: BroadcastMode = BroadcastMode::Sync;

/// Submission mode understood by the node's legacy REST endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BroadcastMode {
    /// Return after CheckTx
    #[default]
    Sync,
    /// Return immediately
    Async,
    /// Return after the tx is committed
    Block,
    /// Any other mode string, passed through uninterpreted
    Other(String),
}

impl BroadcastMode {
    pub fn as_str(&self) -> &str {
        match self {
            BroadcastMode::Sync => "sync",
            BroadcastMode::Async => "async",
            BroadcastMode::Block => "block",
            BroadcastMode::Other(mode) => mode,
        }
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, BroadcastMode::Other(_))
    }
}

impl From<&str> for BroadcastMode {
    fn from(mode: &str) -> Self {
        match mode {
            "sync" => BroadcastMode::Sync,
            "async" => BroadcastMode::Async,
            "block" => BroadcastMode::Block,
            other => BroadcastMode::Other(other.to_string()),
        }
    }
}

impl From<String> for BroadcastMode {
    fn from(mode: String) -> Self {
        BroadcastMode::from(mode.as_str())
    }
}

impl From<BroadcastMode> for String {
    fn from(mode: BroadcastMode) -> Self {
        mode.as_str().to_string()
    }
}

impl std::fmt::Display for BroadcastMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for the submission transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastTx {
    pub tx: StdTx,
    pub mode: BroadcastMode,
}

/// Wraps a signed transaction for submission; no validation is performed
#[inline]
pub fn create_broadcast_tx(tx: StdTx, mode: BroadcastMode) -> BroadcastTx {
    BroadcastTx { tx, mode }
}
