// wallet-core/src/chains/cosmos/canonical.rs
//
// Canonical JSON - the byte form every signer and verifier must agree on
//
// - Object keys sorted by raw UTF-8 bytes, at every depth
// - Arrays keep element order
// - No insignificant whitespace
// - Strings use standard JSON escaping; integers print in plain decimal
// - Floating point numbers are rejected

use crate::error::{EncodingError, WalletError, WalletResult};
use serde::Serialize;
use serde_json::{Number, Value};

/// Canonical JSON bytes of any serializable value
pub fn canonical_json_bytes<T: Serialize + ?Sized>(value: &T) -> WalletResult<Vec<u8>> {
    let value = serde_json::to_value(value)
        .map_err(|e| WalletError::Encoding(EncodingError::Serialize(e.to_string())))?;

    let mut out = Vec::with_capacity(256);
    write_value(&value, &mut out)?;
    Ok(out)
}

/// Canonical JSON as a `String`
pub fn canonical_json_string<T: Serialize + ?Sized>(value: &T) -> WalletResult<String> {
    let bytes = canonical_json_bytes(value)?;
    String::from_utf8(bytes)
        .map_err(|e| WalletError::Encoding(EncodingError::Serialize(e.to_string())))
}

fn write_value(value: &Value, out: &mut Vec<u8>) -> WalletResult<()> {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Number(n) => write_number(n, out)?,
        Value::String(s) => write_string(s, out)?,
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(item, out)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_string(key, out)?;
                out.push(b':');
                write_value(item, out)?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}

fn write_number(n: &Number, out: &mut Vec<u8>) -> WalletResult<()> {
    if let Some(i) = n.as_i64() {
        out.extend_from_slice(i.to_string().as_bytes());
    } else if let Some(u) = n.as_u64() {
        out.extend_from_slice(u.to_string().as_bytes());
    } else {
        return Err(WalletError::Encoding(EncodingError::NonCanonicalNumber(
            n.to_string(),
        )));
    }
    Ok(())
}

fn write_string(s: &str, out: &mut Vec<u8>) -> WalletResult<()> {
    serde_json::to_writer(&mut *out, s)
        .map_err(|e| WalletError::Encoding(EncodingError::Serialize(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::cosmos::types::{SignMeta, StdFee, StdSignMsg, StdTx};
    use serde_json::json;
    use std::collections::HashMap;

    const EMPTY_TX_SIGN_BYTES: &str = r#"{"account_number":"0","chain_id":"test-chain","fee":{"amount":[],"gas":"200000"},"memo":"","msgs":[],"sequence":"0"}"#;

    #[test]
    fn test_empty_tx_fixture() {
        let tx = StdTx::new(
            vec![],
            StdFee::new(vec![], "200000"),
            "",
        );
        let meta = SignMeta::new("test-chain", "0", "0");
        let sign_msg = StdSignMsg::new(&tx, &meta);

        assert_eq!(canonical_json_string(&sign_msg).unwrap(), EMPTY_TX_SIGN_BYTES);
    }

    #[test]
    fn test_key_order_independent() {
        let a = json!({ "b": 1, "a": { "y": [3, 1], "x": null } });
        let mut inner = HashMap::new();
        inner.insert("x", json!(null));
        inner.insert("y", json!([3, 1]));
        let mut b = HashMap::new();
        b.insert("a", json!(inner));
        b.insert("b", json!(1));

        assert_eq!(
            canonical_json_bytes(&a).unwrap(),
            canonical_json_bytes(&b).unwrap()
        );
        assert_eq!(
            canonical_json_string(&a).unwrap(),
            r#"{"a":{"x":null,"y":[3,1]},"b":1}"#
        );
    }

    #[test]
    fn test_bytewise_key_order() {
        let value = json!({ "a": 1, "B": 2, "_": 3, "aa": 4 });
        assert_eq!(
            canonical_json_string(&value).unwrap(),
            r#"{"B":2,"_":3,"a":1,"aa":4}"#
        );
    }

    #[test]
    fn test_arrays_keep_order() {
        let value = json!([{ "z": true, "a": false }, "s", -5]);
        assert_eq!(
            canonical_json_string(&value).unwrap(),
            r#"[{"a":false,"z":true},"s",-5]"#
        );
    }

    #[test]
    fn test_string_escaping() {
        let value = json!({ "memo": "line\n\"quoted\" \\ ünï" });
        assert_eq!(
            canonical_json_string(&value).unwrap(),
            "{\"memo\":\"line\\n\\\"quoted\\\" \\\\ ünï\"}"
        );
    }

    #[test]
    fn test_large_integers() {
        let value = json!({ "max": u64::MAX, "min": i64::MIN });
        assert_eq!(
            canonical_json_string(&value).unwrap(),
            format!(r#"{{"max":{},"min":{}}}"#, u64::MAX, i64::MIN)
        );
    }

    #[test]
    fn test_float_rejected() {
        let value = json!({ "amount": 1.5 });
        assert!(matches!(
            canonical_json_bytes(&value),
            Err(WalletError::Encoding(EncodingError::NonCanonicalNumber(_)))
        ));
    }

    #[test]
    fn test_non_string_keys_rejected() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], "x");
        assert!(matches!(
            canonical_json_bytes(&map),
            Err(WalletError::Encoding(EncodingError::Serialize(_)))
        ));
    }
}
