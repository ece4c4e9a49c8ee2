// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Response envelope handling
//!
//! Replies come wrapped as `{"<command>response": {...}}`. Errors use the
//! same wrapper (`{"errorresponse": {...}}` on some versions) with a
//! non-200 status and an `errorcode`/`cserrorcode`/`errortext` body.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::command::Shape;
use crate::error::Error;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    errorcode: i64,
    cserrorcode: i64,
    errortext: String,
}

/// Parse a raw reply into the payload inside the envelope
pub(crate) fn parse(command: &str, status: u16, body: &[u8]) -> Result<Value, Error> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) if status != 200 => {
            return Err(Error::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(body).into_owned(),
            });
        }
        Err(source) => {
            return Err(Error::Decode {
                command: command.to_string(),
                source,
            });
        }
    };

    let payload = strip(value);
    if status != 200 {
        return Err(match serde_json::from_value::<ErrorBody>(payload.clone()) {
            Ok(err) if err.errorcode != 0 || !err.errortext.is_empty() => Error::Api {
                error_code: err.errorcode,
                cs_error_code: err.cserrorcode,
                error_text: err.errortext,
            },
            _ => Error::UnexpectedStatus {
                status,
                body: payload.to_string(),
            },
        });
    }
    Ok(payload)
}

/// Remove the single `"<command>response"` wrapper
fn strip(value: Value) -> Value {
    match value {
        Value::Object(map) if map.len() == 1 => map
            .into_iter()
            .next()
            .map(|(_, inner)| inner)
            .unwrap_or(Value::Null),
        other => other,
    }
}

/// Remove a single entity key, `{"vpc": {...}}` to `{...}`
///
/// Anything that is not a one-key object wrapping an object is returned
/// unchanged, so flat replies such as `{"jobid": "..."}` pass through.
pub(crate) fn unwrap_entity(value: Value) -> Value {
    match value {
        Value::Object(map) if map.len() == 1 && map.values().all(Value::is_object) => map
            .into_iter()
            .next()
            .map(|(_, inner)| inner)
            .unwrap_or(Value::Null),
        other => other,
    }
}

/// Overlay a finished job's result onto the initial reply
///
/// Result fields overwrite placeholders such as `jobstatus`; fields only
/// present in the initial reply (the job id) are kept.
pub(crate) fn merge(initial: Value, result: Value) -> Value {
    match (initial, result) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            base.extend(overlay);
            Value::Object(base)
        }
        (_, result) => result,
    }
}

/// Shape the final payload and decode it
pub(crate) fn decode<T: DeserializeOwned>(
    command: &str,
    shape: Shape,
    payload: Value,
) -> Result<T, Error> {
    let payload = match shape {
        Shape::Entity => unwrap_entity(payload),
        Shape::Flat => payload,
    };
    serde_json::from_value(payload).map_err(|source| Error::Decode {
        command: command.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudstack_api::{ListVpcsResponse, SuccessResponse, Vpc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_strips_envelope() {
        let body = br#"{"listvpcsresponse": {"count": 1, "vpc": [{"id": "v-1"}]}}"#;
        let payload = parse("listVPCs", 200, body).unwrap();
        assert_eq!(payload, json!({"count": 1, "vpc": [{"id": "v-1"}]}));
    }

    #[test]
    fn test_parse_api_error() {
        let body = br#"{"listvpcsresponse": {"uuidList": [], "errorcode": 431,
            "cserrorcode": 4350, "errortext": "Unable to find zone"}}"#;
        let err = parse("listVPCs", 431, body).unwrap_err();
        match err {
            Error::Api {
                error_code,
                cs_error_code,
                error_text,
            } => {
                assert_eq!(error_code, 431);
                assert_eq!(cs_error_code, 4350);
                assert_eq!(error_text, "Unable to find zone");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_non_json_error_page() {
        let err = parse("listVPCs", 502, b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::UnexpectedStatus { status: 502, .. }));
    }

    #[test]
    fn test_parse_invalid_json_success() {
        let err = parse("listVPCs", 200, b"not json").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_unwrap_entity() {
        assert_eq!(
            unwrap_entity(json!({"vpc": {"id": "v-1"}})),
            json!({"id": "v-1"})
        );
        assert_eq!(unwrap_entity(json!({"jobid": "j-1"})), json!({"jobid": "j-1"}));
        assert_eq!(
            unwrap_entity(json!({"id": "v-1", "jobid": "j-1"})),
            json!({"id": "v-1", "jobid": "j-1"})
        );
    }

    #[test]
    fn test_merge_overwrites_placeholders() {
        let merged = merge(
            json!({"id": "v-1", "jobid": "j-1", "jobstatus": 0}),
            json!({"id": "v-1", "name": "prod", "jobstatus": 1}),
        );
        assert_eq!(
            merged,
            json!({"id": "v-1", "jobid": "j-1", "jobstatus": 1, "name": "prod"})
        );
    }

    #[test]
    fn test_decode_entity_and_flat() {
        let vpc: Vpc = decode(
            "createVPC",
            Shape::Entity,
            json!({"vpc": {"id": "v-1", "name": "prod"}}),
        )
        .unwrap();
        assert_eq!(vpc.name, "prod");

        let ok: SuccessResponse =
            decode("deleteVPC", Shape::Flat, json!({"success": "true"})).unwrap();
        assert!(ok.success);

        let list: ListVpcsResponse =
            decode("listVPCs", Shape::Flat, json!({"count": 1, "vpc": [{"id": "v-1"}]})).unwrap();
        assert_eq!(list.vpcs.len(), 1);
    }
}
