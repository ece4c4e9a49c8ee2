// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! JSON output

use std::io::Write;

use anyhow::Context;
use serde::Serialize;

/// Write `value` to stdout as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    write_json(&mut std::io::stdout().lock(), value)
}

/// Write `value` as pretty JSON plus a trailing newline
fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to encode JSON output")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_write_json_is_pretty_with_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &json!({"id": "vm-1"})).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\n  \"id\": \"vm-1\"\n}\n");
    }
}
