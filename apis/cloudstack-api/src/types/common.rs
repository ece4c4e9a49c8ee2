// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across CloudStack services

use serde::{Deserialize, Serialize};

/// A list command's response body
pub trait ListResponse {
    type Item;

    /// Number of matches the server reports
    ///
    /// Some list commands report a count that disagrees with the items
    /// actually returned; use `items().len()` when that matters.
    fn count(&self) -> usize;

    fn items(&self) -> &[Self::Item];

    fn into_items(self) -> Vec<Self::Item>;
}

/// A record addressable by UUID and by name
pub trait Resource {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// Resource tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub account: String,
    pub customer: String,
    pub domain: String,
    pub domainid: String,
    pub key: String,
    pub project: String,
    pub projectid: String,
    pub resourceid: String,
    pub resourcetype: String,
    pub value: String,
}

/// Reply of commands that only report success, mostly deletes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessResponse {
    pub displaytext: String,
    pub jobid: String,
    pub jobstatus: i64,
    #[serde(deserialize_with = "lenient::bool_or_string")]
    pub success: bool,
}

/// Reply of the extract commands, pointing at a download of the resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extract {
    pub accountid: String,
    pub created: String,
    #[serde(rename = "extractId")]
    pub extract_id: String,
    #[serde(rename = "extractMode")]
    pub extract_mode: String,
    pub id: String,
    pub name: String,
    pub resultstring: String,
    pub state: String,
    pub status: String,
    pub storagetype: String,
    pub uploadpercentage: i64,
    pub url: String,
    pub zoneid: String,
    pub zonename: String,
}

/// A network service offered by a network, offering or VPC
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkService {
    pub capability: Vec<ServiceCapability>,
    pub name: String,
    pub provider: Vec<ServiceProvider>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCapability {
    pub canchooseservicecapability: bool,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceProvider {
    pub canenableindividualservice: bool,
    pub destinationphysicalnetworkid: String,
    pub id: String,
    pub name: String,
    pub physicalnetworkid: String,
    pub servicelist: Vec<String>,
    pub state: String,
}

/// Decoders for fields the server encodes inconsistently
pub mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Str(String),
        Int(i64),
        Float(f64),
    }

    /// Accept `true`, `"true"` and their false counterparts
    pub fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<BoolOrString>::deserialize(deserializer)? {
            Some(BoolOrString::Bool(b)) => b,
            Some(BoolOrString::Str(s)) => s.eq_ignore_ascii_case("true"),
            None => false,
        })
    }

    /// Accept an id sent either as a string or as a bare number
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
            Some(StringOrNumber::Str(s)) => s,
            Some(StringOrNumber::Int(n)) => n.to_string(),
            Some(StringOrNumber::Float(f)) => format!("{}", f.trunc()),
            None => String::new(),
        })
    }
}
