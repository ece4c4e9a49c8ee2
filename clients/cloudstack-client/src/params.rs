// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Query parameter bag and the encodings of typed field values
//!
//! Scalars are written as-is, string lists are comma joined, and the three
//! map shapes CloudStack understands are spelled out with indexed keys:
//!
//! ```text
//! KeyValues         tags[0].key=env&tags[0].value=prod
//! Details           details[0].cpuNumber=2&details[1].memory=2048
//! ServiceProviders  serviceproviderlist[0].service=Dhcp&serviceproviderlist[0].provider=VirtualRouter
//! ```
//!
//! Map entries are numbered in key order.

use std::collections::BTreeMap;

/// Ordered string-to-string parameter map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A typed field value that knows how to write itself into [`Params`]
pub trait ParamValue {
    fn write(&self, key: &str, params: &mut Params);
}

impl ParamValue for String {
    fn write(&self, key: &str, params: &mut Params) {
        params.set(key, self.as_str());
    }
}

impl ParamValue for bool {
    fn write(&self, key: &str, params: &mut Params) {
        params.set(key, self.to_string());
    }
}

impl ParamValue for i64 {
    fn write(&self, key: &str, params: &mut Params) {
        params.set(key, self.to_string());
    }
}

impl ParamValue for Vec<String> {
    fn write(&self, key: &str, params: &mut Params) {
        params.set(key, self.join(","));
    }
}

/// `key[i].key=k` / `key[i].value=v` pairs, used for tags and similar maps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValues(pub BTreeMap<String, String>);

impl ParamValue for KeyValues {
    fn write(&self, key: &str, params: &mut Params) {
        for (i, (k, v)) in self.0.iter().enumerate() {
            params.set(format!("{key}[{i}].key"), k.as_str());
            params.set(format!("{key}[{i}].value"), v.as_str());
        }
    }
}

/// `key[i].<name>=v` entries, used for VM and offering details
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details(pub BTreeMap<String, String>);

impl ParamValue for Details {
    fn write(&self, key: &str, params: &mut Params) {
        for (i, (k, v)) in self.0.iter().enumerate() {
            params.set(format!("{key}[{i}].{k}"), v.as_str());
        }
    }
}

/// Service name to provider name, for network offerings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceProviders(pub BTreeMap<String, String>);

impl ParamValue for ServiceProviders {
    fn write(&self, key: &str, params: &mut Params) {
        for (i, (service, provider)) in self.0.iter().enumerate() {
            params.set(format!("{key}[{i}].service"), service.as_str());
            params.set(format!("{key}[{i}].provider"), provider.as_str());
        }
    }
}

macro_rules! map_from_pairs {
    ($($ty:ident),+) => {
        $(
            impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for $ty {
                fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                    Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
                }
            }

            impl From<BTreeMap<String, String>> for $ty {
                fn from(map: BTreeMap<String, String>) -> Self {
                    Self(map)
                }
            }
        )+
    };
}

map_from_pairs!(KeyValues, Details, ServiceProviders);
