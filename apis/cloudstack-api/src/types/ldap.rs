// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! LDAP integration types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::lenient;

/// An LDAP server CloudStack authenticates against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdapConfiguration {
    pub domainid: String,
    pub hostname: String,
    pub port: i64,
}

/// Global LDAP settings managed by the legacy `ldapConfig` and `ldapRemove`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdapSettings {
    pub binddn: String,
    pub bindpass: String,
    pub hostname: String,
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub port: String,
    pub queryfilter: String,
    pub searchbase: String,
    #[serde(deserialize_with = "lenient::bool_or_string")]
    pub ssl: bool,
}

/// A user entry as seen in the LDAP directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdapUser {
    pub domain: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub principal: String,
    pub username: String,
}

/// Account created from an LDAP user by `ldapCreateAccount`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub accountdetails: BTreeMap<String, String>,
    pub accounttype: i64,
    pub cpuavailable: String,
    pub cpulimit: String,
    pub cputotal: i64,
    pub defaultzoneid: String,
    pub domain: String,
    pub domainid: String,
    pub groups: Vec<String>,
    pub id: String,
    pub iscleanuprequired: bool,
    pub isdefault: bool,
    pub jobid: String,
    pub jobstatus: i64,
    pub memoryavailable: String,
    pub memorylimit: String,
    pub memorytotal: i64,
    pub name: String,
    pub networkdomain: String,
    pub primarystorageavailable: String,
    pub primarystoragelimit: String,
    pub primarystoragetotal: i64,
    pub receivedbytes: i64,
    pub roleid: String,
    pub rolename: String,
    pub roletype: String,
    pub secondarystoragetotal: f64,
    pub sentbytes: i64,
    pub state: String,
    pub user: Vec<AccountUser>,
    pub vmavailable: String,
    pub vmlimit: String,
    pub vmrunning: i64,
    pub vmstopped: i64,
    pub vmtotal: i64,
    pub volumetotal: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountUser {
    pub account: String,
    pub accountid: String,
    pub accounttype: i64,
    pub created: String,
    pub domain: String,
    pub domainid: String,
    pub email: String,
    pub firstname: String,
    pub id: String,
    pub lastname: String,
    pub state: String,
    pub username: String,
}

/// Binding of a CloudStack domain to an LDAP group or OU
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainLdapLink {
    pub accountid: String,
    pub accounttype: i64,
    pub domainid: String,
    pub ldapdomain: String,
    pub name: String,
    pub r#type: String,
}

list_response!(
    ListLdapConfigurationsResponse,
    "ldapconfiguration",
    ldapconfigurations: LdapConfiguration
);
list_response!(
    /// Returned by `listLdapUsers`, `searchLdap` and `importLdapUsers`
    ListLdapUsersResponse,
    "ldapuser",
    ldapusers: LdapUser
);
