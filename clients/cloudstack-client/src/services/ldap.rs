// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{
    Account, DomainLdapLink, LdapConfiguration, LdapSettings, ListLdapConfigurationsResponse,
    ListLdapUsersResponse,
};

use crate::command::command;
use crate::params::KeyValues;

command! {
    AddLdapConfiguration("addLdapConfiguration", Sync, Entity) -> LdapConfiguration {
        required { hostname: String, port: i64 }
        optional { domainid: String }
    }

    DeleteLdapConfiguration("deleteLdapConfiguration", Sync, Entity) -> LdapConfiguration {
        required { hostname: String }
        optional { domainid: String, port: i64 }
    }

    ListLdapConfigurations("listLdapConfigurations", Sync, Flat) -> ListLdapConfigurationsResponse {
        required {}
        optional {
            domainid: String,
            hostname: String,
            keyword: String,
            page: i64,
            pagesize: i64,
            port: i64,
        }
    }

    ListLdapUsers("listLdapUsers", Sync, Flat) -> ListLdapUsersResponse {
        required {}
        optional {
            keyword: String,
            /// `NoFilter`, `LocalDomain`, `AnyDomain` or `PotentialImport`
            listtype: String,
            page: i64,
            pagesize: i64,
        }
    }

    /// Create CloudStack accounts for the users of an LDAP group
    ImportLdapUsers("importLdapUsers", Sync, Flat) -> ListLdapUsersResponse {
        required {}
        optional {
            account: String,
            accountdetails: KeyValues,
            accounttype: i64,
            domainid: String,
            group: String,
            keyword: String,
            page: i64,
            pagesize: i64,
            roleid: String,
            timezone: String,
        }
    }

    SearchLdap("searchLdap", Sync, Flat) -> ListLdapUsersResponse {
        required { query: String }
        optional { keyword: String, page: i64, pagesize: i64 }
    }

    LdapCreateAccount("ldapCreateAccount", Sync, Entity) -> Account {
        required { username: String }
        optional {
            account: String,
            accountdetails: KeyValues,
            accountid: String,
            accounttype: i64,
            domainid: String,
            networkdomain: String,
            roleid: String,
            timezone: String,
            userid: String,
        }
    }

    LinkDomainToLdap("linkDomainToLdap", Sync, Entity) -> DomainLdapLink {
        required {
            accounttype: i64,
            domainid: String,
            /// `GROUP` or `OU`
            kind = "type": String,
        }
        optional {
            admin: String,
            ldapdomain: String,
            name: String,
        }
    }

    /// Configure the global LDAP server, or list it with `listall`
    LdapConfig("ldapConfig", Sync, Entity) -> LdapSettings {
        required {}
        optional {
            binddn: String,
            bindpass: String,
            hostname: String,
            listall: bool,
            port: i64,
            queryfilter: String,
            searchbase: String,
            ssl: bool,
            truststore: String,
            truststorepass: String,
        }
    }

    LdapRemove("ldapRemove", Sync, Entity) -> LdapSettings {
        required {}
        optional {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn test_ldap_config_listall_only() {
        let params = LdapConfig::new().listall(true).to_params();
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("listall", "true")]);
        assert!(LdapRemove::new().to_params().is_empty());
        assert_eq!(LdapRemove::NAME, "ldapRemove");
    }
}
