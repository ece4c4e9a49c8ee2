// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{
    ListTrafficTypesResponse, ListUsageRecordsResponse, ListUsageTypesResponse, SuccessResponse,
};

use crate::command::command;

command! {
    /// Usage records for a date range, `yyyy-MM-dd` or `yyyy-MM-dd HH:mm:ss`
    ListUsageRecords("listUsageRecords", Sync, Flat) -> ListUsageRecordsResponse {
        required { enddate: String, startdate: String }
        optional {
            account: String,
            accountid: String,
            domainid: String,
            includetags: bool,
            keyword: String,
            page: i64,
            pagesize: i64,
            projectid: String,
            /// Usage type id, see `listUsageTypes`
            kind = "type": i64,
            usageid: String,
        }
    }

    ListUsageTypes("listUsageTypes", Sync, Flat) -> ListUsageTypesResponse {
        required {}
        optional {}
    }

    GenerateUsageRecords("generateUsageRecords", Sync, Flat) -> SuccessResponse {
        required { enddate: String, startdate: String }
        optional { domainid: String }
    }

    /// Drop raw usage records older than `interval` days
    RemoveRawUsageRecords("removeRawUsageRecords", Sync, Flat) -> SuccessResponse {
        required { interval: i64 }
        optional {}
    }

    ListTrafficTypes("listTrafficTypes", Sync, Flat) -> ListTrafficTypesResponse {
        required { physicalnetworkid: String }
        optional { keyword: String, page: i64, pagesize: i64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn test_usage_records_params() {
        let params = ListUsageRecords::new("2026-01-31", "2026-01-01")
            .kind(1)
            .to_params();
        assert_eq!(params.get("startdate"), Some("2026-01-01"));
        assert_eq!(params.get("enddate"), Some("2026-01-31"));
        assert_eq!(params.get("type"), Some("1"));
    }

    #[test]
    fn test_usage_types_takes_no_params() {
        assert!(ListUsageTypes::FIELDS.is_empty());
        assert!(ListUsageTypes::new().to_params().is_empty());
    }
}
