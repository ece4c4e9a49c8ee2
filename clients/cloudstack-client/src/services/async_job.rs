// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{AsyncJobResult, ListAsyncJobsResponse};

use crate::command::command;

command! {
    /// Fetch the state of an async job
    QueryAsyncJobResult("queryAsyncJobResult", Sync, Flat) -> AsyncJobResult {
        required { jobid: String }
        optional {}
    }

    ListAsyncJobs("listAsyncJobs", Sync, Flat) -> ListAsyncJobsResponse {
        required {}
        optional {
            account: String,
            domainid: String,
            isrecursive: bool,
            keyword: String,
            listall: bool,
            page: i64,
            pagesize: i64,
            projectid: String,
            /// Only jobs started after this date, `yyyy-MM-dd'T'HH:mm:ssZ`
            startdate: String,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, Mode};

    #[test]
    fn test_query_job_is_sync() {
        // Polling must never recurse into job handling
        assert_eq!(QueryAsyncJobResult::MODE, Mode::Sync);
        let params = QueryAsyncJobResult::new("job-1").to_params();
        assert_eq!(params.get("jobid"), Some("job-1"));
        assert_eq!(params.len(), 1);
    }
}
