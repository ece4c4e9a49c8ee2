// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Page-walking for list commands

use cloudstack_api::ListResponse;
use tracing::debug;

use crate::client::Client;
use crate::command::Command;
use crate::error::Error;

/// Page size used when the command does not set one
pub const DEFAULT_PAGE_SIZE: usize = 500;

impl Client {
    /// Collect every item of a list command across pages
    ///
    /// Stops at the first empty or short page, or once the number of
    /// collected items reaches the count reported by the server. A reply
    /// without a `count` only ends the walk through its page length. A
    /// command that already sets `page` is executed once.
    pub async fn list_all<C>(
        &self,
        command: C,
    ) -> Result<Vec<<C::Response as ListResponse>::Item>, Error>
    where
        C: Command + Clone,
        C::Response: ListResponse,
    {
        let params = command.to_params();
        // A command pinned to one page gets exactly that page
        if !C::accepts("page") || !C::accepts("pagesize") || params.contains("page") {
            return Ok(self.execute(command).await?.into_items());
        }

        let page_size = params
            .get("pagesize")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let mut items = Vec::new();
        let mut page = 1usize;
        loop {
            let mut request = command.clone();
            request.set_param("page", page.to_string());
            request.set_param("pagesize", page_size.to_string());

            let response = self.execute(request).await?;
            let reported = response.count();
            let batch = response.into_items();
            let fetched = batch.len();
            items.extend(batch);
            debug!(command = C::NAME, page, fetched, total = items.len(), "fetched page");

            let count_reached = reported > 0 && items.len() >= reported;
            if fetched == 0 || fetched < page_size || count_reached {
                return Ok(items);
            }
            page += 1;
        }
    }
}
