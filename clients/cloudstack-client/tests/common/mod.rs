// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared helpers for the wiremock-backed client tests

#![allow(dead_code)]

use std::time::Duration;

use cloudstack_client::{Client, ClientBuilder};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const API_PATH: &str = "/client/api";
pub const API_KEY: &str = "test-api-key";
pub const SECRET_KEY: &str = "test-secret-key";

/// A builder for a client talking to `server` with fast job polling
pub fn builder(server: &MockServer) -> ClientBuilder {
    Client::builder(&format!("{}{}", server.uri(), API_PATH), API_KEY, SECRET_KEY)
        .poll_interval(Duration::from_millis(10))
        .timeout(Duration::from_secs(5))
}

pub fn client(server: &MockServer) -> Client {
    builder(server).build().unwrap()
}

/// A GET of `command` on the API path
pub fn get(command: &str) -> MockBuilder {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("command", command))
}

/// Wrap `payload` the way CloudStack does: `{"<command>response": payload}`
pub fn envelope(command: &str, payload: Value) -> ResponseTemplate {
    let key = format!("{}response", command.to_lowercase());
    ResponseTemplate::new(200).set_body_json(json!({ key: payload }))
}

/// A CloudStack error reply
pub fn api_error(command: &str, status: u16, code: i64, text: &str) -> ResponseTemplate {
    let key = format!("{}response", command.to_lowercase());
    ResponseTemplate::new(status).set_body_json(json!({
        key: {"errorcode": code, "cserrorcode": 9999, "errortext": text}
    }))
}

pub fn job_pending(job_id: &str) -> ResponseTemplate {
    envelope(
        "queryAsyncJobResult",
        json!({"jobid": job_id, "jobstatus": 0, "jobprocstatus": 0}),
    )
}

pub fn job_done(job_id: &str, result: Value) -> ResponseTemplate {
    envelope(
        "queryAsyncJobResult",
        json!({"jobid": job_id, "jobstatus": 1, "jobresultcode": 0, "jobresult": result}),
    )
}

pub fn job_failed(job_id: &str, code: i64, text: &str) -> ResponseTemplate {
    envelope(
        "queryAsyncJobResult",
        json!({
            "jobid": job_id,
            "jobstatus": 2,
            "jobresultcode": 530,
            "jobresult": {"errorcode": code, "errortext": text}
        }),
    )
}
