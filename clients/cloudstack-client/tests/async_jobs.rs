// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Async job polling against a mock CloudStack endpoint

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::time::{Duration, Instant};

use cloudstack_client::services::network::DeleteNetwork;
use cloudstack_client::services::virtual_machine::{DeployVirtualMachine, StopVirtualMachine};
use cloudstack_client::services::vpc::{CreateVpc, RestartVpc};
use cloudstack_client::types::{Vpc, VirtualMachine};
use cloudstack_client::{Client, Error};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};
use wiremock::matchers::{body_string_contains, method, path, query_param};

use common::*;

#[tokio::test]
async fn test_polls_until_job_succeeds() {
    let server = MockServer::start().await;

    get("stopVirtualMachine")
        .and(query_param("id", "vm-1"))
        .respond_with(envelope(
            "stopVirtualMachine",
            json!({"id": "vm-1", "jobid": "job-1"}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    get("queryAsyncJobResult")
        .and(query_param("jobid", "job-1"))
        .respond_with(job_pending("job-1"))
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;
    get("queryAsyncJobResult")
        .and(query_param("jobid", "job-1"))
        .respond_with(job_done(
            "job-1",
            json!({"virtualmachine": {"id": "vm-1", "name": "web-01", "state": "Stopped"}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let vm = client(&server)
        .execute(StopVirtualMachine::new("vm-1"))
        .await
        .unwrap();

    assert_eq!(vm.id, "vm-1");
    assert_eq!(vm.name, "web-01");
    assert_eq!(vm.state, "Stopped");
    // Fields of the initial reply survive the merge
    assert_eq!(vm.jobid, "job-1");
}

#[tokio::test]
async fn test_job_failure_carries_error_text() {
    let server = MockServer::start().await;

    get("deleteNetwork")
        .respond_with(envelope("deleteNetwork", json!({"jobid": "job-2"})))
        .mount(&server)
        .await;
    get("queryAsyncJobResult")
        .respond_with(job_failed("job-2", 530, "Network is in use"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .execute(DeleteNetwork::new("net-1"))
        .await
        .unwrap_err();

    match err {
        Error::JobFailed {
            job_id,
            error_code,
            message,
        } => {
            assert_eq!(job_id, "job-2");
            assert_eq!(error_code, 530);
            assert_eq!(message, "Network is in use");
        }
        other => panic!("expected JobFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_returns_initial_reply() {
    let server = MockServer::start().await;

    get("createVPC")
        .respond_with(envelope(
            "createVPC",
            json!({"id": "vpc-1", "jobid": "job-3"}),
        ))
        .mount(&server)
        .await;
    get("queryAsyncJobResult")
        .respond_with(job_pending("job-3"))
        .mount(&server)
        .await;

    let client = builder(&server)
        .timeout(Duration::from_millis(200))
        .poll_interval(Duration::from_millis(20))
        .build()
        .unwrap();

    let started = Instant::now();
    let err = client
        .execute(CreateVpc::new("10.1.0.0/16", "db", "db", "offering-1", "zone-1"))
        .await
        .unwrap_err();
    let elapsed = started.elapsed();

    assert!(err.is_timeout(), "unexpected error: {err:?}");
    assert!(elapsed >= Duration::from_millis(200));
    // deadline + one poll interval + request overhead
    assert!(elapsed < Duration::from_millis(200 + 20 + 250), "took {elapsed:?}");

    let partial: Vpc = err.partial_response().unwrap();
    assert_eq!(partial.id, "vpc-1");
    assert_eq!(partial.jobid, "job-3");
}

#[tokio::test]
async fn test_last_sleep_is_cut_to_deadline() {
    let server = MockServer::start().await;

    get("queryAsyncJobResult")
        .respond_with(job_pending("job-7"))
        .expect(2)
        .mount(&server)
        .await;

    let client = builder(&server)
        .timeout(Duration::from_millis(150))
        .poll_interval(Duration::from_secs(5))
        .build()
        .unwrap();

    let started = Instant::now();
    let err = client.wait_for_job("job-7").await.unwrap_err();
    let elapsed = started.elapsed();

    assert!(err.is_timeout(), "unexpected error: {err:?}");
    assert!(elapsed >= Duration::from_millis(150));
    assert!(elapsed < Duration::from_secs(1), "took {elapsed:?}");
}

#[tokio::test]
async fn test_query_job_fetches_once() {
    let server = MockServer::start().await;

    get("queryAsyncJobResult")
        .and(query_param("jobid", "job-8"))
        .respond_with(job_pending("job-8"))
        .expect(1)
        .mount(&server)
        .await;

    let job = client(&server).query_job("job-8").await.unwrap();
    assert_eq!(job.jobid, "job-8");
    assert_eq!(job.jobstatus, 0);
}

#[tokio::test]
async fn test_undecodable_poll_aborts_loop() {
    let server = MockServer::start().await;

    get("restartVPC")
        .respond_with(envelope("restartVPC", json!({"jobid": "job-9"})))
        .mount(&server)
        .await;
    get("queryAsyncJobResult")
        .respond_with(ResponseTemplate::new(200).set_body_string("garbage"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .execute(RestartVpc::new("vpc-1"))
        .await
        .unwrap_err();
    assert!(
        matches!(&err, Error::Decode { command, .. } if command == "queryAsyncJobResult"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_failed_poll_request_aborts_loop() {
    let server = MockServer::start().await;

    get("queryAsyncJobResult")
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).wait_for_job("job-10").await.unwrap_err();
    assert!(
        matches!(err, Error::UnexpectedStatus { status: 502, .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_without_job_wait_returns_job_id() {
    let server = MockServer::start().await;

    get("stopVirtualMachine")
        .respond_with(envelope(
            "stopVirtualMachine",
            json!({"id": "vm-1", "jobid": "job-4"}),
        ))
        .mount(&server)
        .await;
    get("queryAsyncJobResult")
        .respond_with(job_pending("job-4"))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::new_without_job_wait(
        &format!("{}{}", server.uri(), API_PATH),
        API_KEY,
        SECRET_KEY,
        true,
    )
    .unwrap();
    let vm = client
        .execute(StopVirtualMachine::new("vm-1"))
        .await
        .unwrap();

    assert_eq!(vm.id, "vm-1");
    assert_eq!(vm.jobid, "job-4");
}

#[tokio::test]
async fn test_deploy_is_posted_as_form() {
    let server = MockServer::start().await;

    wiremock::Mock::given(method("POST"))
        .and(path(API_PATH))
        .and(body_string_contains("command=deployVirtualMachine"))
        .and(body_string_contains("name=web-02"))
        .and(body_string_contains("signature="))
        .respond_with(envelope(
            "deployVirtualMachine",
            json!({"id": "vm-2", "jobid": "job-5"}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    get("queryAsyncJobResult")
        .respond_with(job_done(
            "job-5",
            json!({"virtualmachine": {"id": "vm-2", "name": "web-02", "state": "Running"}}),
        ))
        .mount(&server)
        .await;

    let vm: VirtualMachine = client(&server)
        .execute(DeployVirtualMachine::new("so-1", "tpl-1", "zone-1").name("web-02"))
        .await
        .unwrap();

    assert_eq!(vm.state, "Running");
}

#[tokio::test]
async fn test_get_only_sends_deploy_as_query() {
    let server = MockServer::start().await;

    get("deployVirtualMachine")
        .respond_with(envelope(
            "deployVirtualMachine",
            json!({"id": "vm-3", "jobid": "job-6"}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    get("queryAsyncJobResult")
        .respond_with(job_done(
            "job-6",
            json!({"virtualmachine": {"id": "vm-3", "name": "web-03"}}),
        ))
        .mount(&server)
        .await;

    let client = builder(&server).http_get_only(true).build().unwrap();
    let vm = client
        .execute(DeployVirtualMachine::new("so-1", "tpl-1", "zone-1"))
        .await
        .unwrap();

    assert_eq!(vm.name, "web-03");
}
