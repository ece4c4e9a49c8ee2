// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Resource commands against a mock CloudStack endpoint

#![allow(clippy::unwrap_used, clippy::expect_used)]
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]

mod common;

use std::process::Output;

use assert_cmd::Command;
use common::env_cmd;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PATH: &str = "/client/api";

fn envelope(command: &str, payload: Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(json!({ format!("{}response", command.to_lowercase()): payload }))
}

/// Run csctl off the async runtime so the mock server keeps serving
async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "Command should succeed.\nstdout: {}\nstderr: {}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_str(&stdout).unwrap_or_else(|_| panic!("Should parse JSON output: {stdout}"))
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vm_list_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("command", "listVirtualMachines"))
        .and(query_param("state", "Running"))
        .and(query_param("page", "1"))
        .respond_with(envelope(
            "listVirtualMachines",
            json!({
                "count": 2,
                "virtualmachine": [
                    {"id": "vm-1", "name": "web-1", "state": "Running",
                     "nic": [{"id": "nic-1", "ipaddress": "10.1.1.10"}]},
                    {"id": "vm-2", "name": "web-2", "state": "Running"}
                ]
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = env_cmd(dir.path(), &format!("{}{API_PATH}", server.uri()));
    cmd.args(["vm", "list", "--state", "Running", "-j"]);

    let vms = stdout_json(&run(cmd).await);
    let vms = vms.as_array().unwrap();
    assert_eq!(vms.len(), 2);
    assert_eq!(vms[0]["name"], "web-1");
    assert_eq!(vms[0]["nic"][0]["ipaddress"], "10.1.1.10");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vm_list_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("command", "listVirtualMachines"))
        .respond_with(envelope(
            "listVirtualMachines",
            json!({
                "count": 1,
                "virtualmachine": [
                    {"id": "vm-1", "name": "web-1", "state": "Stopped", "zonename": "zone-a"}
                ]
            }),
        ))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = env_cmd(dir.path(), &format!("{}{API_PATH}", server.uri()));
    cmd.args(["vm", "list"]);

    let output = run(cmd).await;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NAME"));
    assert!(stdout.contains("web-1"));
    assert!(stdout.contains("zone-a"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vm_stop_waits_for_job() {
    let server = MockServer::start().await;
    Mock::given(query_param("command", "listVirtualMachines"))
        .and(query_param("id", "vm-1"))
        .respond_with(envelope(
            "listVirtualMachines",
            json!({"count": 1, "virtualmachine": [{"id": "vm-1", "name": "web-1", "state": "Running"}]}),
        ))
        .mount(&server)
        .await;
    Mock::given(query_param("command", "stopVirtualMachine"))
        .and(query_param("id", "vm-1"))
        .and(query_param("forced", "true"))
        .respond_with(envelope("stopVirtualMachine", json!({"jobid": "job-1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(query_param("command", "queryAsyncJobResult"))
        .and(query_param("jobid", "job-1"))
        .respond_with(envelope(
            "queryAsyncJobResult",
            json!({
                "jobid": "job-1",
                "jobstatus": 1,
                "jobresult": {"virtualmachine": {"id": "vm-1", "name": "web-1", "state": "Stopped"}}
            }),
        ))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = env_cmd(dir.path(), &format!("{}{API_PATH}", server.uri()));
    cmd.args(["vm", "stop", "vm-1", "--force", "-j"]);

    let vm = stdout_json(&run(cmd).await);
    assert_eq!(vm["state"], "Stopped");
    assert_eq!(vm["jobid"], "job-1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_async_disabled_returns_job_id() {
    let server = MockServer::start().await;
    Mock::given(query_param("command", "listVirtualMachines"))
        .respond_with(envelope(
            "listVirtualMachines",
            json!({"count": 1, "virtualmachine": [{"id": "vm-1", "name": "web-1"}]}),
        ))
        .mount(&server)
        .await;
    Mock::given(query_param("command", "rebootVirtualMachine"))
        .respond_with(envelope(
            "rebootVirtualMachine",
            json!({"id": "vm-1", "jobid": "job-2"}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(query_param("command", "queryAsyncJobResult"))
        .respond_with(envelope("queryAsyncJobResult", json!({"jobid": "job-2", "jobstatus": 0})))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = env_cmd(dir.path(), &format!("{}{API_PATH}", server.uri()));
    cmd.env("CLOUDSTACK_ASYNC", "false")
        .args(["vm", "reboot", "vm-1", "-j"]);

    let vm = stdout_json(&run(cmd).await);
    assert_eq!(vm["id"], "vm-1");
    assert_eq!(vm["jobid"], "job-2");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_raw_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("command", "listZones"))
        .and(query_param("available", "true"))
        .and(query_param("name", "zone-a"))
        .respond_with(envelope(
            "listZones",
            json!({"count": 1, "zone": [{"id": "zone-1", "name": "zone-a"}]}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = env_cmd(dir.path(), &format!("{}{API_PATH}", server.uri()));
    cmd.args(["api", "listZones", "available=true", "name=zone-a"]);

    let payload = stdout_json(&run(cmd).await);
    assert_eq!(payload["zone"][0]["id"], "zone-1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(query_param("command", "listHosts"))
        .respond_with(ResponseTemplate::new(432).set_body_json(json!({
            "listhostsresponse": {
                "uuidList": [],
                "errorcode": 432,
                "cserrorcode": 9999,
                "errortext": "The given command does not exist or it is not available for user"
            }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = env_cmd(dir.path(), &format!("{}{API_PATH}", server.uri()));
    cmd.args(["host", "list"]);

    let output = run(cmd).await;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not available for user"), "stderr: {stderr}");
}
