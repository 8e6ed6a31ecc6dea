//! Tests for `buildcreds read`.

use std::collections::HashMap;

use predicates::prelude::*;
use serde_json::json;

use crate::support::vault_stub::{fields, VaultStub};
use crate::support::*;

fn dev_stub() -> VaultStub {
    let mut secrets = HashMap::new();
    secrets.insert(
        "clusters/unileaf-dev-stage/dev/s3CredsLeafBuildDAI".to_string(),
        fields(S3_CREDS),
    );
    secrets.insert(
        "clusters/unileaf-dev-stage/dev/db-creds".to_string(),
        fields(DB_CREDS),
    );
    VaultStub::start(GOOD_GITHUB_TOKEN, secrets)
}

#[test]
fn test_read_prints_exports_in_declaration_order() {
    let t = Test::new();
    let stub = dev_stub();

    let output = t.read("dev", &stub.url, GOOD_GITHUB_TOKEN);

    assert_exit_code(&output, 0);
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        [
            "export AWS_SECRET_ACCESS_KEY=\"secret1\"",
            "export AWS_ACCESS_KEY_ID=\"key1\"",
            "export DB_USERNAME=\"leaf\"",
            "export DB_PASSWORD=\"hunter2\"",
            "export DB_HOST=\"db.internal\"",
            "export DB_PORT=\"5432\"",
            "export DB_NAME=\"unileaf\"",
        ]
    );
    assert_eq!(stub.reads(), 2);
}

#[test]
fn test_read_missing_field_exits_with_keys_not_found() {
    let t = Test::new();
    let mut secrets = HashMap::new();
    secrets.insert(
        "clusters/unileaf-dev-stage/staging/s3CredsLeafBuildDAI".to_string(),
        fields(&[("AWS_SECRET_ACCESS_KEY", "secret1")]),
    );
    secrets.insert(
        "clusters/unileaf-dev-stage/staging/db-creds".to_string(),
        fields(DB_CREDS),
    );
    let stub = VaultStub::start(GOOD_GITHUB_TOKEN, secrets);

    let output = t.read("staging", &stub.url, GOOD_GITHUB_TOKEN);

    assert_exit_code(&output, 3);
    assert_stdout_excludes(&output, "AWS_ACCESS_KEY_ID");
    assert_stdout_contains(&output, "export DB_NAME=\"unileaf\"");
    assert_stderr_contains(
        &output,
        "Key 'AWS_ACCESS_KEY_ID' not found in path 'clusters/unileaf-dev-stage/staging/s3CredsLeafBuildDAI'",
    );
}

#[test]
fn test_read_missing_path_reports_every_field() {
    let t = Test::new();
    let stub = VaultStub::start(GOOD_GITHUB_TOKEN, HashMap::new());

    let output = t.read("prod", &stub.url, GOOD_GITHUB_TOKEN);

    assert_exit_code(&output, 3);
    assert_eq!(stdout(&output), "");
    let err = stderr(&output);
    assert_eq!(err.matches("not found in path").count(), 7);
    assert!(err.contains("clusters/neuroai/prod/db-creds"));
}

#[test]
fn test_read_bad_token_is_login_failure() {
    let t = Test::new();
    let stub = dev_stub();

    let output = t.read("dev", &stub.url, "wrong-token");

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "Vault login failed.");
    assert_stderr_contains(&output, "invalid github token");
    assert_eq!(stub.reads(), 0);
}

#[test]
fn test_read_unreachable_vault_is_login_failure() {
    let t = Test::new();

    let output = t.read("dev", "http://127.0.0.1:1", GOOD_GITHUB_TOKEN);

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "unreachable");
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_read_without_endpoint_is_login_failure() {
    let t = Test::new();

    let output = t.cmd().args(["read", "dev"]).output().unwrap();

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "VAULT_ADDR");
}

#[test]
fn test_read_endpoint_from_environment() {
    let t = Test::new();
    let stub = dev_stub();

    let output = t
        .cmd()
        .env("LEAF_TEAM_VAULT_ADDR", &stub.url)
        .env("VAULT_GITHUB_AUTH_TOKEN", GOOD_GITHUB_TOKEN)
        .args(["read", "dev"])
        .output()
        .unwrap();

    assert_exit_code(&output, 0);
    assert_eq!(stdout(&output).lines().count(), 7);
}

#[test]
fn test_read_bogus_namespace_never_contacts_vault() {
    let t = Test::new();
    let stub = dev_stub();

    let output = t.read("bogus", &stub.url, GOOD_GITHUB_TOKEN);

    assert_exit_code(&output, 2);
    assert_stderr_contains(&output, "Invalid namespace: 'bogus'");
    assert!(stub.requests().is_empty());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_read_login_without_auth_block_is_malformed() {
    let t = Test::new();
    let stub = dev_stub().login_reply(200, json!({ "auth": null }));

    t.cmd()
        .args(["read", "dev", "--vault-url", &stub.url, "--github-token", GOOD_GITHUB_TOKEN])
        .assert()
        .code(1)
        .stdout("")
        .stderr(
            predicate::str::contains("malformed response")
                .and(predicate::str::contains("missing auth block")),
        );
    assert_eq!(stub.reads(), 0);
}

#[test]
fn test_read_sealed_vault_is_unreachable() {
    let t = Test::new();
    let stub = dev_stub().login_reply(503, json!({ "errors": ["sealed"] }));

    t.cmd()
        .args(["read", "dev", "--vault-url", &stub.url, "--github-token", GOOD_GITHUB_TOKEN])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unreachable").and(predicate::str::contains("sealed")));
    assert_eq!(stub.reads(), 0);
}

#[test]
fn test_read_forbidden_path_marks_its_fields_missing() {
    let t = Test::new();
    let stub = dev_stub().read_reply(
        "clusters/unileaf-dev-stage/dev/s3CredsLeafBuildDAI",
        403,
        json!({ "errors": ["permission denied"] }),
    );

    let output = t.read("dev", &stub.url, GOOD_GITHUB_TOKEN);

    assert_exit_code(&output, 3);
    assert_eq!(stderr(&output).matches("not found in path").count(), 2);
    assert_stderr_contains(&output, "secret read failed");
    assert_stdout_excludes(&output, "AWS_");
    assert_eq!(stdout(&output).lines().count(), 5);
    assert_eq!(stub.reads(), 2);
}
