//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables the binary reads that must not leak in from the outer environment.
const INHERITED_VARS: &[&str] = &[
    "VAULT_ADDR",
    "VAULT",
    "LEAF_TEAM_VAULT_ADDR",
    "VAULT_LOGIN",
    "VAULT_GITHUB_AUTH_TOKEN",
    "TEMP_DIR_OUTSIDE_CONTAINER",
    "CF_VOLUME_PATH",
    "EPHEMERAL_LEAF_SOURCE_CREDENTIALS",
    "EPHEMERAL_LEAF_PRIVATE_SOURCE_CREDENTIALS",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "BUILDCREDS_LOG",
];

impl Test {
    /// Create a buildcreds command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test repository root
    /// - Every variable buildcreds reads removed
    /// - NO_COLOR set so output can be matched literally
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("buildcreds").expect("failed to find buildcreds binary");
        for var in INHERITED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// A command with both build directories configured.
    pub fn cmd_with_dirs(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("TEMP_DIR_OUTSIDE_CONTAINER", self.scratch.path());
        cmd.env("CF_VOLUME_PATH", self.volume.path());
        cmd
    }

    /// A command with directories, both credentials and AWS keys configured.
    pub fn cmd_with_creds(&self) -> Command {
        let mut cmd = self.cmd_with_dirs();
        cmd.env("EPHEMERAL_LEAF_SOURCE_CREDENTIALS", super::PUBLIC_TOKEN);
        cmd.env("EPHEMERAL_LEAF_PRIVATE_SOURCE_CREDENTIALS", super::PRIVATE_TOKEN);
        cmd.env("AWS_ACCESS_KEY_ID", "key1");
        cmd.env("AWS_SECRET_ACCESS_KEY", "secret1");
        cmd
    }

    /// Shortcut for `buildcreds requirements [item]` with full credentials.
    pub fn requirements(&self, item: Option<&str>) -> Output {
        let mut cmd = self.cmd_with_creds();
        cmd.arg("requirements");
        if let Some(item) = item {
            cmd.arg(item);
        }
        cmd.output().expect("failed to run buildcreds requirements")
    }

    /// Shortcut for `buildcreds read <namespace> --vault-url <url> --github-token <token>`.
    pub fn read(&self, namespace: &str, url: &str, token: &str) -> Output {
        self.cmd()
            .args(["read", namespace, "--vault-url", url, "--github-token", token])
            .output()
            .expect("failed to run buildcreds read")
    }
}
