//! Integration tests for the `convert` and `classify` commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_convert_windows_anchor_path() {
    let env = TestEnv::new();
    env.container_command()
        .args(["convert", r"C:\Users\G\zen-mcp-server\utils\x.py"])
        .assert()
        .success()
        .stdout("/app/project/utils/x.py\n");
}

#[test]
fn test_convert_multiple_paths_in_order() {
    let env = TestEnv::new();
    env.container_command()
        .args([
            "convert",
            "/mnt/c/Users/G/zen-mcp-server/file.py",
            "src/main.py",
            r"C:\Users\G\Documents\standalone.txt",
        ])
        .assert()
        .success()
        .stdout("/app/project/file.py\n/app/project/src/main.py\n/app/project/standalone.txt\n");
}

#[test]
fn test_convert_is_identity_on_host() {
    let env = TestEnv::new();
    env.command()
        .args(["--mode", "local", "convert", r"C:\Users\G\zen-mcp-server\x.py"])
        .assert()
        .success()
        .stdout("C:\\Users\\G\\zen-mcp-server\\x.py\n");
}

#[test]
fn test_convert_as_containerized_from_host() {
    let env = TestEnv::new();
    env.command()
        .args(["--mode", "local", "convert", "--as", "containerized", "src/a.py"])
        .assert()
        .success()
        .stdout("/app/project/src/a.py\n");
}

#[test]
fn test_convert_explain() {
    let env = TestEnv::new();
    env.container_command()
        .args(["convert", "--explain", "/mnt/c/Users/G/project/a.py"])
        .assert()
        .success()
        .stdout("/mnt/c/Users/G/project/a.py\t/app/project/a.py\twsl_mount\tanchor\n");
}

#[test]
fn test_convert_uses_workspace_from_env() {
    let env = TestEnv::new();
    env.container_command()
        .env("MCP_HOST_WORKSPACE_ROOT", "/home/u/ext")
        .args(["convert", "/home/u/ext/data/a.csv"])
        .assert()
        .success()
        .stdout("/workspace/data/a.csv\n");
}

#[test]
fn test_convert_uses_project_config_file() {
    let env = TestEnv::new();
    env.write_file(
        "pathmode.yaml",
        "container_project_root: /srv/code\nproject_anchors: [repo]\n",
    );

    env.container_command()
        .args(["convert", r"D:\work\repo\lib\mod.rs"])
        .assert()
        .success()
        .stdout("/srv/code/lib/mod.rs\n");
}

#[test]
fn test_convert_json() {
    let env = TestEnv::new();
    let stdout = TestEnv::stdout_of({
        let mut cmd = env.container_command();
        cmd.args(["convert", "--format", "json", "src/main.py"]);
        cmd
    });

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json[0]["input"], "src/main.py");
    assert_eq!(json[0]["path"], "/app/project/src/main.py");
    assert_eq!(json[0]["syntax"], "relative");
    assert_eq!(json[0]["rule"], "relative");
}

#[test]
fn test_convert_requires_a_path() {
    let env = TestEnv::new();
    env.command().arg("convert").assert().failure();
}

#[test]
fn test_classify() {
    let env = TestEnv::new();
    env.container_command()
        .args([
            "classify",
            r"C:\x",
            r"\\nas\share\x",
            "/mnt/d/x",
            "/etc/hosts",
            "/app/project/x",
            "x/y",
        ])
        .assert()
        .success()
        .stdout(
            "windows_absolute\nwindows_unc\nwsl_mount\nposix_absolute\nalready_canonical\nrelative\n",
        );
}

#[test]
fn test_debug_logs_basename_fallback() {
    let env = TestEnv::new();
    env.container_command()
        .args(["--debug", "convert", "/tmp/scratch/notes.txt"])
        .assert()
        .success()
        .stdout("/app/project/notes.txt\n")
        .stderr(predicate::str::contains("notes.txt"));
}
