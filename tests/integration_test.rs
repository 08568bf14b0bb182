use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::{Server, ServerGuard};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn githubrel(url: &str) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("githubrel"));
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_API_URL")
        .arg("--api-url")
        .arg(url);
    cmd
}

fn mock_latest(server: &mut ServerGuard, repo: &str, tag: &str) -> mockito::Mock {
    server
        .mock("GET", format!("/repos/{}/releases/latest", repo).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{
                "tag_name": "{tag}",
                "name": "Release {tag}",
                "html_url": "https://github.com/{repo}/releases/tag/{tag}",
                "published_at": "2023-01-01T12:00:00Z"
            }}"#
        ))
        .create()
}

#[test]
fn test_get_text_and_json() {
    let mut server = Server::new();
    let url = server.url();
    let _mock = mock_latest(&mut server, "owner/repo", "v1.2.3");

    githubrel(&url)
        .arg("get")
        .arg("owner/repo")
        .assert()
        .success()
        .stdout("v1.2.3\n");

    let output = githubrel(&url)
        .arg("--output")
        .arg("json")
        .arg("get")
        .arg("owner/repo")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["repository"], "owner/repo");
    assert_eq!(value["tag_name"], "v1.2.3");
    assert_eq!(value["name"], "Release v1.2.3");
    assert_eq!(
        value["html_url"],
        "https://github.com/owner/repo/releases/tag/v1.2.3"
    );
    assert_eq!(value["published_at"], "2023-01-01T12:00:00Z");
}

#[test]
fn test_get_sends_token() {
    let mut server = Server::new();
    let url = server.url();
    let mock = server
        .mock("GET", "/repos/owner/repo/releases/latest")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_body(r#"{"tag_name": "v1.0.0"}"#)
        .create();

    githubrel(&url)
        .env("GITHUB_TOKEN", "secret-token")
        .arg("get")
        .arg("owner/repo")
        .assert()
        .success()
        .stdout("v1.0.0\n");

    mock.assert();
}

#[test]
fn test_get_failures() {
    let mut server = Server::new();
    let url = server.url();
    let _not_found = server
        .mock("GET", "/repos/owner/missing/releases/latest")
        .with_status(404)
        .create();
    let _limited = server
        .mock("GET", "/repos/owner/limited/releases/latest")
        .with_status(403)
        .create();

    githubrel(&url)
        .arg("get")
        .arg("owner/missing")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no release found for owner/missing"))
        .stderr(predicate::str::contains("404 Not Found"));

    githubrel(&url)
        .arg("get")
        .arg("owner/limited")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN"));

    githubrel(&url)
        .arg("get")
        .arg("not-a-repo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid repository format"));
}

#[test]
fn test_unsupported_output_format() {
    let mut server = Server::new();
    let url = server.url();
    let _mock = mock_latest(&mut server, "owner/repo", "v1.0.0");

    githubrel(&url)
        .arg("-o")
        .arg("yaml")
        .arg("get")
        .arg("owner/repo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format: yaml"));
}

#[test]
fn test_bulk_get() {
    let mut server = Server::new();
    let url = server.url();
    let _a = mock_latest(&mut server, "owner/repo1", "v1.0.0");
    let _b = mock_latest(&mut server, "owner/repo2", "v2.0.0");
    let _c = server
        .mock("GET", "/repos/owner/repo3/releases/latest")
        .with_status(404)
        .create();

    let dir = tempdir().unwrap();
    let file = dir.path().join("repos.txt");
    std::fs::write(
        &file,
        "# tracked repositories\nowner/repo1\n\n  owner/repo2  \nowner/repo3\n",
    )
    .unwrap();

    githubrel(&url)
        .arg("bulk-get")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "owner/repo1: v1.0.0\nowner/repo2: v2.0.0\nowner/repo3: ERROR - no release found for owner/repo3: ",
        ))
        .stdout(predicate::str::contains("404 Not Found"));

    let output = githubrel(&url)
        .arg("-o")
        .arg("json")
        .arg("bulk-get")
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1]["tag"], "v2.0.0");
    assert!(items[1].get("error").is_none());
    assert!(items[2].get("tag").is_none());
}

#[test]
fn test_bulk_get_missing_and_empty_file() {
    let server = Server::new();
    let url = server.url();
    let dir = tempdir().unwrap();

    githubrel(&url)
        .arg("bulk-get")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing.txt"));

    let empty = dir.path().join("empty.txt");
    std::fs::write(&empty, "# nothing here\n\n").unwrap();
    githubrel(&url)
        .arg("bulk-get")
        .arg(&empty)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no repositories found in file"));
}

#[test]
fn test_history() {
    let mut server = Server::new();
    let url = server.url();
    let _a = mock_latest(&mut server, "owner/same", "v1.0.0");
    let _b = mock_latest(&mut server, "owner/newer", "v1.1.0");

    let dir = tempdir().unwrap();
    let file = dir.path().join("history.txt");
    std::fs::write(&file, "owner/same:v1.0.0\nowner/newer: v1.0.0\n").unwrap();

    githubrel(&url)
        .arg("history")
        .arg(&file)
        .assert()
        .success()
        .stdout("owner/same: v1.0.0\nowner/newer: v1.0.0 -> v1.1.0\n");
}

#[test]
fn test_history_malformed_line() {
    let server = Server::new();
    let url = server.url();
    let dir = tempdir().unwrap();
    let file = dir.path().join("history.txt");
    std::fs::write(&file, "owner/repo:v1.0.0\nowner/other\n").unwrap();

    githubrel(&url)
        .arg("history")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid format at line 2"));
}

#[test]
fn test_mcp_session() {
    let mut server = Server::new();
    let url = server.url();
    let _mock = mock_latest(&mut server, "owner/repo", "v4.0.0");

    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2025-03-26","capabilities":{},"clientInfo":{"name":"test","version":"0"}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"get_release","arguments":{"repository":"owner/repo"}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"compare_history","arguments":{"entries":[]}}}"#,
        "\n",
    );

    let output = githubrel(&url)
        .arg("mcp")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let responses: Vec<Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(responses.len(), 4);

    assert_eq!(
        responses[0]["result"]["serverInfo"]["name"],
        "github-releases"
    );
    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 3);

    let call = &responses[2]["result"];
    assert_eq!(call["isError"], false);
    assert_eq!(call["structuredContent"]["tag_name"], "v4.0.0");

    let empty = &responses[3]["result"];
    assert_eq!(empty["isError"], true);
    assert_eq!(empty["content"][0]["text"], "no entries provided");
}

#[test]
fn test_version_subcommand() {
    Command::new(cargo::cargo_bin!("githubrel"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("githubrel version "));
}
