use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

// Unless a test points DYNECT_API_URL at a mock server, the API is a closed
// port.
fn dynect_zones(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dynect-zones").unwrap();
    cmd.current_dir(dir.path())
        .env("DYNECT_API_URL", "http://127.0.0.1:9")
        .env("RUST_LOG", "info");
    cmd
}

#[test]
fn test_no_mode_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    dynect_zones(&dir)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--zones").and(predicate::str::contains("--nodes")));
}

#[test]
fn test_both_modes_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    dynect_zones(&dir)
        .args(["-z", "-n"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_missing_credentials_file() {
    let dir = tempfile::tempdir().unwrap();
    dynect_zones(&dir)
        .arg("--zones")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("credentials.cfg"));
}

#[test]
fn test_incomplete_credentials_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("creds.ini"), "[Dynect]\nuser : ops\n").unwrap();
    dynect_zones(&dir)
        .args(["-n", "-c", "creds.ini"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("customer"));
}

fn write_credentials(dir: &tempfile::TempDir) {
    std::fs::write(
        dir.path().join("credentials.cfg"),
        "[Dynect]\nuser : ops\ncustomer : acme\npassword : secret\n",
    )
    .unwrap();
}

#[test]
fn test_unreachable_api_leaves_output_file() {
    let dir = tempfile::tempdir().unwrap();
    write_credentials(&dir);
    std::fs::write(dir.path().join("zones.txt"), "keep.com\n").unwrap();

    dynect_zones(&dir)
        .args(["-z", "-f", "zones.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("zones.txt")).unwrap(),
        "keep.com\n"
    );
}

#[test]
fn test_rejected_login_leaves_output_file() {
    let server = MockServer::start();
    let login_mock = server.mock(|when, then| {
        when.method(POST).path("/REST/Session/");
        then.status(400).json_body(json!({
            "status": "failure",
            "data": {},
            "msgs": [{"INFO": "login: Credentials you entered did not match", "SOURCE": "BLL", "ERR_CD": "INVALID_DATA", "LVL": "ERROR"}]
        }));
    });
    let zones_mock = server.mock(|when, then| {
        when.method(GET).path("/REST/Zone/");
        then.status(200)
            .json_body(json!({"status": "success", "data": [], "msgs": []}));
    });

    let dir = tempfile::tempdir().unwrap();
    write_credentials(&dir);
    std::fs::write(dir.path().join("zones.txt"), "keep.com\n").unwrap();

    dynect_zones(&dir)
        .env("DYNECT_API_URL", server.url(""))
        .args(["-z", "-f", "zones.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Incorrect credentials"));

    login_mock.assert();
    assert_eq!(zones_mock.hits(), 0);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("zones.txt")).unwrap(),
        "keep.com\n"
    );
}

#[test]
fn test_unopenable_output_file_still_prints_zones() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/REST/Session/");
        then.status(200).json_body(json!({
            "status": "success",
            "data": {"token": "tok", "version": "3.7.0"},
            "msgs": []
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/REST/Zone/");
        then.status(200).json_body(json!({
            "status": "success",
            "data": ["/REST/Zone/a.com/", "/REST/Zone/b.com/"],
            "msgs": []
        }));
    });
    let logout_mock = server.mock(|when, then| {
        when.method(DELETE).path("/REST/Session/");
        then.status(200)
            .json_body(json!({"status": "success", "data": {}, "msgs": []}));
    });

    let dir = tempfile::tempdir().unwrap();
    write_credentials(&dir);

    dynect_zones(&dir)
        .env("DYNECT_API_URL", server.url(""))
        .args(["--zones", "--file", "missing/zones.txt"])
        .assert()
        .success()
        .stdout("a.com\nb.com\n")
        .stderr(predicate::str::contains("Unable to open"));

    logout_mock.assert();
    assert!(!dir.path().join("missing").exists());
}
