use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use vibegit_testing::TestWorld;

#[test]
fn test_health_json_payload() {
    let world = TestWorld::new();

    let result = world.run(&["health", "--format", "json"]).unwrap();
    assert!(result.success());
    assert_eq!(result.stdout().lines().count(), 1);

    let json = result.json().unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["build"]["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["time"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_health_plain_is_pretty_json() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("vibegit");
    world.configure_command(&mut cmd).arg("health");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"status\": \"ok\""));
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("vibegit");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("health"))
        .stdout(predicate::str::contains("rounds"));
}
