use std::process::Command;

fn fyyur() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fyyur"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn bad_database_url_is_reported_on_stderr() {
    let output = fyyur()
        .env("APP_DATABASE__URL", "mysql://root:pw@db/fyyur")
        .output()
        .expect("binary should start");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load config"), "stderr: {stderr}");
    assert!(stderr.contains("unsupported database url"), "stderr: {stderr}");
    assert!(!stderr.contains("pw@"), "stderr: {stderr}");
}

#[test]
fn pool_bounds_are_reported_on_stderr() {
    let output = fyyur()
        .env("APP_DATABASE__MAX_CONNECTIONS", "1")
        .env("APP_DATABASE__MIN_IDLE", "4")
        .output()
        .expect("binary should start");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("database.min_idle (4) must be <= database.max_connections (1)"),
        "stderr: {stderr}"
    );
}
