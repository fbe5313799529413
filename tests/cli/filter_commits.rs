use anyhow::Result;

use crate::CliTest;

const COMMITS: &str = r#"[
    {"id": "1", "author": {"username": "dave"}, "message": "m1"},
    {"id": "2", "author": {"username": "eve"}, "message": "m2"}
]"#;

#[test]
fn test_filters_to_target_author() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .arg("filter-commits")
        .env("AUTHOR", "dave")
        .env("COMMITS", COMMITS)
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"commits=[{"id":"1","message":"m1"}]"#));
    assert!(stdout.contains("Matched 1 of 2 commits for dave"));

    Ok(())
}

#[test]
fn test_no_matches_emits_empty_array() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .arg("filter-commits")
        .env("AUTHOR", "mallory")
        .env("COMMITS", COMMITS)
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("commits=[]"));

    Ok(())
}

#[test]
fn test_writes_to_github_output_file() -> Result<()> {
    let test = CliTest::new()?;
    let step_output = test.root().join("step_output.txt");

    let output = test
        .command()
        .arg("filter-commits")
        .env("AUTHOR", "dave")
        .env("COMMITS", COMMITS)
        .env("GITHUB_OUTPUT", &step_output)
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let contents = test.read_file("step_output.txt")?;
    assert_eq!(contents, "commits=[{\"id\":\"1\",\"message\":\"m1\"}]\n");

    // the pair goes to the file, not stdout
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("commits=["));
    assert!(stdout.contains("emitted to step output"));

    Ok(())
}

#[test]
fn test_flags_override_environment() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .arg("filter-commits")
        .args(["--author", "eve"])
        .env("AUTHOR", "dave")
        .env("COMMITS", COMMITS)
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"commits=[{"id":"2","message":"m2"}]"#));

    Ok(())
}

#[test]
fn test_malformed_payload_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .arg("filter-commits")
        .env("AUTHOR", "dave")
        .env("COMMITS", "not json")
        .output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse COMMITS payload"));

    Ok(())
}

#[test]
fn test_missing_author_is_a_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .arg("filter-commits")
        .env("COMMITS", COMMITS)
        .output()?;
    assert_ne!(output.status.code(), Some(0));

    Ok(())
}
