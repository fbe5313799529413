use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

fn record(test: &CliTest) -> Result<Value> {
    Ok(serde_json::from_str(&test.read_file("contributors.json")?)?)
}

#[test]
fn test_update_credits_new_translator() -> Result<()> {
    let test = CliTest::with_project()?;

    let output = test
        .update_command("carol")
        .arg("translations/translation_de.xml")
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let record = record(&test)?;
    assert_eq!(record["main"], serde_json::json!(["alice"]));
    assert_eq!(record["translators"]["fr"], serde_json::json!(["bob"]));
    assert_eq!(record["translators"]["de"], serde_json::json!(["carol"]));

    let document = test.read_file("Contributors.md")?;
    assert!(document.contains("* [alice](/alice)"));
    let french = document.find("* French: [bob](/bob)").unwrap();
    let german = document.find("* German: [carol](/carol)").unwrap();
    assert!(french < german);

    Ok(())
}

#[test]
fn test_update_ignores_non_translation_files() -> Result<()> {
    let test = CliTest::with_project()?;
    let before = test.read_file("contributors.json")?;

    let output = test
        .update_command("carol")
        .args(["readme.md", "translations/notes.txt"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    // record rewritten but semantically unchanged
    let after: Value = record(&test)?;
    let before: Value = serde_json::from_str(&before)?;
    assert_eq!(after, before);

    // document still rendered
    assert!(test.read_file("Contributors.md").is_ok());

    Ok(())
}

#[test]
fn test_update_is_idempotent() -> Result<()> {
    let test = CliTest::with_project()?;

    test.update_command("carol")
        .arg("translations/translation_de.xml")
        .output()?;
    let first = test.read_file("contributors.json")?;
    let first_doc = test.read_file("Contributors.md")?;

    let output = test
        .update_command("carol")
        .arg("translations/translation_de.xml")
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(test.read_file("contributors.json")?, first);
    assert_eq!(test.read_file("Contributors.md")?, first_doc);

    Ok(())
}

#[test]
fn test_update_skips_main_contributor() -> Result<()> {
    let test = CliTest::with_project()?;

    let output = test
        .update_command("alice")
        .arg("translations/translation_de.xml")
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let record = record(&test)?;
    assert_eq!(record["translators"]["de"], serde_json::json!([]));

    Ok(())
}

#[test]
fn test_update_adds_main_contributor_when_policy_disabled() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(".creditrc.json", r#"{ "skipMainContributors": false }"#)?;

    let output = test
        .update_command("alice")
        .arg("translations/translation_de.xml")
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let record = record(&test)?;
    assert_eq!(record["translators"]["de"], serde_json::json!(["alice"]));

    Ok(())
}

#[test]
fn test_update_at_style_mentions() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(".creditrc.json", r#"{ "mentionFormat": "at" }"#)?;

    let output = test
        .update_command("carol")
        .arg("translations/translation_de.xml")
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let document = test.read_file("Contributors.md")?;
    assert!(document.contains("* @alice"));
    assert!(document.contains("* German: @carol"));

    Ok(())
}

#[test]
fn test_update_verbose_prints_progress() -> Result<()> {
    let test = CliTest::with_project()?;

    let output = test
        .update_command("carol")
        .args(["translations/translation_de.xml", "--verbose"])
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Adding contributor carol to language de"));

    Ok(())
}

#[test]
fn test_update_fails_without_record() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("contributors-template.md", "[[main]]\n[[translators]]\n")?;

    let output = test
        .update_command("carol")
        .arg("translations/translation_de.xml")
        .output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read contributors file"));
    // no partial output written
    assert!(!test.root().join("Contributors.md").exists());

    Ok(())
}

#[test]
fn test_update_fails_on_malformed_record() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file("contributors.json", "{ not json")?;

    let output = test
        .update_command("carol")
        .arg("translations/translation_de.xml")
        .output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse contributors file"));

    Ok(())
}

#[test]
fn test_update_with_path_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data/record.json", r#"{ "main": [], "translators": {} }"#)?;
    test.write_file("tpl.md", "[[translators]]\n")?;

    let output = test
        .update_command("carol")
        .args([
            "translations/translation_fr.xml",
            "--contributors-file",
            "data/record.json",
            "--template-file",
            "tpl.md",
            "--output-file",
            "out/Contributors.md",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let document = test.read_file("out/Contributors.md")?;
    assert_eq!(document, "* French: [carol](/carol)\n");

    Ok(())
}
