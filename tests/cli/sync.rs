use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

fn project(master: &str, vi: &str) -> Result<CliTest> {
    let test = CliTest::with_default_config()?;
    test.write_file("messages/en.json", master)?;
    test.write_file("messages/vi.json", vi)?;
    Ok(test)
}

#[test]
fn test_sync_adds_missing_and_removes_orphans() -> Result<()> {
    let test = project(
        r#"{"a": {"b": "X", "d": "Z"}}"#,
        r#"{"a": {"b": "y", "c": "orphan"}}"#,
    )?;

    let result = run(&mut test.sync_command())?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("    + a.d: \"[TODO] Z\""));
    assert!(result.stdout.contains("    - a.c"));
    assert!(result.stdout.contains("✓ Synced 1 locale with en: 1 added, 1 removed"));
    assert_snapshot!(test.read_file("messages/vi.json")?, @r#"
    {
      "a": {
        "b": "y",
        "d": "[TODO] Z"
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_sync_prints_master_fragment_for_added_keys() -> Result<()> {
    let test = project(r#"{"orders": {"title": "Orders"}}"#, "{}")?;

    let result = run(&mut test.sync_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("  Master entries for added keys:"));
    assert!(result.stdout.contains("        \"title\": \"Orders\""));

    Ok(())
}

#[test]
fn test_sync_is_idempotent() -> Result<()> {
    let test = project(
        r#"{"a": {"b": "X", "d": "Z"}, "e": "E"}"#,
        r#"{"a": {"c": "orphan"}}"#,
    )?;

    run(&mut test.sync_command())?;
    let first = test.read_file("messages/vi.json")?;
    let result = run(&mut test.sync_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("vi\n  ✓ up to date"));
    assert!(result.stdout.contains("0 added, 0 removed"));
    assert_eq!(test.read_file("messages/vi.json")?, first);

    Ok(())
}

#[test]
fn test_sync_never_overwrites_translations() -> Result<()> {
    let test = project(
        r#"{"title": "Dashboard (new)"}"#,
        r#"{"title": "Bảng điều khiển"}"#,
    )?;

    let result = run(&mut test.sync_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        test.read_file("messages/vi.json")?,
        r#"{"title": "Bảng điều khiển"}"#
    );

    Ok(())
}

#[test]
fn test_sync_writes_in_master_order() -> Result<()> {
    let test = project(r#"{"c": "C", "a": "A"}"#, r#"{"a": "á", "c": "ç"}"#)?;

    run(&mut test.sync_command())?;

    assert_eq!(
        test.read_file("messages/vi.json")?,
        "{\n  \"c\": \"ç\",\n  \"a\": \"á\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_sync_dry_run_does_not_write() -> Result<()> {
    let vi = r#"{"a": {"b": "y", "c": "orphan"}}"#;
    let test = project(r#"{"a": {"b": "X", "d": "Z"}}"#, vi)?;

    let result = run(test.sync_command().arg("--dry-run"))?;

    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stdout
            .contains("Would add 1 key, remove 1 key in 1 catalog (master: en)")
    );
    assert_eq!(test.read_file("messages/vi.json")?, vi);

    Ok(())
}

#[test]
fn test_sync_reports_pruned_empty_namespaces() -> Result<()> {
    let test = project(
        r#"{"orders": {"title": "Orders"}}"#,
        r#"{"orders": {"title": "Đơn hàng", "draft": {}}}"#,
    )?;

    let dry = run(test.sync_command().arg("--dry-run"))?;

    assert_eq!(dry.code, Some(0));
    assert!(!dry.stdout.contains("up to date"));
    assert!(dry.stdout.contains("  Pruned 1 empty namespace:\n    - orders.draft\n"));
    assert!(dry.stdout.contains(
        "Would add 0 keys, remove 0 keys, prune 1 empty namespace in 1 catalog (master: en)"
    ));

    let result = run(&mut test.sync_command())?;

    assert!(result.stdout.contains("0 added, 0 removed, 1 pruned"));
    assert!(!test.read_file("messages/vi.json")?.contains("draft"));

    Ok(())
}

#[test]
fn test_sync_type_conflict_fails_only_that_locale() -> Result<()> {
    let test = CliTest::with_file(
        ".glotsyncrc.json",
        r#"{ "locales": ["en", "vi", "ja"], "masterLocale": "en" }"#,
    )?;
    test.write_file("messages/en.json", r#"{"a": "A", "b": {"c": "C"}}"#)?;
    let vi = r#"{"a": {"x": "1"}, "b": {"c": "c"}}"#;
    test.write_file("messages/vi.json", vi)?;
    test.write_file("messages/ja.json", "{}")?;

    let result = run(&mut test.sync_command())?;

    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stderr
            .contains("error: vi: 1 type conflict(s) in locale 'vi'")
    );
    assert!(
        result
            .stderr
            .contains("= type conflict at `a`: expected leaf, found namespace")
    );
    assert!(result.stderr.contains("--> ./messages/en.json (master)"));
    assert!(result.stderr.contains("--> ./messages/vi.json (target)"));
    assert_eq!(test.read_file("messages/vi.json")?, vi);
    assert!(test.read_file("messages/ja.json")?.contains("\"a\": \"[TODO] A\""));

    Ok(())
}

#[test]
fn test_sync_malformed_catalog_is_reported() -> Result<()> {
    let test = project(r#"{"a": "A"}"#, "{ not json")?;

    let result = run(&mut test.sync_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("malformed catalog"));
    assert!(result.stderr.contains("vi.json"));
    assert_eq!(test.read_file("messages/vi.json")?, "{ not json");

    Ok(())
}

#[test]
fn test_sync_missing_target_requires_init_missing() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file("messages/en.json", r#"{"title": "Title"}"#)?;

    let result = run(&mut test.sync_command())?;
    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("file not found"));
    assert!(!test.root().join("messages/vi.json").exists());

    let result = run(test.sync_command().arg("--init-missing"))?;
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("vi (new catalog)"));
    assert_eq!(
        test.read_file("messages/vi.json")?,
        "{\n  \"title\": \"[TODO] Title\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_sync_missing_master_is_an_error() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file("messages/vi.json", "{}")?;

    let result = run(&mut test.sync_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Failed to load master catalog 'en'"));

    Ok(())
}

#[test]
fn test_sync_refresh_pending() -> Result<()> {
    let test = CliTest::with_file(
        ".glotsyncrc.json",
        r#"{ "locales": ["en", "vi"], "refreshPending": true }"#,
    )?;
    test.write_file("messages/en.json", r#"{"save": "Save changes", "ok": "OK"}"#)?;
    test.write_file("messages/vi.json", r#"{"save": "[TODO] Save", "ok": "Đồng ý"}"#)?;

    let result = run(&mut test.sync_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Refreshed 1 pending key:\n    ~ save"));
    assert_eq!(
        test.read_file("messages/vi.json")?,
        "{\n  \"save\": \"[TODO] Save changes\",\n  \"ok\": \"Đồng ý\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_sync_discovers_locales() -> Result<()> {
    let test = CliTest::with_file(".glotsyncrc.json", r#"{ "locales": [] }"#)?;
    test.write_file("messages/en.json", r#"{"a": "A"}"#)?;
    test.write_file("messages/ja.json", "{}")?;
    test.write_file("messages/vi.json", "{}")?;

    let result = run(&mut test.sync_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Synced 2 locales with en"));
    assert!(test.read_file("messages/ja.json")?.contains("[TODO] A"));
    assert!(test.read_file("messages/vi.json")?.contains("[TODO] A"));

    Ok(())
}

#[test]
fn test_sync_messages_root_flag() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file("i18n/en.json", r#"{"a": "A"}"#)?;
    test.write_file("i18n/vi.json", "{}")?;

    let result = run(test.sync_command().arg("--messages-root").arg("i18n"))?;

    assert_eq!(result.code, Some(0));
    assert!(test.read_file("i18n/vi.json")?.contains("[TODO] A"));

    Ok(())
}
