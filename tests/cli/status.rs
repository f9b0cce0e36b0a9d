use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const MASTER: &str = r#"{"orders": {"title": "Orders", "save": "Save", "export": "Export"}}"#;
const VI: &str = r#"{"orders": {"title": "Đơn hàng", "save": "[TODO] Save", "old": "Cũ"}}"#;

#[test]
fn test_status_counts_per_locale() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file("messages/en.json", MASTER)?;
    test.write_file("messages/vi.json", VI)?;

    let result = run(&mut test.status_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Master en: 3 keys"));
    assert!(result.stdout.contains("  vi  1 pending, 1 missing, 1 orphan"));
    assert!(result.stdout.contains("~ orders.save"));
    assert!(result.stdout.contains("+ orders.export (missing)"));
    assert!(result.stdout.contains("- orders.old (orphan)"));
    assert!(result.stdout.contains("1 locale need attention"));

    Ok(())
}

#[test]
fn test_status_is_read_only() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file("messages/en.json", MASTER)?;
    test.write_file("messages/vi.json", VI)?;

    run(&mut test.status_command())?;

    assert_eq!(test.read_file("messages/vi.json")?, VI);

    Ok(())
}

#[test]
fn test_status_after_sync_has_only_pending() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file("messages/en.json", MASTER)?;
    test.write_file("messages/vi.json", VI)?;

    run(&mut test.sync_command())?;
    let result = run(&mut test.status_command())?;

    assert!(result.stdout.contains("  vi  2 pending, 0 missing, 0 orphan"));

    Ok(())
}

#[test]
fn test_status_fully_translated() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file("messages/en.json", r#"{"a": "A"}"#)?;
    test.write_file("messages/vi.json", r#"{"a": "Á"}"#)?;

    let result = run(&mut test.status_command())?;

    assert!(result.stdout.contains("✓ All 1 locale fully translated"));

    Ok(())
}

#[test]
fn test_status_unreadable_locale_fails() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file("messages/en.json", MASTER)?;

    let result = run(&mut test.status_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("error: vi: file not found"));

    Ok(())
}
