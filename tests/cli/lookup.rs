use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

fn project() -> Result<CliTest> {
    let test = CliTest::with_default_config()?;
    test.write_file(
        "messages/en.json",
        r#"{"orders": {"title": "Orders", "save": "Save"}}"#,
    )?;
    test.write_file(
        "messages/vi.json",
        r#"{"orders": {"title": "Đơn hàng", "save": "[TODO] Save"}}"#,
    )?;
    Ok(test)
}

#[test]
fn test_lookup_translated_value() -> Result<()> {
    let test = project()?;

    let result = run(test.lookup_command().args(["orders", "title", "--locale", "vi"]))?;

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "Đơn hàng\n");
    assert!(result.stderr.is_empty());

    Ok(())
}

#[test]
fn test_lookup_pending_falls_back_to_master() -> Result<()> {
    let test = project()?;

    let result = run(test.lookup_command().args(["orders", "save", "--locale", "vi"]))?;

    assert_eq!(result.stdout, "Save\n");

    Ok(())
}

#[test]
fn test_lookup_defaults_to_master_locale() -> Result<()> {
    let test = project()?;

    let result = run(test.lookup_command().args(["orders", "title"]))?;

    assert_eq!(result.stdout, "Orders\n");

    Ok(())
}

#[test]
fn test_lookup_unresolved_shows_raw_key() -> Result<()> {
    let test = project()?;

    let result = run(test.lookup_command().args(["orders", "missing", "--locale", "vi"]))?;

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "orders.missing\n");
    assert_eq!(
        result.stderr,
        "warning: `orders.missing` does not resolve for locale 'vi', showing the raw key\n"
    );

    Ok(())
}

#[test]
fn test_lookup_without_catalogs_shows_raw_key() -> Result<()> {
    let test = CliTest::with_default_config()?;

    let result = run(test.lookup_command().args(["inventory.orders", "title"]))?;

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "inventory.orders.title\n");

    Ok(())
}
