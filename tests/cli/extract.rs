use anyhow::Result;

use crate::{CliTest, run};

const ORDERS_PAGE: &str = r#"'use client';

import { useState } from 'react';

export default function OrdersPage() {
  const [rows] = useState([]);
  return <h1>{"Danh sách đơn hàng"}</h1>;
}
"#;

#[test]
fn test_extract_reports_strings_with_suggested_keys() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file("src/app/[locale]/inventory/orders/page.tsx", ORDERS_PAGE)?;

    let result = run(test.extract_command().arg("src"))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("1. \"Danh sách đơn hàng\""));
    assert!(
        result
            .stdout
            .contains("--> src/app/[locale]/inventory/orders/page.tsx:7")
    );
    assert!(result.stdout.contains("key: inventory.orders.danhSachDonHang"));
    assert!(result.stdout.contains("\"danhSachDonHang\": \"Danh sách đơn hàng\""));
    assert!(result.stdout.contains("Found 1 string in 1 file"));

    Ok(())
}

#[test]
fn test_extract_suppresses_ignore_list_entries() -> Result<()> {
    let test = CliTest::with_file(
        ".glotsyncrc.json",
        r#"{ "ignoreList": ["Đăng xuất"] }"#,
    )?;
    test.write_file(
        "src/components/Header.tsx",
        "const a = \"Đăng xuất\";\nconst b = \"Hồ sơ cá nhân\";\n",
    )?;

    let result = run(test.extract_command().arg("src"))?;

    assert_eq!(result.code, Some(0));
    assert!(!result.stdout.contains(". \"Đăng xuất\""));
    assert!(result.stdout.contains("1. \"Hồ sơ cá nhân\""));
    assert!(result.stdout.contains("Found 1 string in 1 file"));
    assert!(result.stdout.contains("key: header.hoSoCaNhan"));

    Ok(())
}

#[test]
fn test_extract_zero_results_is_success() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file(
        "src/api/client.ts",
        "fetch(url, { headers: { 'Content-Type': 'application/json' } });\n",
    )?;

    let result = run(test.extract_command().arg("src"))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("No hardcoded strings found in 1 file"));

    Ok(())
}

#[test]
fn test_extract_single_file() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file("app/crm/page.tsx", "<Button label='Thêm khách hàng' />\n")?;

    let result = run(test.extract_command().arg("app/crm/page.tsx"))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("--> app/crm/page.tsx:1"));
    assert!(result.stdout.contains("key: crm.themKhachHang"));

    Ok(())
}

#[test]
fn test_extract_missing_path_fails() -> Result<()> {
    let test = CliTest::with_default_config()?;

    let result = run(test.extract_command().arg("missing"))?;

    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("error: missing: file not found: missing"));

    Ok(())
}

#[test]
fn test_extract_unreadable_file_does_not_abort_scan() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_bytes("src/a/broken.ts", &[0xff, 0xfe, 0x00])?;
    test.write_file("src/b/page.tsx", "\"Xin chào\"")?;

    let result = run(test.extract_command().arg("src"))?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("\"Xin chào\""));
    assert!(result.stderr.contains("src/a/broken.ts"));
    assert!(result.stderr.contains("1 unit failed"));

    Ok(())
}

#[test]
fn test_extract_source_root_flag() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file("web/src/app/finance/ledger/page.tsx", "\"Sổ cái\"")?;

    let result = run(
        test.extract_command()
            .arg("web")
            .arg("--source-root")
            .arg("web/src"),
    )?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("key: finance.ledger.soCai"));

    Ok(())
}

#[test]
fn test_extract_reports_key_collisions() -> Result<()> {
    let test = CliTest::with_default_config()?;
    test.write_file(
        "app/orders/page.tsx",
        "\"Xóa đơn hàng đã chọn\"\n\"Xóa đơn hàng đã hủy\"\n",
    )?;

    let result = run(test.extract_command().arg("app"))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("warning: key `orders.xoaDonHangDa`"));
    assert!(result.stdout.contains("--> app/orders/page.tsx:2"));

    Ok(())
}
