// SMART block extractor tests

use hoststats::smart_repo::{NO_TABLE_DATA, extract};

#[test]
fn test_extract_disk_and_table() {
    let record = extract("!!sda!!\nID#\nfoo bar\n").expect("record");
    assert_eq!(record.disk, "sda");
    assert_eq!(record.table, "ID#\nfoo bar\n");
}

#[test]
fn test_extract_table_runs_to_end_of_input() {
    let text = "!!sdb!!\npreamble\nID# ATTRIBUTE_NAME VALUE\n  1 Raw_Read_Error_Rate 100\n  5 Reallocated_Sector_Ct 100";
    let record = extract(text).expect("record");
    assert_eq!(record.disk, "sdb");
    assert!(record.table.starts_with("ID# ATTRIBUTE_NAME"));
    assert!(record.table.ends_with("Reallocated_Sector_Ct 100"));
}

#[test]
fn test_extract_without_marker_fails() {
    let err = extract("smartctl output with no marker\nID#\n").unwrap_err();
    assert!(err.to_string().contains("marker"));
}

#[test]
fn test_extract_empty_input_fails() {
    assert!(extract("").is_err());
}

#[test]
fn test_extract_empty_marker_fails() {
    // `!!!!` carries no identifier; absence is a failure, never a partial record.
    assert!(extract("!!!!\nID#\n").is_err());
}

#[test]
fn test_extract_without_table_uses_sentinel() {
    let record = extract("!!nvme0n1!!\nno attribute section here\n").expect("record");
    assert_eq!(record.disk, "nvme0n1");
    assert_eq!(record.table, NO_TABLE_DATA);
}

#[test]
fn test_extract_marker_not_at_start_of_text() {
    let record = extract("header line\n!!sdc!! model XYZ\nID#\n").expect("record");
    assert_eq!(record.disk, "sdc");
}

#[test]
fn test_extract_first_marker_wins() {
    let record = extract("!!sda!! and later !!sdb!!\nID#\n").expect("record");
    assert_eq!(record.disk, "sda");
}

#[test]
fn test_extract_marker_does_not_span_lines() {
    let record = extract("!!first\nhalf!!\n!!sdd!!\nID#\n").expect("record");
    assert_eq!(record.disk, "sdd");
}
