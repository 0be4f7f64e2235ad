// INI-like parser tests: grammar, edge cases, round-trip

use hoststats::ini_repo::parse;
use hoststats::models::{IniDocument, IniEntry};

#[test]
fn test_parse_empty_input_is_no_document() {
    assert_eq!(parse("").unwrap(), None);
}

#[test]
fn test_parse_whitespace_only_is_no_document() {
    assert_eq!(parse("  \n\t\n   \n").unwrap(), None);
}

#[test]
fn test_parse_flat_document() {
    let doc = parse("a=1\nb=2\n").unwrap().expect("document");
    assert_eq!(doc.value("a"), Some("1"));
    assert_eq!(doc.value("b"), Some("2"));
    assert_eq!(doc.0.len(), 2);
}

#[test]
fn test_parse_top_level_key_then_section() {
    let doc = parse("key1=val1\n[Section]\nkey2=val2\n")
        .unwrap()
        .expect("document");
    assert_eq!(doc.value("key1"), Some("val1"));
    let section = doc.section("Section").expect("section");
    assert_eq!(section.get("key2").map(String::as_str), Some("val2"));
}

#[test]
fn test_parse_key_belongs_to_nearest_preceding_section() {
    let doc = parse("[a]\nk=1\n[b]\nk=2\n").unwrap().expect("document");
    assert_eq!(doc.section("a").unwrap().get("k").unwrap(), "1");
    assert_eq!(doc.section("b").unwrap().get("k").unwrap(), "2");
}

#[test]
fn test_parse_duplicate_section_headers_collapse() {
    let doc = parse("[disk]\na=1\n[other]\nx=9\n[disk]\nb=2\n")
        .unwrap()
        .expect("document");
    assert_eq!(doc.0.len(), 2);
    let disk = doc.section("disk").expect("section");
    assert_eq!(disk.get("a").unwrap(), "1");
    assert_eq!(disk.get("b").unwrap(), "2");
}

#[test]
fn test_parse_duplicate_key_last_write_wins() {
    let doc = parse("[s]\nk=1\nk=2\n").unwrap().expect("document");
    assert_eq!(doc.section("s").unwrap().get("k").unwrap(), "2");
}

#[test]
fn test_parse_strips_quotes_from_section_names_and_pairs() {
    let doc = parse("[\"disks\"]\n\"name\"=\"sda\"\n")
        .unwrap()
        .expect("document");
    assert_eq!(doc.section("disks").unwrap().get("name").unwrap(), "sda");
}

#[test]
fn test_parse_empty_section_name_is_legal() {
    let doc = parse("[]\nk=v\n").unwrap().expect("document");
    assert_eq!(doc.section("").unwrap().get("k").unwrap(), "v");
}

#[test]
fn test_parse_blank_lines_skipped() {
    let doc = parse("\n[a]\n\nk=1\n\n").unwrap().expect("document");
    assert_eq!(doc.section("a").unwrap().get("k").unwrap(), "1");
}

#[test]
fn test_parse_empty_value_allowed() {
    let doc = parse("k=\n").unwrap().expect("document");
    assert_eq!(doc.value("k"), Some(""));
}

#[test]
fn test_parse_line_without_separator_is_malformed() {
    let err = parse("[a]\nnot a pair\n").unwrap_err();
    assert!(err.to_string().contains("malformed line"));
}

#[test]
fn test_parse_line_with_two_separators_is_malformed() {
    let err = parse("k=v=w\n").unwrap_err();
    assert!(err.to_string().contains("malformed line"));
}

#[test]
fn test_parse_is_deterministic() {
    let text = "top=1\n[b]\ny=2\n[a]\nx=3\n";
    assert_eq!(parse(text).unwrap(), parse(text).unwrap());
}

/// Renders a document back to the line grammar (sections after top-level
/// keys, both in map order).
fn render(doc: &IniDocument) -> String {
    let mut out = String::new();
    for (key, entry) in &doc.0 {
        if let IniEntry::Value(v) = entry {
            out.push_str(&format!("{key}={v}\n"));
        }
    }
    for (name, entry) in &doc.0 {
        if let IniEntry::Section(map) = entry {
            out.push_str(&format!("[{name}]\n"));
            for (k, v) in map {
                out.push_str(&format!("{k}={v}\n"));
            }
        }
    }
    out
}

#[test]
fn test_render_reparse_round_trip() {
    let original = parse("top=1\n[b]\ny=2\nz=3\n[a]\nx=4\n")
        .unwrap()
        .expect("document");
    let reparsed = parse(&render(&original)).unwrap().expect("document");
    assert_eq!(reparsed, original);
}
