// region_pipeline_tests.rs - 選択範囲の正規化パイプラインのテスト

use codereading::buffer::{Buffer, Span};
use codereading::error::RegionError;
use codereading::region::{expand_tabs, lines, normalize, to_lines, trim_common_indent};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_loop_body_scenario_step_by_step() {
    let buffer = Buffer::new("  for (i) {\n    x++;\n  }\n");
    let selection = Span::new(16, 4);
    assert_eq!(buffer.text(selection).unwrap(), "x++;");

    // 行全体に広がる
    let block = to_lines(&buffer, selection).unwrap();
    assert_eq!(buffer.text(block.as_span()).unwrap(), "    x++;");

    let raw = lines(&buffer, block).unwrap();
    assert_eq!(raw, strings(&["    x++;"]));

    // タブがないので変化しない
    let expanded = expand_tabs(&raw, 4).unwrap();
    assert_eq!(expanded, raw);

    assert_eq!(trim_common_indent(&expanded), strings(&["x++;"]));
    assert_eq!(normalize(&buffer, selection, 4).unwrap(), strings(&["x++;"]));
}

#[test]
fn test_selection_ending_at_line_head() {
    let buffer = Buffer::new("fn a() {\n    b();\n}\n");
    // 1行目の途中から2行目末尾の改行の直後まで
    let selection = Span::new(3, 15);
    assert_eq!(
        normalize(&buffer, selection, 4).unwrap(),
        strings(&["fn a() {", "    b();"])
    );
}

#[test]
fn test_whole_method_with_tabs() {
    let source = "class A {\n\tvoid m() {\n\t\tif (x) {\n\t\t\ty();\n\t\t}\n\t}\n}\n";
    let buffer = Buffer::new(source);
    let start = source.find("void").unwrap();
    let end = source.rfind("\t}").unwrap() + 2;
    let selection = Span::new(start, end - start);

    assert_eq!(
        normalize(&buffer, selection, 4).unwrap(),
        strings(&["void m() {", "    if (x) {", "        y();", "    }", "}"])
    );
    assert_eq!(
        normalize(&buffer, selection, 2).unwrap(),
        strings(&["void m() {", "  if (x) {", "    y();", "  }", "}"])
    );
}

#[test]
fn test_blank_lines_inside_block_survive() {
    let buffer = Buffer::new("    a();\n\n    b();\n");
    let selection = Span::new(0, 18);
    assert_eq!(
        normalize(&buffer, selection, 4).unwrap(),
        strings(&["a();", "", "b();"])
    );
}

#[test]
fn test_short_whitespace_line_dropped() {
    let buffer = Buffer::new("    a();\n  \n    b();");
    let selection = Span::new(0, buffer.len());
    assert_eq!(
        normalize(&buffer, selection, 4).unwrap(),
        strings(&["a();", "b();"])
    );
}

#[test]
fn test_crlf_source() {
    let buffer = Buffer::new("if a {\r\n    b\r\n}\r\n");
    let selection = Span::new(8, 3);
    assert_eq!(normalize(&buffer, selection, 4).unwrap(), strings(&["b"]));
}

#[test]
fn test_errors_are_reported() {
    let buffer = Buffer::new("short");
    assert_eq!(
        normalize(&buffer, Span::new(3, 10), 4),
        Err(RegionError::OutOfRange { offset: 3, length: 10 })
    );
    assert!(matches!(
        normalize(&buffer, Span::new(0, 5), 0),
        Err(RegionError::InvalidArgument { name: "tab_width", .. })
    ));
}
