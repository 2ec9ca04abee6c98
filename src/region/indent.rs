//! 共通インデントの除去

/// 全行に共通する先頭空白を取り除く
///
/// 共通部分は空白以外の文字を含む行だけから求める。空行はそのまま空行として残す。
/// 共通部分より短い行（空白のみの行）は結果から取り除かれる。
/// 共通部分で始まらない空白のみの行は変更しない。
pub fn trim_common_indent(lines: &[String]) -> Vec<String> {
    let lead = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .reduce(common_prefix);

    let lead = match lead {
        Some(lead) if !lead.is_empty() => lead,
        _ => return lines.to_vec(),
    };
    let lead_len = lead.chars().count();

    lines
        .iter()
        .filter(|line| line.is_empty() || line.chars().count() >= lead_len)
        .map(|line| match line.strip_prefix(lead) {
            Some(rest) => rest.to_string(),
            None => line.clone(),
        })
        .collect()
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

fn leading_whitespace(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, ch)| !ch.is_whitespace())
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());
    &line[..end]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for ((idx, x), y) in a.char_indices().zip(b.chars()) {
        if x != y {
            return &a[..idx];
        }
        end = idx + x.len_utf8();
    }
    // 短い方の末尾まで一致
    &a[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_shared_indent_removed() {
        assert_eq!(
            trim_common_indent(&lines(&["  foo", "  bar", ""])),
            lines(&["foo", "bar", ""])
        );
    }

    #[test]
    fn test_shortest_indent_wins() {
        assert_eq!(
            trim_common_indent(&lines(&["  foo", " bar"])),
            lines(&[" foo", "bar"])
        );
    }

    #[test]
    fn test_no_common_indent_is_unchanged() {
        assert_eq!(trim_common_indent(&lines(&["foo", ""])), lines(&["foo", ""]));
    }

    #[test]
    fn test_line_shorter_than_indent_is_dropped() {
        // 共通部分より短い空白行は出力に残らない
        assert_eq!(trim_common_indent(&lines(&["  a", " "])), lines(&["a"]));
        assert_eq!(
            trim_common_indent(&lines(&["    a", "  ", "    b"])),
            lines(&["a", "b"])
        );
    }

    #[test]
    fn test_whitespace_line_longer_than_indent_is_trimmed() {
        assert_eq!(
            trim_common_indent(&lines(&["  a", "   ", "    b"])),
            lines(&["a", " ", "  b"])
        );
    }

    #[test]
    fn test_whitespace_line_with_other_indent_is_kept() {
        assert_eq!(
            trim_common_indent(&lines(&["  a", "\t\t\t"])),
            lines(&["a", "\t\t\t"])
        );
        assert_eq!(
            trim_common_indent(&lines(&["    a", " \t  ", "    b"])),
            lines(&["a", " \t  ", "b"])
        );
    }

    #[test]
    fn test_single_line_loses_all_leading_whitespace() {
        assert_eq!(trim_common_indent(&lines(&["    x++;"])), lines(&["x++;"]));
    }

    #[test]
    fn test_empty_input() {
        assert!(trim_common_indent(&[]).is_empty());
    }

    #[test]
    fn test_only_blank_lines() {
        assert_eq!(trim_common_indent(&lines(&["", "  "])), lines(&["", "  "]));
    }

    #[test]
    fn test_mixed_tab_and_space_prefix() {
        assert_eq!(
            trim_common_indent(&lines(&["\t  a", "\t b", "\t\tc"])),
            lines(&["  a", " b", "\tc"])
        );
    }

    #[test]
    fn test_second_pass_is_noop() {
        let once = trim_common_indent(&lines(&["    if x {", "        y();", "", "    }"]));
        assert_eq!(once, lines(&["if x {", "    y();", "", "}"]));
        assert_eq!(trim_common_indent(&once), once);
    }

    #[test]
    fn test_common_prefix_helper() {
        assert_eq!(common_prefix("   ", " \t"), " ");
        assert_eq!(common_prefix("  ", "    "), "  ");
        assert_eq!(common_prefix("    ", "  "), "  ");
        assert_eq!(common_prefix("\u{3000}\u{3000}", "\u{3000}"), "\u{3000}");
        assert_eq!(common_prefix("", " "), "");
        assert_eq!(leading_whitespace("  \tx y"), "  \t");
        assert_eq!(leading_whitespace("   "), "   ");
    }
}
