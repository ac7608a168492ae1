//! Lint: detect bracket-key text (`[X]`) rendered without click registration.
//!
//! Any `[X]`-style button text displayed in `render.rs` must be registered
//! as a click target via `push_clickable()`. Rendering it through a plain
//! `cl.push(Line::from(... "[S]..." ...))` shows the hint but makes it
//! un-tappable — a common source of tap/click bugs on mobile.
//!
//! This test scans `src/game/render.rs` and flags `push(` calls whose
//! string arguments contain bracket-key patterns.

use std::fs;
use std::path::Path;

/// Check if a string contains a bracket-key pattern like `[S]`, `[Q]`, `[1]`.
fn contains_bracket_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 3 {
        return false;
    }
    for i in 0..bytes.len() - 2 {
        if bytes[i] == b'[' && bytes[i + 2] == b']' {
            let ch = bytes[i + 1];
            if ch.is_ascii_alphanumeric() || b"-=!~{}|\\".contains(&ch) {
                return true;
            }
        }
    }
    false
}

/// Scan source for `push(` calls (non-clickable) containing bracket-key patterns.
fn find_bracket_key_in_push(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();

    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        // Skip comments
        if trimmed.starts_with("//") || trimmed.starts_with("///") {
            continue;
        }

        if !contains_bracket_key(line) {
            continue;
        }

        let has_push = line.contains(".push(");
        let has_clickable = line.contains("push_clickable(");

        if has_push && !has_clickable {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

#[test]
fn no_bracket_keys_in_non_clickable_push() {
    let render_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/game/render.rs");
    let source = fs::read_to_string(&render_path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", render_path.display(), e));

    let violations = find_bracket_key_in_push(&source);
    if !violations.is_empty() {
        let mut msg = String::from(
            "Found bracket-key text [X] in non-clickable cl.push() calls.\n\
             These should use push_clickable() so the hint is tappable.\n\n",
        );
        for (line_num, line) in &violations {
            msg.push_str(&format!(
                "  {}:{}: {}\n",
                render_path.display(),
                line_num,
                line
            ));
        }
        panic!("{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_bracket_key_in_push() {
        let source = r#"cl.push(Line::from(" [S]ストア  [X]設定"));"#;
        let violations = find_bracket_key_in_push(source);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn allows_push_clickable() {
        let source = r#"cl.push_clickable(Line::from(" [S] ストアを開く"), OPEN_STORE);"#;
        let violations = find_bracket_key_in_push(source);
        assert!(violations.is_empty());
    }

    #[test]
    fn ignores_comments() {
        let source = r#"// cl.push(Line::from(" [S]ストア"));"#;
        let violations = find_bracket_key_in_push(source);
        assert!(violations.is_empty());
    }

    #[test]
    fn ignores_plain_text_push() {
        let source = r#"cl.push(Line::from("ただのテキスト"));"#;
        let violations = find_bracket_key_in_push(source);
        assert!(violations.is_empty());
    }

    #[test]
    fn bracket_key_detection() {
        assert!(contains_bracket_key("[S]"));
        assert!(contains_bracket_key("[Q]"));
        assert!(contains_bracket_key("[1]"));
        assert!(contains_bracket_key("[-]"));
        assert!(!contains_bracket_key("[]"));
        assert!(!contains_bracket_key("[SS]"));
        assert!(!contains_bracket_key("abc"));
    }
}
