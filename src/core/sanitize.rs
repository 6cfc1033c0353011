// src/core/sanitize.rs

/// Clean one input cell: drop BOM, surrounding whitespace and wrapping quotes.
pub fn clean_cell(s: &str) -> String {
    let s = s.trim_start_matches('\u{feff}').trim();
    let s = s
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s);
    s.trim().to_string()
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// File stem safe on every platform: alphanumerics, `-` and `_`; whitespace → `_`.
pub fn sanitize_file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in normalize_ws(name).chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_cell_strips_noise() {
        assert_eq!(clean_cell("\u{feff} \"https://x\" "), "https://x");
        assert_eq!(clean_cell("  plain  "), "plain");
        assert_eq!(clean_cell("\""), "\"");
    }

    #[test]
    fn file_stem_is_filesystem_friendly() {
        assert_eq!(sanitize_file_stem("HR  team: Q1/2024"), "HR_team_Q12024");
        assert_eq!(sanitize_file_stem("  __x__  "), "x");
        assert_eq!(sanitize_file_stem("***"), "");
    }
}
