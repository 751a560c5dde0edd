use super::*;
mod generate;

/// The two records from the Firebird table used across the tests, plus the sentinel.
fn scenario() -> Vec<ErrorMessageRecord> {
    vec![
        ErrorMessageRecord::new(335544321, "invalid request BLR at offset %ld"),
        ErrorMessageRecord::new(
            335544322,
            r#"I/O error during "%s" operation for file "%s""#,
        ),
        ErrorMessageRecord::sentinel(),
    ]
}

/// Lines of the generated module that hold table entries.
fn entry_lines(module: &str) -> Vec<&str> {
    module
        .lines()
        .filter(|line| line.starts_with("        "))
        .collect()
}

/// Decode a Julia double-quoted string literal, quotes included.
fn unquote_julia(lit: &str) -> String {
    let inner = &lit[1..lit.len() - 1];
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let code = u32::from_str_radix(&hex, 16).unwrap();
                out.push(char::from_u32(code).unwrap());
            }
            Some(c) => out.push(c),
            None => panic!("dangling backslash in {lit}"),
        }
    }
    out
}
