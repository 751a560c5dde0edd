use super::*;

#[test]
fn test_scenario_entries() {
    let module = Transcoder::default().render(&scenario());
    assert_eq!(
        entry_lines(&module),
        vec![
            r#"        335544321 => "invalid request BLR at offset %ld\n","#,
            r#"        335544322 => "I/O error during \"%s\" operation for file \"%s\"\n","#,
        ]
    );
    assert_eq!(module.matches("function get_errmsgs()").count(), 1);
    assert!(module.ends_with("    )\nend\n"));
}

#[test]
fn test_banner_and_attribution() {
    let module = Transcoder::default().render(&scenario());
    let mut lines = module.lines();
    assert_eq!(lines.next(), Some(target::Julia.rule()));
    assert_eq!(
        lines.next(),
        Some("# The contents of this file are subject to the Interbase Public")
    );
    assert!(module.contains("\n#\n# Software distributed under the License"));
    assert!(module.contains(
        "\n\n# generated by errmsgs\n\nfunction get_errmsgs()::Dict{Int64, String}\n"
    ));
}

#[test]
fn test_count_and_sentinel() {
    let records = scenario();
    let mut buf = Vec::new();
    let count = Transcoder::default().write_to(&records, &mut buf).unwrap();
    assert_eq!(count, records.len() - 1);
    let module = String::from_utf8(buf).unwrap();
    assert_eq!(entry_lines(&module).len(), count);
    assert!(!module.contains("0 => "));
}

#[test]
fn test_stops_at_first_sentinel() {
    let records = vec![
        ErrorMessageRecord::new(1, "one"),
        ErrorMessageRecord::sentinel(),
        ErrorMessageRecord::new(2, "two"),
    ];
    let module = Transcoder::default().render(&records);
    assert_eq!(entry_lines(&module), vec![r#"        1 => "one\n","#]);
}

#[test]
fn test_unterminated_slice() {
    let records = [(7, "seven"), (3, "three")].map(ErrorMessageRecord::from);
    let module = Transcoder::default().render(&records);
    assert_eq!(entry_lines(&module).len(), 2);
}

#[test]
fn test_order_and_duplicates_kept() {
    let records = [(30, "c"), (10, "a"), (30, "again"), (20, "b")].map(ErrorMessageRecord::from);
    let module = Transcoder::default().render(&records);
    let codes: Vec<&str> = entry_lines(&module)
        .iter()
        .map(|line| line.trim_start().split(' ').next().unwrap())
        .collect();
    assert_eq!(codes, ["30", "10", "30", "20"]);
}

#[test]
fn test_code_width_preserved() {
    let records = [(i64::MAX, "big"), (-335544321, "negative")].map(ErrorMessageRecord::from);
    let module = Transcoder::default().render(&records);
    assert!(module.contains(&format!("        {} => \"big\\n\",", i64::MAX)));
    assert!(module.contains("        -335544321 => \"negative\\n\","));
}

#[test]
fn test_escaping_round_trip() {
    let texts = [
        r#"conversion error from string "@1""#,
        r"path C:\fb\data\x.fdb",
        "two\nlines\tand a tab",
        "costs $5 and 100%",
        "bell \u{7} and \u{85}",
        "unicode stays: caractère",
    ];
    let julia = target::Julia;
    for text in texts {
        let lit = julia.quote(text);
        assert!(!lit.contains('\n'), "raw newline in {lit}");
        assert_eq!(unquote_julia(&lit), format!("{text}\n"));
    }
}

#[test]
fn test_generate_idempotent() {
    let tmp = temp_file::empty();
    let records = scenario();
    assert_eq!(generate(&records, tmp.path()).unwrap(), 2);
    let first = std::fs::read(tmp.path()).unwrap();
    assert_eq!(generate(&records, tmp.path()).unwrap(), 2);
    let second = std::fs::read(tmp.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Transcoder::default().render(&records).into_bytes());
}

#[test]
fn test_generate_truncates() {
    let tmp = temp_file::with_contents(&[b'x'; 64 * 1024]);
    generate(&scenario(), tmp.path()).unwrap();
    let written = std::fs::read_to_string(tmp.path()).unwrap();
    assert!(!written.contains("xxxx"));
}

#[test]
fn test_generate_missing_dir() {
    let dir = std::env::temp_dir().join(format!("errmsgs-missing-{}", std::process::id()));
    let path = dir.join("errmsgs.jl");
    let err = generate(&scenario(), &path).unwrap_err();
    assert_eq!(err.io_kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("errmsgs.jl"));
    assert!(!path.exists());
    assert!(!dir.exists());
}
