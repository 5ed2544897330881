//! Integration tests: parsing exports end to end, from text and from files.

use std::fs;

use linetalk::parser::TalkParser;
use linetalk::prelude::*;
use tempfile::TempDir;

const SCENARIO: &str = "[LINE] Alice とのトーク履歴
2024/01/15(月)
09:00\tAlice\tGood morning
09:01\tBob\tMorning!
続きのメッセージ
2024/01/16(火)
10:00\tAlice\tHi";

/// A realistic export: BOM, saved-at line, blank lines, stickers, multi-line
/// bodies and several days.
const FULL_EXPORT: &str = "\u{feff}[LINE] 田中とのトーク履歴
保存日時：2024/02/01 21:30

2024/01/30(火)
08:15\t田中\tおはよう
08:16\tBob\tおはようございます
今日の会議は

10時からです
08:17\t田中\t[スタンプ]
12:00\t田中

2024/01/31(水)
19:00\tBob\t☎ 通話時間 5:01
19:30\t田中\tありがとう 😊
";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

// =========================================================================
// Core scenario
// =========================================================================

#[test]
fn test_scenario() {
    let talk = parse(SCENARIO);

    assert_eq!(talk.partner, "Alice");
    assert_eq!(talk.messages.len(), 3);

    assert_eq!(
        talk.messages[0],
        Message::new("2024/01/15(月)", "09:00", "Alice", "Good morning")
    );
    assert_eq!(talk.messages[1].content, "Morning!\n続きのメッセージ");
    assert_eq!(talk.messages[1].date, "2024/01/15(月)");
    assert_eq!(talk.messages[2].date, "2024/01/16(火)");
    assert_eq!(talk.messages[2].content, "Hi");
}

#[test]
fn test_full_export() {
    let talk = parse(FULL_EXPORT);

    assert_eq!(talk.partner, "田中");
    assert_eq!(talk.len(), 6);

    assert_eq!(
        talk.messages[1].content,
        "おはようございます\n今日の会議は\n10時からです"
    );
    assert_eq!(talk.messages[2].content, "[スタンプ]");
    assert_eq!(talk.messages[3].content, "");
    assert_eq!(talk.messages[3].time, "12:00");
    assert_eq!(talk.messages[4].date, "2024/01/31(水)");
    assert_eq!(talk.messages[5].content, "ありがとう 😊");
}

#[test]
fn test_talk_helpers_on_parsed_export() {
    let talk = parse(FULL_EXPORT);

    assert!(!talk.is_mine(&talk.messages[0]));
    assert!(talk.is_mine(&talk.messages[1]));

    assert!(talk.starts_new_day(0));
    assert!(!talk.starts_new_day(1));
    assert!(talk.starts_new_day(4));

    let days = talk.days();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].0, "2024/01/30(火)");
    assert_eq!(days[0].1.len(), 4);
    assert_eq!(days[1].1.len(), 2);

    assert_eq!(talk.senders(), vec!["田中", "Bob"]);
    assert_eq!(talk.messages[4].formatted_date(), "2024年01月31日");
}

#[test]
fn test_diagnostics_clean_for_well_formed_export() {
    let report = parse_with_diagnostics(FULL_EXPORT);
    assert!(report.is_clean(), "{:?}", report.diagnostics);
    assert_eq!(report.talk, parse(FULL_EXPORT));
}

// =========================================================================
// TalkParser with files
// =========================================================================

#[test]
fn test_parse_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "talk.txt", FULL_EXPORT);

    let talk = TalkParser::new().parse_file(&path).unwrap();
    assert_eq!(talk, parse(FULL_EXPORT));
}

#[test]
fn test_parse_file_crlf() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "talk.txt", &SCENARIO.replace('\n', "\r\n"));

    let talk = TalkParser::new().parse_file(&path).unwrap();
    assert_eq!(talk, parse(SCENARIO));
}

#[test]
fn test_parse_missing_file() {
    let err = TalkParser::new()
        .parse_file("/nonexistent/path/talk.txt")
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_parse_file_not_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sjis.txt");
    // "トーク" in Shift_JIS
    fs::write(&path, [0x83, 0x67, 0x81, 0x5B, 0x83, 0x4E]).unwrap();

    let err = TalkParser::new().parse(&path).unwrap_err();
    assert!(matches!(err, TalkError::Utf8 { .. }));
}

#[test]
fn test_parse_file_size_limit() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "talk.txt", FULL_EXPORT);

    let parser = TalkParser::with_config(ParserConfig::new().with_max_input_size(16));
    let err = parser.parse_file(&path).unwrap_err();
    assert!(err.is_input_too_large());

    let parser =
        TalkParser::with_config(ParserConfig::new().with_max_input_size(FULL_EXPORT.len()));
    assert!(parser.parse_file(&path).is_ok());
}

#[test]
fn test_strict_parser_accepts_clean_export() {
    let talk = TalkParser::strict().parse_str(FULL_EXPORT).unwrap();
    assert_eq!(talk.len(), 6);
}

#[test]
fn test_strict_parser_rejects_missing_header() {
    let err = TalkParser::strict()
        .parse_str("2024/01/15(月)\n09:00\tAlice\tHi")
        .unwrap_err();
    assert!(err.is_invalid_line());
    assert!(err.to_string().starts_with("Line 1:"));
}

#[test]
fn test_lenient_parser_matches_free_function() {
    let input = "garbage\n09:00\tAlice\tHi\n\tx\ty\tz\t";
    assert_eq!(TalkParser::new().parse_str(input).unwrap(), parse(input));
}

// =========================================================================
// Pipeline: parse -> filter -> merge -> write
// =========================================================================

#[test]
fn test_pipeline_filter_and_merge() {
    let talk = parse(FULL_EXPORT);

    let config = FilterConfig::new()
        .with_date_from("2024-01-30")
        .and_then(|f| f.with_date_to("2024-01-30"))
        .unwrap();
    let day_one = apply_filters(talk.messages.clone(), &config);
    assert_eq!(day_one.len(), 4);

    let merged = merge_consecutive(day_one.clone());
    // 田中, Bob, 田中 x2 -> three entries
    assert_eq!(merged.len(), 3);
    assert_eq!(merged[2].content, "[スタンプ]\n");

    let stats = ProcessingStats::new(day_one.len(), merged.len());
    assert_eq!(stats.messages_saved(), 1);

    let only_bob = apply_filters(talk.messages, &FilterConfig::new().with_sender("bob"));
    assert_eq!(only_bob.len(), 2);
}

#[cfg(all(feature = "csv-output", feature = "json-output"))]
#[test]
fn test_pipeline_all_formats() {
    let dir = TempDir::new().unwrap();
    let talk = parse(SCENARIO);
    let config = OutputConfig::new();

    for format in OutputFormat::all() {
        let path = dir.path().join(format!("talk.{}", format.extension()));
        let path = path.to_str().unwrap();
        linetalk::format::write_to_format(&talk, path, *format, &config).unwrap();

        let written = fs::read_to_string(path).unwrap();
        let expected = linetalk::format::to_format_string(&talk, *format, &config).unwrap();
        assert_eq!(written, expected, "{format}");
    }

    let json = fs::read_to_string(dir.path().join("talk.json")).unwrap();
    let back: Talk = serde_json::from_str(&json).unwrap();
    assert_eq!(back, talk);

    let csv_text = fs::read_to_string(dir.path().join("talk.csv")).unwrap();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(csv_text.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[1][3], "Morning!\n続きのメッセージ");
    assert_eq!(&rows[2][0], "2024/01/16(火)");
}
