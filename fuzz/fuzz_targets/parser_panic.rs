#![no_main]
use libfuzzer_sys::fuzz_target;
use ttv_parser::{ReportParser, parse_event_row, parse_match_head};

fuzz_target!(|data: &[u8]| {
    // Lossy conversion keeps inputs that are almost text.
    let s = String::from_utf8_lossy(data);
    let _ = ReportParser::with_year(2024).parse(&s);
    for line in s.lines() {
        let _ = parse_match_head(line);
        let _ = parse_event_row(line);
    }
});
