use std::fs;
use std::path::Path;

use ttv_parser::ReportParser;

#[test]
fn run_golden_tests() {
    let golden_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden");
    let parser = ReportParser::with_year(2024);

    for entry in fs::read_dir(&golden_dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map_or(true, |ext| ext != "txt") {
            continue;
        }

        let page = fs::read_to_string(&path).expect("Failed to read page");
        let report = parser
            .parse(&page)
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", path, e));
        let actual = serde_json::to_value(&report).expect("Failed to serialize report");

        let golden_path = path.with_extension("golden.json");
        if std::env::var("UPDATE_GOLDEN").is_ok() {
            let json = serde_json::to_string_pretty(&actual).unwrap();
            fs::write(&golden_path, json).expect("Failed to update golden file");
        } else {
            let expected = fs::read_to_string(&golden_path)
                .expect("Failed to read golden file (run with UPDATE_GOLDEN=1 to create)");
            let expected: serde_json::Value =
                serde_json::from_str(&expected).expect("Golden file is not valid JSON");
            assert_eq!(actual, expected, "Golden test failed for {:?}", path);
        }
    }
}
