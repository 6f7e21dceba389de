//! Property tests over the embedded dictionaries

use linkscan_engine::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_records_cover_input(text in "\\PC{0,64}") {
        let scanner = Scanner::new().unwrap();
        let records = scanner.records(&text);

        let joined: String = records.iter().map(|r| r.value.as_str()).collect();
        prop_assert_eq!(joined, text.clone());

        let mut expected_start = 0;
        for record in &records {
            prop_assert_eq!(record.start, expected_start);
            prop_assert_eq!(record.end - record.start, record.value.chars().count());
            expected_start = record.end;
        }
        prop_assert_eq!(expected_start, text.chars().count());
    }

    #[test]
    fn prop_json_matches_records(text in "[a-z0-9.:/@ \\-]{0,48}") {
        let scanner = Scanner::new().unwrap();
        let parsed: Vec<TokenRecord> = serde_json::from_str(&scanner.to_json(&text).unwrap()).unwrap();
        prop_assert_eq!(parsed, scanner.records(&text));
    }

    #[test]
    fn prop_batch_matches_single_runs(texts in prop::collection::vec("[a-zA-Z0-9.:/@_ \\n-]{0,32}", 0..16)) {
        let scanner = Scanner::builder().parallel_threshold(0).build().unwrap();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let batch = scanner.run_batch(&refs);

        prop_assert_eq!(batch.len(), refs.len());
        for (text, tokens) in refs.iter().zip(&batch) {
            prop_assert_eq!(&scanner.run(text), tokens);
        }
    }
}
