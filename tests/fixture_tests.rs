//! Golden-file tests against the header fixture library

mod fixtures;

use amalgam::bundle::{file_marker, split_banner};
use amalgam::{BundleSpec, Bundler, CheckOutcome};
use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 7).unwrap()
}

#[test]
fn test_fixture_body_matches_golden() {
    let spec = BundleSpec::from_file(&fixtures::headers_config()).unwrap();
    let result = Bundler::new(spec).with_date(date()).render().unwrap();

    assert_eq!(result.body(), fixtures::expected_body());
}

#[test]
fn test_fixture_banner() {
    let spec = BundleSpec::from_file(&fixtures::headers_config()).unwrap();
    let result = Bundler::new(spec).with_date(date()).render().unwrap();
    let (banner, _) = split_banner(&result.text).unwrap();

    assert_eq!(
        banner,
        "/**\n * @file TERM.h\n * @author amalgam tests\n * @brief Fixture bundle\n * @version 0.3\n * @date 2025-4-7\n * \n * @copyright Copyright (c) 2025\n * \n */"
    );
}

#[test]
fn test_fixture_conditional_includes_stay_in_place() {
    let spec = BundleSpec::from_file(&fixtures::headers_config()).unwrap();
    let result = Bundler::new(spec).render().unwrap();

    assert!(!result.includes.iter().any(|i| i.contains("conio.h")));
    assert!(!result.includes.iter().any(|i| i.contains("termios.h")));
    assert!(result.body().contains("#ifdef _WIN32\n#include <conio.h>\n#else\n"));
    assert!(result.leaked_conditionals.is_empty());
}

#[test]
fn test_fixture_write_then_check() {
    let dir = TempDir::new().unwrap();
    fixtures::copy_headers_to(dir.path());
    let config = dir.path().join("amalgam.toml");

    let spec = BundleSpec::from_file(&config).unwrap();
    let bundler = Bundler::new(spec).with_date(date());
    assert_eq!(bundler.check().unwrap(), CheckOutcome::Missing);

    bundler.run().unwrap();
    let written = fs::read_to_string(dir.path().join("single-header/TERM.h")).unwrap();
    assert!(written.ends_with(&fixtures::expected_body()));
    assert_eq!(bundler.check().unwrap(), CheckOutcome::UpToDate);

    // Touching a header changes the body.
    let command_h = dir.path().join("include/Command.h");
    let mut text = fs::read_to_string(&command_h).unwrap();
    text.push_str("int extra();\n");
    fs::write(&command_h, text).unwrap();
    assert_eq!(bundler.check().unwrap(), CheckOutcome::Stale);
}

#[test]
fn test_fixture_markers_in_order() {
    let spec = BundleSpec::from_file(&fixtures::headers_config()).unwrap();
    let parts = spec.input.parts.clone();
    let result = Bundler::new(spec).render().unwrap();
    let body = result.body();

    let mut cursor = 0;
    for part in &parts {
        let marker = file_marker(part);
        let open = body[cursor..].find(&marker).expect("opening marker") + cursor;
        let close = body[open + marker.len()..]
            .find(&marker)
            .expect("closing marker")
            + open
            + marker.len();
        cursor = close + marker.len();
    }
    assert_eq!(&body[cursor..], "\n#endif");
}
