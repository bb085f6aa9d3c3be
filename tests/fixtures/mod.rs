//! Test fixtures for golden-file assertions
//!
//! `headers/` holds a small header library with a bundle config and the
//! expected body of its single header.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Path to the header fixture directory
pub fn headers_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/headers")
}

/// Path to the fixture bundle config
pub fn headers_config() -> PathBuf {
    headers_dir().join("amalgam.toml")
}

/// Expected output after the banner
pub fn expected_body() -> String {
    fs::read_to_string(headers_dir().join("expected_body.h")).unwrap()
}

/// Copy the fixture library into `dest`, with an empty output directory
pub fn copy_headers_to(dest: &Path) {
    let include = dest.join("include");
    fs::create_dir_all(&include).unwrap();
    fs::create_dir_all(dest.join("single-header")).unwrap();
    for entry in fs::read_dir(headers_dir().join("include")).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), include.join(entry.file_name())).unwrap();
    }
    fs::copy(headers_config(), dest.join("amalgam.toml")).unwrap();
}
