//! Built-in bundle defaults
//!
//! Used when no config file is given. Paths are relative to the working
//! directory, which is expected to be the `tools/` directory of the library.

use amalgam_filter::LineFilterRules;
use std::path::PathBuf;

use super::spec::{BundleSpec, ConditionalScope, InputSpec, OutputSpec};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "amalgam.toml";

/// Headers bundled by default, in output order
pub const BUILTIN_PARTS: &[&str] = &["Colors.h", "Config.h", "Prompt.h", "Command.h", "CLI.h"];

impl BundleSpec {
    /// The built-in NCLI single-header bundle
    pub fn builtin() -> Self {
        Self {
            input: InputSpec {
                base_dir: PathBuf::from("../include"),
                parts: BUILTIN_PARTS.iter().map(|p| p.to_string()).collect(),
            },
            output: OutputSpec {
                path: PathBuf::from("../single-header/NCLI.h"),
                file: Some("NCLI.h".to_string()),
                guard: "NCLI_H".to_string(),
                author: "NoahGWood".to_string(),
                brief: "Single-header include for the NCLI library".to_string(),
                version: "0.1".to_string(),
            },
            filter: LineFilterRules {
                strip_any: vec!["// Forward declare".to_string()],
                strip_starts: vec!["#pragma once".to_string()],
                strip_exact: vec!["\n".to_string(), "\n\n".to_string()],
            },
            conditional_scope: ConditionalScope::default(),
        }
    }
}
