//! Bundle spec parsing and validation

use amalgam_filter::{LineFilterRules, RuleError};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid filter rules: {0}")]
    RuleError(#[from] RuleError),
}

/// Lifetime of the "inside conditional block" flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionalScope {
    /// One flag for the whole run. An unclosed `#ifdef` in one header keeps
    /// later headers' includes in place instead of collecting them.
    #[default]
    Run,
    /// Flag cleared at the start of every header.
    File,
}

impl std::str::FromStr for ConditionalScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "run" => Ok(ConditionalScope::Run),
            "file" => Ok(ConditionalScope::File),
            other => Err(format!("unknown conditional scope '{}'", other)),
        }
    }
}

/// Input headers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSpec {
    /// Directory the parts are read from
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Header file names, in output order
    pub parts: Vec<String>,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

impl InputSpec {
    /// Full path of every part, in order
    pub fn part_paths(&self) -> Vec<(String, PathBuf)> {
        self.parts
            .iter()
            .map(|p| (p.clone(), self.base_dir.join(p)))
            .collect()
    }
}

/// Output file and banner metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Where the single header is written
    pub path: PathBuf,

    /// Name shown in the `@file` banner line (defaults to the file name of `path`)
    #[serde(default)]
    pub file: Option<String>,

    /// Include guard macro
    pub guard: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub brief: String,

    #[serde(default)]
    pub version: String,
}

impl OutputSpec {
    /// Name for the `@file` banner line
    pub fn file_name(&self) -> String {
        match &self.file {
            Some(f) => f.clone(),
            None => self
                .path
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Complete description of one bundle run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleSpec {
    /// Conditional flag lifetime (default: "run")
    #[serde(default)]
    pub conditional_scope: ConditionalScope,

    pub input: InputSpec,

    pub output: OutputSpec,

    /// Line filter rules (default: none)
    #[serde(default)]
    pub filter: LineFilterRules,
}

impl BundleSpec {
    /// Load and parse a spec from a TOML file
    ///
    /// Relative `input.base_dir` and `output.path` are resolved against the
    /// directory containing the file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let mut spec = Self::from_str(&contents)?;

        if let Some(dir) = path.parent() {
            if spec.input.base_dir.is_relative() {
                spec.input.base_dir = dir.join(&spec.input.base_dir);
            }
            if spec.output.path.is_relative() {
                spec.output.path = dir.join(&spec.output.path);
            }
        }

        Ok(spec)
    }

    /// Parse a spec from a TOML string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let spec: BundleSpec = toml::from_str(s)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Load from `path`, or fall back to [`BundleSpec::builtin`] when no
    /// path is given and the default config file does not exist
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default = Path::new(super::DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::builtin())
                }
            }
        }
    }

    /// Validate the spec
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.parts.is_empty() {
            return Err(ConfigError::ValidationError(
                "At least one header must be listed in 'input.parts'".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for part in &self.input.parts {
            if part.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "Empty entry in 'input.parts'".to_string(),
                ));
            }
            if !seen.insert(part.as_str()) {
                warn!(part = part.as_str(), "Header listed more than once in 'input.parts'");
            }
        }

        Self::validate_guard(&self.output.guard)?;
        self.filter.validate()?;

        Ok(())
    }

    fn validate_guard(guard: &str) -> Result<(), ConfigError> {
        let ident = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        if !ident.is_match(guard) {
            return Err(ConfigError::ValidationError(format!(
                "Include guard '{}' is not a valid macro name",
                guard
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r##"
conditional_scope = "file"

[input]
base_dir = "include"
parts = ["A.h", "B.h"]

[output]
path = "dist/AB.h"
guard = "AB_H"
author = "someone"
brief = "A and B"
version = "1.2"

[filter]
strip_starts = ["#pragma once"]
"##;

    #[test]
    fn test_parse_full_config() {
        let spec = BundleSpec::from_str(SAMPLE).unwrap();
        assert_eq!(spec.conditional_scope, ConditionalScope::File);
        assert_eq!(spec.input.parts, vec!["A.h", "B.h"]);
        assert_eq!(spec.output.guard, "AB_H");
        assert_eq!(spec.output.file_name(), "AB.h");
        assert_eq!(spec.filter.strip_starts, vec!["#pragma once"]);
        assert!(spec.filter.strip_any.is_empty());
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let spec = BundleSpec::from_str(
            r##"
[input]
parts = ["A.h"]

[output]
path = "out.h"
guard = "OUT_H"
"##,
        )
        .unwrap();
        assert_eq!(spec.conditional_scope, ConditionalScope::Run);
        assert_eq!(spec.input.base_dir, PathBuf::from("."));
        assert_eq!(spec.output.author, "");
        assert_eq!(spec.filter, LineFilterRules::default());
    }

    #[test]
    fn test_missing_guard_is_parse_error() {
        let err = BundleSpec::from_str(
            r##"
[input]
parts = ["A.h"]

[output]
path = "out.h"
"##,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_reject_empty_parts() {
        let err = BundleSpec::from_str(
            r##"
[input]
parts = []

[output]
path = "out.h"
guard = "OUT_H"
"##,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_duplicate_parts_allowed() {
        let mut spec = BundleSpec::builtin();
        spec.input.parts.push("CLI.h".to_string());
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_reject_bad_guard() {
        for guard in ["", "1ABC", "MY-GUARD", "A B"] {
            let mut spec = BundleSpec::builtin();
            spec.output.guard = guard.to_string();
            assert!(spec.validate().is_err(), "guard {:?} should be rejected", guard);
        }
        let mut spec = BundleSpec::builtin();
        spec.output.guard = "_my_guard_2".to_string();
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_reject_empty_strip_pattern() {
        let mut spec = BundleSpec::builtin();
        spec.filter.strip_any.push(String::new());
        assert!(matches!(spec.validate(), Err(ConfigError::RuleError(_))));
    }

    #[test]
    fn test_from_file_resolves_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("amalgam.toml");
        fs::write(&path, SAMPLE).unwrap();

        let spec = BundleSpec::from_file(&path).unwrap();
        assert_eq!(spec.input.base_dir, dir.path().join("include"));
        assert_eq!(spec.output.path, dir.path().join("dist/AB.h"));
        assert_eq!(
            spec.input.part_paths()[1].1,
            dir.path().join("include").join("B.h")
        );
    }

    #[test]
    fn test_from_file_missing() {
        let dir = TempDir::new().unwrap();
        let err = BundleSpec::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_scope_from_str() {
        assert_eq!("run".parse::<ConditionalScope>(), Ok(ConditionalScope::Run));
        assert_eq!("file".parse::<ConditionalScope>(), Ok(ConditionalScope::File));
        assert!("global".parse::<ConditionalScope>().is_err());
    }
}
