//! Single-header bundling
//!
//! Reads the configured headers in order, filters their lines, hoists the
//! include directives into one sorted, deduplicated block, and writes the
//! result wrapped in an include guard under a documentation banner.

mod banner;
mod collect;
mod explain;

pub use banner::{undated_banner, Banner};
pub use collect::{file_marker, Collected, Collector};
pub use explain::{ExplainOutput, ExplainedLine};

use chrono::{Local, NaiveDate};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{BundleSpec, ConditionalScope, ConfigError};

/// Separator between the banner and the body of a rendered header
const BANNER_END: &str = "*/\n\n";

/// Errors for bundling operations
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("Failed to read input header {path}: {source}")]
    MissingInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read existing output {path}: {source}")]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result of comparing an existing output file against a fresh render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Body matches; only the banner may differ
    UpToDate,
    /// Body differs, or the file has no recognizable banner
    Stale,
    /// Output file does not exist
    Missing,
}

/// Single-header bundler
pub struct Bundler {
    spec: BundleSpec,
    date: NaiveDate,
}

impl Bundler {
    /// Create a bundler dated today (local time)
    pub fn new(spec: BundleSpec) -> Self {
        Self {
            spec,
            date: Local::now().date_naive(),
        }
    }

    /// Create a bundler from a config file, or the default config lookup
    /// when `path` is `None` (see [`BundleSpec::load`])
    pub fn from_config(path: Option<&Path>) -> Result<Self, BundleError> {
        Ok(Self::new(BundleSpec::load(path)?))
    }

    /// Set the banner date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Override the conditional flag lifetime
    pub fn with_scope(mut self, scope: ConditionalScope) -> Self {
        self.spec.conditional_scope = scope;
        self
    }

    pub fn spec(&self) -> &BundleSpec {
        &self.spec
    }

    /// Confirm every input header exists and is a file
    pub fn verify_inputs(&self) -> Result<Vec<PathBuf>, BundleError> {
        let mut paths = Vec::new();
        for (_, path) in self.spec.input.part_paths() {
            let metadata = fs::metadata(&path).map_err(|source| BundleError::MissingInput {
                path: path.clone(),
                source,
            })?;
            if !metadata.is_file() {
                return Err(BundleError::MissingInput {
                    path,
                    source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
                });
            }
            paths.push(path);
        }
        Ok(paths)
    }

    /// Read and filter every input header
    pub fn collect(&self) -> Result<Collected, BundleError> {
        let mut collector = Collector::new(&self.spec.filter, self.spec.conditional_scope);

        for (name, path) in self.spec.input.part_paths() {
            debug!(path = %path.display(), "Reading header");
            let text = read_input(&path)?;
            collector.add_file(&name, &text);
        }

        Ok(collector.finish())
    }

    /// Render the complete single header in memory
    pub fn render(&self) -> Result<BundleResult, BundleError> {
        let collected = self.collect()?;
        let banner = Banner::from_output(&self.spec.output, self.date).render();
        let body = render_body(&self.spec.output.guard, &collected);
        let body_sha256 = sha256_hex(&body);

        Ok(BundleResult {
            text: format!("{}\n\n{}", banner, body),
            body_sha256,
            includes: collected.includes.into_iter().collect(),
            parts: self.spec.input.parts.clone(),
            leaked_conditionals: collected.leaked_conditionals,
        })
    }

    /// Render and write to the configured output path
    ///
    /// All inputs are read before the output file is created.
    pub fn run(&self) -> Result<BundleResult, BundleError> {
        let result = self.render()?;
        result.write(&self.spec.output.path)?;
        info!(
            path = %self.spec.output.path.display(),
            parts = result.parts.len(),
            includes = result.includes.len(),
            "Wrote single header"
        );
        Ok(result)
    }

    /// Compare the existing output against a fresh render
    ///
    /// The banner's `@date` and `@copyright` lines are ignored; every other
    /// banner line and the whole body must match.
    pub fn check(&self) -> Result<CheckOutcome, BundleError> {
        let result = self.render()?;
        let path = &self.spec.output.path;

        let existing = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CheckOutcome::Missing),
            Err(source) => {
                return Err(BundleError::ReadOutput {
                    path: path.clone(),
                    source,
                })
            }
        };

        let fresh_banner = split_banner(&result.text).map(|(banner, _)| undated_banner(banner));
        let outcome = match split_banner(&existing) {
            Some((banner, body))
                if sha256_hex(body) == result.body_sha256
                    && Some(undated_banner(banner)) == fresh_banner =>
            {
                CheckOutcome::UpToDate
            }
            _ => CheckOutcome::Stale,
        };
        debug!(path = %path.display(), ?outcome, "Checked single header");
        Ok(outcome)
    }

    /// Explain the line decisions for one header
    pub fn explain_file(&self, path: &Path) -> Result<ExplainOutput, BundleError> {
        let text = read_input(path)?;
        let name = path
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(ExplainOutput::explain(&name, &text, &self.spec.filter))
    }
}

/// Rendered single header
#[derive(Debug, Clone)]
pub struct BundleResult {
    /// Complete output text
    pub text: String,
    /// SHA-256 of everything after the banner
    pub body_sha256: String,
    /// Include block, in output order
    pub includes: Vec<String>,
    /// Bundled headers, in output order
    pub parts: Vec<String>,
    /// Headers that ended inside an open conditional block
    pub leaked_conditionals: Vec<String>,
}

impl BundleResult {
    /// Write the text to `path`, flushing before returning
    pub fn write(&self, path: &Path) -> Result<(), BundleError> {
        let to_write_error = |source| BundleError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(to_write_error)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.text.as_bytes())
            .map_err(to_write_error)?;
        writer.flush().map_err(to_write_error)?;
        Ok(())
    }

    /// Text after the banner
    pub fn body(&self) -> &str {
        split_banner(&self.text).map(|(_, b)| b).unwrap_or(&self.text)
    }
}

/// Split rendered text into banner and body
pub fn split_banner(text: &str) -> Option<(&str, &str)> {
    let idx = text.find(BANNER_END)?;
    let banner_end = idx + 2;
    Some((&text[..banner_end], &text[idx + BANNER_END.len()..]))
}

fn render_body(guard: &str, collected: &Collected) -> String {
    let includes: Vec<&str> = collected.includes.iter().map(String::as_str).collect();
    format!(
        "#ifndef {guard}\n#define {guard}\n\n{}\n{}#endif",
        includes.join("\n"),
        collected.content.join("\n"),
    )
}

fn read_input(path: &Path) -> Result<String, BundleError> {
    fs::read_to_string(path).map_err(|source| BundleError::MissingInput {
        path: path.to_path_buf(),
        source,
    })
}

fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
