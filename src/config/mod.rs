//! Bundle configuration
//!
//! A bundle is described by a [`BundleSpec`]: the ordered input headers, the
//! output file and its banner metadata, and the line filter rules. Specs come
//! either from the built-in defaults or from a TOML file (`amalgam.toml`).

mod defaults;
mod spec;

pub use defaults::{BUILTIN_PARTS, DEFAULT_CONFIG_FILE};
pub use spec::{BundleSpec, ConditionalScope, ConfigError, InputSpec, OutputSpec};
