//! amalgam - single-header bundler
//!
//! This crate bundles an ordered list of C/C++ headers into one
//! distributable header: include guards and configured lines are stripped,
//! include directives are hoisted into a single sorted block, and the result
//! is wrapped in a fresh include guard under a documentation banner.

pub mod bundle;
pub mod config;
pub mod logging;

pub use amalgam_filter::{classify_line, LineAction, LineFilterRules, StripRule};
pub use bundle::{BundleError, BundleResult, Bundler, CheckOutcome, ExplainOutput};
pub use config::{BundleSpec, ConditionalScope, ConfigError};
