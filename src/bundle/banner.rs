//! Documentation banner at the top of the bundled header

use chrono::{Datelike, NaiveDate};

use crate::config::OutputSpec;

/// Block-comment banner with Doxygen tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub file: String,
    pub author: String,
    pub brief: String,
    pub version: String,
    pub date: NaiveDate,
}

impl Banner {
    pub fn from_output(output: &OutputSpec, date: NaiveDate) -> Self {
        Self {
            file: output.file_name(),
            author: output.author.clone(),
            brief: output.brief.clone(),
            version: output.version.clone(),
            date,
        }
    }

    /// Render the banner. The date is not zero-padded (`2025-4-7`).
    pub fn render(&self) -> String {
        let year = self.date.year();
        format!(
            "/**\n * @file {}\n * @author {}\n * @brief {}\n * @version {}\n * @date {}-{}-{}\n * \n * @copyright Copyright (c) {}\n * \n */",
            self.file,
            self.author,
            self.brief,
            self.version,
            year,
            self.date.month(),
            self.date.day(),
            year,
        )
    }
}

/// Banner text without its wall-clock lines (`@date`, `@copyright`)
pub fn undated_banner(banner: &str) -> String {
    banner
        .lines()
        .filter(|l| !l.starts_with(" * @date ") && !l.starts_with(" * @copyright "))
        .collect::<Vec<_>>()
        .join("\n")
}
