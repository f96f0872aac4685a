//! Warning types for non-fatal errors during data loading.
//!
//! Source files for NEOs and close approaches are large and hand-curated, so
//! a single bad row should not abort a load. Rows that cannot be used are
//! skipped and reported as a [`Warning`]; a [`WarningCollector`] accumulates
//! them for the caller.
//!
//! # Examples
//!
//! ```
//! use neoscan_io::warning::{Warning, WarningCollector};
//!
//! let mut collector = WarningCollector::new();
//!
//! collector.add(Warning::MalformedRow {
//!     line_number: 5,
//!     error: "found 3 fields, expected 16".to_string(),
//! });
//!
//! collector.add(Warning::SkippedRow {
//!     line_number: 10,
//!     reason: "duplicate designation".to_string(),
//! });
//!
//! let warnings = collector.into_warnings();
//! assert_eq!(warnings.len(), 2);
//! ```

/// A non-fatal warning that occurred while loading a data file.
///
/// Each variant includes the 1-based line (CSV) or row (JSON) number where
/// the problem occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A row could not be decoded into a record.
    ///
    /// The row is skipped and loading continues with the next row.
    MalformedRow {
        /// The 1-based line or row number where the error occurred.
        line_number: usize,
        /// A description of the decoding error.
        error: String,
    },

    /// A row decoded but was rejected by a validation rule.
    SkippedRow {
        /// The 1-based line or row number that was skipped.
        line_number: usize,
        /// The reason the row was skipped.
        reason: String,
    },
}

impl Warning {
    /// Returns the line number associated with this warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use neoscan_io::warning::Warning;
    ///
    /// let warning = Warning::MalformedRow {
    ///     line_number: 42,
    ///     error: "invalid float literal".to_string(),
    /// };
    /// assert_eq!(warning.line_number(), 42);
    /// ```
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedRow { line_number, .. } | Self::SkippedRow { line_number, .. } => {
                *line_number
            }
        }
    }

    /// Returns a human-readable description of the warning.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::MalformedRow { line_number, error } => {
                format!("line {}: malformed row: {}", line_number, error)
            }
            Self::SkippedRow {
                line_number,
                reason,
            } => {
                format!("line {}: skipped: {}", line_number, reason)
            }
        }
    }

    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedRow { .. } => "malformed_row",
            Self::SkippedRow { .. } => "skipped_row",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}

/// Accumulates warnings while a file is being loaded.
///
/// Loading is single-threaded, so the collector is a plain owned buffer.
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    warnings: Vec<Warning>,
}

impl WarningCollector {
    /// Creates a new empty `WarningCollector`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning to the collector and logs it.
    pub fn add(&mut self, warning: Warning) {
        tracing::warn!(
            line = warning.line_number(),
            kind = warning.kind(),
            "{}",
            warning
        );
        self.warnings.push(warning);
    }

    /// Returns the number of warnings collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Returns `true` if no warnings have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns the collected warnings without consuming the collector.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Moves every warning from `other` into this collector.
    pub fn extend(&mut self, other: WarningCollector) {
        self.warnings.extend(other.warnings);
    }

    /// Consumes the collector and returns all collected warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
