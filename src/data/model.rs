use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record – one row of the data file
// ---------------------------------------------------------------------------

/// A single file entry (one data row of the CSV).
///
/// Serializes as a flat JSON object: `date`, `file_name`, then any
/// passthrough columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Creation timestamp as written in the file, not validated.
    pub date: String,
    pub file_name: String,
    /// Every other column, untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Record {
    pub fn new(date: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            file_name: file_name.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Builder-style helper for attaching a passthrough column.
    pub fn with_extra(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(column.into(), value.into());
        self
    }

    /// Milliseconds since the Unix epoch, if `date` is recognised.
    pub fn timestamp(&self) -> Option<i64> {
        super::date::parse_timestamp(&self.date)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.file_name, self.date)
    }
}
