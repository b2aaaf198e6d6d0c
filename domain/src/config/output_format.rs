//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for batch results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table, one line per question (default)
    #[default]
    Table,
    /// Full result records as JSON
    Json,
    /// Only question identifiers and selected letters, as JSON
    Simple,
    /// Input questions echoed back with the selected option flagged
    Annotated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Annotated).unwrap();
        assert_eq!(json, "\"annotated\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"simple\"").unwrap();
        assert_eq!(format, OutputFormat::Simple);
    }
}
