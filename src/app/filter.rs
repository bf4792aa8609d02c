use thiserror::Error;

use crate::feed::InterfaceRecord;

/// The three filter values as picked in the controls row. An empty string
/// means "not selected"; an empty target widens the view to every target of
/// the chosen source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(in crate::app) struct FilterSelection {
    pub source: String,
    pub target: String,
    pub protocol: String,
}

/// The two selection shapes the viewer refuses outright. Each variant keeps
/// its own user-facing message so the controls row can show a specific error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub(in crate::app) enum FilterError {
    #[error("Select a source system.")]
    MissingSource,
    #[error("Source and target must be different systems.")]
    SourceEqualsTarget,
}

impl FilterSelection {
    /// Apply-time validation; no partial render is attempted on failure.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.source.is_empty() {
            return Err(FilterError::MissingSource);
        }
        if !self.target.is_empty() && self.target == self.source {
            return Err(FilterError::SourceEqualsTarget);
        }
        Ok(())
    }

    /// Records matching the selection, in feed order. Without a source
    /// nothing matches; target and protocol only narrow when set.
    pub fn matching(&self, records: &[InterfaceRecord]) -> Vec<InterfaceRecord> {
        if self.source.is_empty() {
            return Vec::new();
        }

        records
            .iter()
            .filter(|record| {
                record.source == self.source
                    && (self.target.is_empty() || record.target == self.target)
                    && (self.protocol.is_empty() || record.protocol == self.protocol)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, source: &str, target: &str, protocol: &str) -> InterfaceRecord {
        InterfaceRecord {
            id: id.to_owned(),
            source: source.to_owned(),
            target: target.to_owned(),
            protocol: protocol.to_owned(),
            schedule: "daily".to_owned(),
            owner: "ops".to_owned(),
        }
    }

    fn sample() -> Vec<InterfaceRecord> {
        vec![
            record("1", "A", "B", "SFTP"),
            record("2", "A", "C", "FTP"),
            record("3", "B", "C", "SFTP"),
            record("4", "A", "B", "MQ"),
        ]
    }

    fn selection(source: &str, target: &str, protocol: &str) -> FilterSelection {
        FilterSelection {
            source: source.to_owned(),
            target: target.to_owned(),
            protocol: protocol.to_owned(),
        }
    }

    #[test]
    fn missing_source_is_rejected_with_its_own_message() {
        let error = selection("", "B", "").validate().unwrap_err();
        assert_eq!(error, FilterError::MissingSource);
        assert_eq!(error.to_string(), "Select a source system.");
    }

    #[test]
    fn source_equal_to_target_is_rejected_with_its_own_message() {
        let error = selection("A", "A", "").validate().unwrap_err();
        assert_eq!(error, FilterError::SourceEqualsTarget);
        assert_eq!(
            error.to_string(),
            "Source and target must be different systems."
        );
    }

    #[test]
    fn source_without_target_is_valid() {
        assert!(selection("A", "", "").validate().is_ok());
        assert!(selection("A", "B", "SFTP").validate().is_ok());
    }

    #[test]
    fn source_only_matches_every_outgoing_link() {
        let matched = selection("A", "", "").matching(&sample());
        let ids: Vec<&str> = matched.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "4"]);
    }

    #[test]
    fn target_narrows_to_one_pair() {
        let matched = selection("A", "B", "").matching(&sample());
        let ids: Vec<&str> = matched.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, ["1", "4"]);
    }

    #[test]
    fn protocol_narrows_further() {
        let matched = selection("A", "B", "MQ").matching(&sample());
        let ids: Vec<&str> = matched.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, ["4"]);
    }

    #[test]
    fn empty_source_matches_nothing() {
        assert!(selection("", "", "").matching(&sample()).is_empty());
    }

    #[test]
    fn unmatched_source_yields_an_empty_set() {
        assert!(selection("Z", "", "").matching(&sample()).is_empty());
    }
}
