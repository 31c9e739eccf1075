//! Mapping from status and priority strings to visual categories.
//!
//! The mappings are total: any input string lands in exactly one category,
//! with [`StatusCategory::Neutral`] as the catch-all.

/// Visual bucket a status or priority renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl StatusCategory {
    pub fn of_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "available" | "success" | "completed" | "successful" => StatusCategory::Success,
            "running" | "busy" | "inprogress" | "in progress" | "pending" => {
                StatusCategory::Warning
            }
            "failed" | "error" | "disconnected" | "faulted" => StatusCategory::Danger,
            _ => StatusCategory::Neutral,
        }
    }

    pub fn of_priority(priority: &str) -> Self {
        match priority.to_lowercase().as_str() {
            "high" | "critical" => StatusCategory::Danger,
            "medium" => StatusCategory::Warning,
            "low" => StatusCategory::Success,
            _ => StatusCategory::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_sets_map_case_insensitively() {
        assert_eq!(StatusCategory::of_status("Available"), StatusCategory::Success);
        assert_eq!(StatusCategory::of_status("SUCCESSFUL"), StatusCategory::Success);
        assert_eq!(StatusCategory::of_status("InProgress"), StatusCategory::Warning);
        assert_eq!(StatusCategory::of_status("in progress"), StatusCategory::Warning);
        assert_eq!(StatusCategory::of_status("pending"), StatusCategory::Warning);
        assert_eq!(StatusCategory::of_status("Faulted"), StatusCategory::Danger);
        assert_eq!(StatusCategory::of_status("disconnected"), StatusCategory::Danger);
    }

    #[test]
    fn unknown_inputs_are_neutral_not_errors() {
        for weird in ["Xyz123", "", "  ", "☃", "completed-ish"] {
            assert_eq!(StatusCategory::of_status(weird), StatusCategory::Neutral);
            assert_eq!(StatusCategory::of_priority(weird), StatusCategory::Neutral);
        }
    }

    #[test]
    fn priority_mapping_matches_severity() {
        assert_eq!(StatusCategory::of_priority("Critical"), StatusCategory::Danger);
        assert_eq!(StatusCategory::of_priority("high"), StatusCategory::Danger);
        assert_eq!(StatusCategory::of_priority("Medium"), StatusCategory::Warning);
        assert_eq!(StatusCategory::of_priority("LOW"), StatusCategory::Success);
    }
}
