use crate::models::campus::Campus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Leave,
    Permission,
    OnDuty,
    Compensation,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Leave => "leave",
            LeaveType::Permission => "permission",
            LeaveType::OnDuty => "on_duty",
            LeaveType::Compensation => "compensation",
        }
    }

    /// Sandwich rules apply only to multi-day leave kinds; Permission is a
    /// same-day time slice and Compensation is exempt by definition.
    pub fn sandwich_rules_apply(&self) -> bool {
        matches!(self, LeaveType::Leave | LeaveType::OnDuty)
    }
}

impl FromStr for LeaveType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leave" => Ok(LeaveType::Leave),
            "permission" => Ok(LeaveType::Permission),
            "on_duty" | "onduty" => Ok(LeaveType::OnDuty),
            "compensation" => Ok(LeaveType::Compensation),
            _ => Err(()),
        }
    }
}

/// Transient validation input; never persisted by this engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestWindow {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub leave_type: LeaveType,
    pub campus: Campus,
}

impl LeaveRequestWindow {
    pub fn new(
        from_date: NaiveDate,
        to_date: NaiveDate,
        leave_type: LeaveType,
        campus: Campus,
    ) -> Self {
        Self {
            from_date,
            to_date,
            leave_type,
            campus,
        }
    }
}

/// Structured verdict for a leave request. Errors block submission;
/// warnings are informational and do not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn from_parts(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_type_serde_snake_case() {
        let lt: LeaveType = serde_json::from_str("\"on_duty\"").unwrap();
        assert_eq!(lt, LeaveType::OnDuty);
        let value = serde_json::to_value(LeaveType::Compensation).unwrap();
        assert_eq!(value, serde_json::json!("compensation"));
    }

    #[test]
    fn sandwich_rules_apply_only_to_leave_and_on_duty() {
        assert!(LeaveType::Leave.sandwich_rules_apply());
        assert!(LeaveType::OnDuty.sandwich_rules_apply());
        assert!(!LeaveType::Permission.sandwich_rules_apply());
        assert!(!LeaveType::Compensation.sandwich_rules_apply());
    }

    #[test]
    fn from_parts_derives_validity_from_errors_only() {
        let result =
            ValidationResult::from_parts(Vec::new(), vec!["request includes a holiday".into()]);
        assert!(result.is_valid);

        let result = ValidationResult::from_parts(vec!["past date".into()], Vec::new());
        assert!(!result.is_valid);
    }
}
