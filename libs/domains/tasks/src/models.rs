use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Task status
///
/// The wire strings are fixed API contract: `todo`, `in progress`
/// (with a space), `completed`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema,
)]
pub enum TaskStatus {
    /// Task has not been started
    #[default]
    #[serde(rename = "todo")]
    #[strum(serialize = "todo")]
    Todo,
    /// Task is being worked on
    #[serde(rename = "in progress")]
    #[strum(serialize = "in progress")]
    InProgress,
    /// Task is done
    #[serde(rename = "completed")]
    #[strum(serialize = "completed")]
    Completed,
}

/// Task entity - a record held by the in-memory store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier, assigned by the service on creation
    pub id: String,
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// Current status
    pub status: TaskStatus,
}

/// DTO for creating or replacing a task.
///
/// All fields default when absent so a missing field surfaces as a
/// validation message rather than a decode failure. `status` stays a
/// raw string here: an unrecognized value must reach the validator and
/// come back as `Invalid status`, not as a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TaskPayload {
    /// Client-supplied id; ignored on create, must match the URL on update
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    status.parse::<TaskStatus>().map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("status");
        error.message = Some(Cow::Borrowed("Invalid status"));
        error
    })
}

/// Flatten validator output to the first failing message, checking
/// fields in declaration order so the wire message is deterministic.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    for field in ["title", "description", "status"] {
        let message = field_errors
            .get(field)
            .and_then(|errors| errors.first())
            .and_then(|error| error.message.as_ref());
        if let Some(message) = message {
            return message.to_string();
        }
    }
    "Invalid task".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, description: &str, status: &str) -> TaskPayload {
        TaskPayload {
            id: String::new(),
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        for status in ["todo", "in progress", "completed"] {
            assert!(payload("T", "D", status).validate().is_ok());
        }
    }

    #[test]
    fn test_empty_title_rejected() {
        let errors = payload("", "D", "todo").validate().unwrap_err();
        assert_eq!(first_validation_message(&errors), "Title is required");
    }

    #[test]
    fn test_empty_description_rejected() {
        let errors = payload("T", "", "todo").validate().unwrap_err();
        assert_eq!(first_validation_message(&errors), "Description is required");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let errors = payload("T", "D", "done").validate().unwrap_err();
        assert_eq!(first_validation_message(&errors), "Invalid status");
    }

    #[test]
    fn test_empty_status_rejected() {
        let errors = payload("T", "D", "").validate().unwrap_err();
        assert_eq!(first_validation_message(&errors), "Invalid status");
    }

    #[test]
    fn test_title_reported_before_other_failures() {
        let errors = payload("", "", "nope").validate().unwrap_err();
        assert_eq!(first_validation_message(&errors), "Title is required");
    }

    #[test]
    fn test_status_wire_strings_round_trip() {
        let task = Task {
            id: "1".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            status: TaskStatus::InProgress,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains(r#""status":"in progress""#));

        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn test_missing_fields_default_rather_than_fail_decoding() {
        let payload: TaskPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.title.is_empty());
        assert!(payload.description.is_empty());
        assert!(payload.status.is_empty());
    }
}
