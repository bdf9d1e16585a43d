//! Per-project validation outcomes.

use serde::Serialize;

/// Result of checking one example project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Ok,
    /// No manifest file in the project directory.
    MissingManifest,
    /// The manifest exists but is unreadable or not a JSON object.
    InvalidManifest { reason: String },
    /// The manifest declares a different name (or none at all).
    IdentityMismatch {
        expected: String,
        actual: Option<String>,
    },
    /// Directory and manifest agree, but the registry tool does not list the
    /// package.
    NotInRegistry { expected: String },
}

impl ValidationOutcome {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Short machine-readable kind, matching the serialized `status` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::MissingManifest => "missing_manifest",
            Self::InvalidManifest { .. } => "invalid_manifest",
            Self::IdentityMismatch { .. } => "identity_mismatch",
            Self::NotInRegistry { .. } => "not_in_registry",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_with_status_tag() {
        let outcome = ValidationOutcome::IdentityMismatch {
            expected: "@examples/go-docker".to_string(),
            actual: Some("@examples/wrong-name".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "status": "identity_mismatch",
                "expected": "@examples/go-docker",
                "actual": "@examples/wrong-name",
            })
        );
        assert_eq!(
            serde_json::to_value(ValidationOutcome::Ok).unwrap(),
            json!({"status": "ok"})
        );
    }

    #[test]
    fn kind_matches_tag() {
        let outcomes = [
            ValidationOutcome::Ok,
            ValidationOutcome::MissingManifest,
            ValidationOutcome::InvalidManifest {
                reason: "x".to_string(),
            },
            ValidationOutcome::IdentityMismatch {
                expected: "a".to_string(),
                actual: None,
            },
            ValidationOutcome::NotInRegistry {
                expected: "a".to_string(),
            },
        ];
        for outcome in outcomes {
            let value = serde_json::to_value(&outcome).unwrap();
            assert_eq!(value["status"], outcome.kind());
        }
    }
}
