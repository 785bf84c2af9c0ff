use serde::{Deserialize, Serialize};
use std::fmt;

/// Organizational site tag that scopes holidays and Saturday overrides.
///
/// Resolved per-user by the external auth/profile system and passed in on
/// every engine call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Campus(String);

impl Campus {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Campus {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for Campus {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// True when a record scoped to `scope` applies to a user at `campus`.
/// A record with no campus scope applies everywhere.
pub fn scope_applies(scope: Option<&Campus>, campus: &Campus) -> bool {
    match scope {
        None => true,
        Some(scoped) => scoped == campus,
    }
}
