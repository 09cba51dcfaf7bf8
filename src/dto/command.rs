use serde::{Deserialize, Serialize};

use crate::services::ServiceResult;

/// Outcome of an admin command: callers branch on `ok` and show `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub ok: bool,
    pub message: String,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

impl From<ServiceResult<String>> for CommandResult {
    fn from(value: ServiceResult<String>) -> Self {
        match value {
            Ok(message) => Self::success(message),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}
