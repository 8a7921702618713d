#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error {message} ({device})")]
    Transport { device: String, message: String },

    #[error("Error parsing provided value {value:?}: {reason}")]
    ValueParse { value: String, reason: String },

    #[error("Unknown command {0:?}")]
    UnknownCommand(String),

    #[error("Error sending notification: {0}")]
    Notifier(String),

    #[error("Device reported no lights: {0}")]
    NoLights(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn transport(device: impl ToString, message: impl Into<String>) -> Self {
        AppError::Transport {
            device: device.to_string(),
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Transport { .. } => "transport",
            AppError::ValueParse { .. } => "value_parse",
            AppError::UnknownCommand(_) => "unknown_command",
            AppError::Notifier(_) => "notifier",
            AppError::NoLights(_) => "no_lights",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Http(_) => "http",
            AppError::Json(_) => "json",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        });
        if let AppError::Transport { device, .. } = self {
            obj["device"] = serde_json::json!(device);
        }
        obj
    }
}
