use std::io::ErrorKind;

use tokio::process::Command;

use crate::config::NOTIFICATION_REPLACE_ID;
use crate::error::AppError;

#[allow(async_fn_in_trait)]
pub trait Notifier {
    async fn notify(&self, title: &str, message: &str) -> Result<(), AppError>;
}

/// Desktop notifications through `notify-send`.
pub struct DesktopNotifier {
    program: String,
    replace_id: String,
}

impl DesktopNotifier {
    pub fn new(program: impl Into<String>, replace_id: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            replace_id: replace_id.into(),
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new("notify-send", NOTIFICATION_REPLACE_ID)
    }
}

impl Notifier for DesktopNotifier {
    async fn notify(&self, title: &str, message: &str) -> Result<(), AppError> {
        let status = Command::new(&self.program)
            .arg(title)
            .arg(message)
            .arg("-r")
            .arg(&self.replace_id)
            .status()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => AppError::Notifier(format!("{} not found", self.program)),
                _ => AppError::Notifier(format!("{}: {}", self.program, e)),
            })?;

        if !status.success() {
            return Err(AppError::Notifier(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        Ok(())
    }
}

/// Used with `--no-notify`.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    async fn notify(&self, _title: &str, _message: &str) -> Result<(), AppError> {
        Ok(())
    }
}
