//! notify-send notification adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::config::app_config::DEFAULT_APP_NAME;
use crate::domain::notification::NotificationRequest;

use super::is_service_unavailable;

/// Default binary invoked on the PATH
const NOTIFY_SEND_PROGRAM: &str = "notify-send";

/// notify-send notification adapter
pub struct NotifySendNotifier {
    /// Application name for notifications
    app_name: String,
    /// Binary to invoke
    program: String,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            program: NOTIFY_SEND_PROGRAM.to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            program: NOTIFY_SEND_PROGRAM.to_string(),
        }
    }

    /// Use a specific notify-send binary instead of resolving on the PATH
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let mut command = Command::new(&self.program);
        command.args(["--app-name", &self.app_name]);
        if let Some(icon) = request.icon.as_deref() {
            command.args(["--icon", icon]);
        }
        command.arg(&request.summary);
        if let Some(body) = request.body.as_deref() {
            command.arg(body);
        }

        // stderr is captured so a dead session bus can be told apart
        // from any other notify-send failure
        let output = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::NotifySendNotFound
                } else {
                    NotificationError::ShowFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if is_service_unavailable(&stderr) {
                return Err(NotificationError::ServiceUnavailable(
                    stderr.trim().to_string(),
                ));
            }
            return Err(NotificationError::ShowFailed(format!(
                "notify-send exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_with_custom_app_name() {
        let notifier = NotifySendNotifier::with_app_name("TestApp");
        assert_eq!(notifier.app_name, "TestApp");
        assert_eq!(notifier.program, "notify-send");
    }

    #[cfg(unix)]
    mod scripted {
        use super::*;
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;

        /// Write an executable stand-in for notify-send
        fn fake_notify_send(dir: &tempfile::TempDir, script: &str) -> PathBuf {
            let path = dir.path().join("notify-send");
            std::fs::write(&path, script).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn notifier(program: PathBuf) -> NotifySendNotifier {
            NotifySendNotifier::new().with_program(program.to_string_lossy().to_string())
        }

        #[tokio::test]
        async fn success_returns_ok() {
            let dir = tempfile::tempdir().unwrap();
            let program = fake_notify_send(&dir, "#!/bin/sh\nexit 0\n");

            let result = notifier(program)
                .show(&NotificationRequest::new("Hi"))
                .await;
            assert!(result.is_ok());
        }

        #[tokio::test]
        async fn dead_session_bus_is_classified_unavailable() {
            let dir = tempfile::tempdir().unwrap();
            let program = fake_notify_send(
                &dir,
                "#!/bin/sh\n\
                 echo \"GDBus.Error:org.freedesktop.DBus.Error.ServiceUnknown: \
                 The name org.freedesktop.Notifications was not provided by any \
                 .service files\" >&2\n\
                 exit 1\n",
            );

            let result = notifier(program)
                .show(&NotificationRequest::new("Hi"))
                .await;
            assert!(matches!(
                result,
                Err(NotificationError::ServiceUnavailable(_))
            ));
        }

        #[tokio::test]
        async fn other_failure_is_a_hard_error() {
            let dir = tempfile::tempdir().unwrap();
            let program = fake_notify_send(
                &dir,
                "#!/bin/sh\necho \"Invalid number of options\" >&2\nexit 1\n",
            );

            let result = notifier(program)
                .show(&NotificationRequest::new("Hi"))
                .await;
            assert!(matches!(result, Err(NotificationError::ShowFailed(_))));
        }

        #[tokio::test]
        async fn missing_binary_maps_to_not_found() {
            let dir = tempfile::tempdir().unwrap();
            let program = dir.path().join("notify-send");

            let result = notifier(program)
                .show(&NotificationRequest::new("Hi"))
                .await;
            assert!(matches!(
                result,
                Err(NotificationError::NotifySendNotFound)
            ));
        }
    }
}
