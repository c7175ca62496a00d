//! Main app runner for one-shot notification dispatch

use std::process::ExitCode;

use crate::application::ports::config::ConfigStore;
use crate::application::NotificationDispatcher;
use crate::domain::config::AppConfig;
use crate::domain::notification::NotificationRequest;
use crate::domain::retry::RetryPolicy;
use crate::infrastructure::{
    create_notifier, ConsoleDiagnostics, NotificationBackend, TokioRetryScheduler, XdgConfigStore,
};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Options for a single notification run
pub struct NotifyOptions {
    /// The notification to show
    pub request: NotificationRequest,
    /// Application name reported to the service
    pub app_name: String,
    /// Which delivery adapter to use
    pub backend: NotificationBackend,
    /// Retry behavior when the service is unavailable
    pub policy: RetryPolicy,
    /// Whether to stay alive until the retry chain goes quiet
    pub wait: bool,
}

/// Load config file and merge with CLI-provided values (CLI wins)
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(_) => AppConfig::empty(),
    };
    file_config.merge(cli_config)
}

/// Dispatch one notification and drive its retry chain.
///
/// The dispatcher absorbs service-unavailable failures, so this runner
/// cannot tell "delivered" from "budget exhausted"; it exits 0 for both
/// and reserves nonzero exits for hard backend errors.
pub async fn run_notify(options: NotifyOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let notifier = create_notifier(options.backend, options.app_name);
    let (scheduler, mut due) = TokioRetryScheduler::new();
    let diagnostics = ConsoleDiagnostics::new();
    let dispatcher =
        NotificationDispatcher::with_policy(notifier, scheduler, diagnostics, options.policy);

    // A dispatch that consumed budget has scheduled a retry
    let mut pending = {
        let before = dispatcher.retries_remaining();
        if let Err(e) = dispatcher.dispatch(&options.request).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        dispatcher.retries_remaining() < before
    };

    if pending && !options.wait {
        presenter.warn("Exiting without waiting; pending retries are abandoned");
        return ExitCode::from(EXIT_SUCCESS);
    }

    if pending {
        presenter.start_spinner("Waiting for the notification service...");
    }

    while pending {
        let Some(task) = due.next_due().await else {
            break;
        };
        let before = dispatcher.retries_remaining();
        if let Err(e) = dispatcher.dispatch(&task).await {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        pending = dispatcher.retries_remaining() < before;
        if pending {
            presenter.update_spinner(&format!(
                "Waiting for the notification service... ({} retries left)",
                dispatcher.retries_remaining()
            ));
        }
    }

    presenter.stop_spinner();
    ExitCode::from(EXIT_SUCCESS)
}
