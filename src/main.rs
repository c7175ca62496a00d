//! Deskpop CLI entry point

use std::process::ExitCode;

use clap::Parser;

use deskpop::cli::{
    app::{load_merged_config, run_notify, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    NotifyOptions,
};
use deskpop::domain::config::AppConfig;
use deskpop::domain::notification::NotificationRequest;
use deskpop::infrastructure::{NotificationBackend, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let Some(summary) = cli.summary else {
        presenter.error("Missing notification summary (usage: deskpop <SUMMARY> [BODY])");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        app_name: cli.app_name,
        icon: cli.icon,
        backend: cli.backend,
        retries: cli.retries,
        retry_interval: cli.retry_interval,
    };

    // Merge config (CLI takes precedence over file)
    let config = load_merged_config(cli_config).await;

    let backend = match config.backend.as_deref() {
        Some(name) => match name.parse::<NotificationBackend>() {
            Ok(backend) => backend,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => NotificationBackend::default(),
    };

    let mut request = NotificationRequest::new(summary);
    if let Some(body) = cli.body {
        request = request.with_body(body);
    }
    if let Some(icon) = config.icon.clone() {
        request = request.with_icon(icon);
    }

    let options = NotifyOptions {
        request,
        app_name: config.app_name_or_default().to_string(),
        backend,
        policy: config.retry_policy(),
        wait: !cli.no_wait,
    };

    run_notify(options).await
}
