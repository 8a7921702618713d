pub mod adjust;
pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notify;

use api::address::DeviceAddress;
use api::client::KeyLightClient;
use cli::output::{print_error, print_update};
use config::RuntimeConfig;
use error::AppError;
use models::command::Adjustment;
use notify::{DesktopNotifier, NoopNotifier};

pub async fn run(cli_args: cli::Cli) -> i32 {
    let config = RuntimeConfig {
        verbose: cli_args.verbose,
        notify: !cli_args.no_notify,
    };

    let result = dispatch(&cli_args, &config).await;

    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

async fn dispatch(cli_args: &cli::Cli, config: &RuntimeConfig) -> Result<(), AppError> {
    // Everything the user typed is validated before the first request goes out.
    let adjustment = Adjustment::parse(&cli_args.command, &cli_args.value)?;
    if config.verbose && !adjustment.takes_value() && !cli_args.value.is_empty() {
        eprintln!("Ignoring --value for {}", adjustment);
    }
    let addresses = DeviceAddress::parse_list(&cli_args.light_ips)?;

    let client = KeyLightClient::new(config.verbose)?;

    if config.notify {
        controller::update_lights(
            &client,
            &DesktopNotifier::default(),
            &addresses,
            &adjustment,
            print_update,
        )
        .await?;
    } else {
        controller::update_lights(&client, &NoopNotifier, &addresses, &adjustment, print_update)
            .await?;
    }

    Ok(())
}
