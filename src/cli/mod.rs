pub mod output;

use clap::Parser;

use crate::config::{DEFAULT_COMMAND, DEFAULT_LIGHT_IPS};

#[derive(Parser)]
#[command(
    name = "keylightctl",
    version,
    about = "Elgato Key Light controller - toggle power and adjust brightness or color temperature"
)]
pub struct Cli {
    /// Comma-separated list of Elgato Key Light IPs
    #[arg(long = "light-ips", env = "KEYLIGHT_IPS", default_value = DEFAULT_LIGHT_IPS)]
    pub light_ips: String,

    /// Command to run. May be: toggle-power, decrease-brightness,
    /// increase-brightness, decrease-temperature, increase-temperature,
    /// set-min-brightness, set-max-brightness, set-min-temperature,
    /// set-max-temperature, set-brightness, set-temperature
    #[arg(long, env = "KEYLIGHT_COMMAND", default_value = DEFAULT_COMMAND)]
    pub command: String,

    /// Numeric value to use for 'set-brightness' and 'set-temperature'
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub value: String,

    /// Do not send a desktop notification
    #[arg(long)]
    pub no_notify: bool,

    /// Verbose output (show HTTP requests/responses)
    #[arg(short, long)]
    pub verbose: bool,
}
