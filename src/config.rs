/// Port every Key Light serves its control API on.
pub const CONTROL_PORT: u16 = 9123;

pub const DEFAULT_LIGHT_IPS: &str = "192.168.0.181,192.168.0.182";
pub const DEFAULT_COMMAND: &str = "toggle-power";

pub const MIN_BRIGHTNESS: i64 = 3;
pub const MAX_BRIGHTNESS: i64 = 100;
pub const BRIGHTNESS_STEP: i64 = 5;

// Lower values are cooler light.
pub const MIN_TEMPERATURE: i64 = 143;
pub const MAX_TEMPERATURE: i64 = 344;
pub const TEMPERATURE_STEP: i64 = 5;

pub const NOTIFICATION_TITLE: &str = "Elgato Key Light Controller";
/// Replacement id handed to `notify-send -r` so successive notifications
/// replace each other instead of stacking.
pub const NOTIFICATION_REPLACE_ID: &str = "316470";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub verbose: bool,
    pub notify: bool,
}
