use std::fmt;

use crate::error::AppError;

/// A `--command` token together with the payload it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    TogglePower,
    DecreaseBrightness,
    IncreaseBrightness,
    IncreaseTemperature,
    DecreaseTemperature,
    SetMinBrightness,
    SetMaxBrightness,
    SetMinTemperature,
    SetMaxTemperature,
    SetBrightness(i64),
    SetTemperature(i64),
}

impl Adjustment {
    /// Resolve `command` against the raw `--value` string. The value is only
    /// parsed for commands that take one and ignored otherwise.
    pub fn parse(command: &str, value: &str) -> Result<Self, AppError> {
        let adjustment = match command {
            "toggle-power" => Adjustment::TogglePower,
            "decrease-brightness" => Adjustment::DecreaseBrightness,
            "increase-brightness" => Adjustment::IncreaseBrightness,
            "increase-temperature" => Adjustment::IncreaseTemperature,
            "decrease-temperature" => Adjustment::DecreaseTemperature,
            "set-min-brightness" => Adjustment::SetMinBrightness,
            "set-max-brightness" => Adjustment::SetMaxBrightness,
            "set-min-temperature" => Adjustment::SetMinTemperature,
            "set-max-temperature" => Adjustment::SetMaxTemperature,
            "set-brightness" => Adjustment::SetBrightness(parse_value(value)?),
            "set-temperature" => Adjustment::SetTemperature(parse_value(value)?),
            _ => return Err(AppError::UnknownCommand(command.to_string())),
        };
        Ok(adjustment)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Adjustment::TogglePower => "toggle-power",
            Adjustment::DecreaseBrightness => "decrease-brightness",
            Adjustment::IncreaseBrightness => "increase-brightness",
            Adjustment::IncreaseTemperature => "increase-temperature",
            Adjustment::DecreaseTemperature => "decrease-temperature",
            Adjustment::SetMinBrightness => "set-min-brightness",
            Adjustment::SetMaxBrightness => "set-max-brightness",
            Adjustment::SetMinTemperature => "set-min-temperature",
            Adjustment::SetMaxTemperature => "set-max-temperature",
            Adjustment::SetBrightness(_) => "set-brightness",
            Adjustment::SetTemperature(_) => "set-temperature",
        }
    }

    /// Whether `--value` is read by this command.
    pub fn takes_value(&self) -> bool {
        matches!(
            self,
            Adjustment::SetBrightness(_) | Adjustment::SetTemperature(_)
        )
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_value(value: &str) -> Result<i64, AppError> {
    value.parse::<i64>().map_err(|e| AppError::ValueParse {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
