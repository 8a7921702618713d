use crate::config::{
    BRIGHTNESS_STEP, MAX_BRIGHTNESS, MAX_TEMPERATURE, MIN_BRIGHTNESS, MIN_TEMPERATURE,
    TEMPERATURE_STEP,
};
use crate::error::AppError;
use crate::models::command::Adjustment;
use crate::models::light_state::LightState;

/// Apply `adjustment` to the first light in `state` and return the message
/// describing the change.
///
/// Stepped commands clamp to the configured bounds. `SetBrightness` and
/// `SetTemperature` write the given value as-is, even outside those bounds.
pub fn apply(state: &mut LightState, adjustment: &Adjustment) -> Result<String, AppError> {
    let light = state
        .primary_mut()
        .ok_or_else(|| AppError::NoLights("empty \"lights\" array".into()))?;

    let message = match *adjustment {
        Adjustment::TogglePower => {
            if light.is_on() {
                light.on = 0;
                "Power turned off".to_string()
            } else {
                light.on = 1;
                "Power turned on".to_string()
            }
        }
        Adjustment::DecreaseBrightness => {
            light.brightness = light
                .brightness
                .saturating_sub(BRIGHTNESS_STEP)
                .max(MIN_BRIGHTNESS);
            format!("Decreased brightness to {}", light.brightness)
        }
        Adjustment::IncreaseBrightness => {
            light.brightness = light
                .brightness
                .saturating_add(BRIGHTNESS_STEP)
                .min(MAX_BRIGHTNESS);
            format!("Increased brightness to {}", light.brightness)
        }
        // The temperature scale is inverted: warmer is a higher number.
        Adjustment::IncreaseTemperature => {
            light.temperature = light
                .temperature
                .saturating_sub(TEMPERATURE_STEP)
                .max(MIN_TEMPERATURE);
            format!("Increased temperature to {}", light.temperature)
        }
        Adjustment::DecreaseTemperature => {
            light.temperature = light
                .temperature
                .saturating_add(TEMPERATURE_STEP)
                .min(MAX_TEMPERATURE);
            format!("Decreased temperature to {}", light.temperature)
        }
        Adjustment::SetMinBrightness => {
            light.brightness = MIN_BRIGHTNESS;
            format!("Set to minimum brightness: {}", MIN_BRIGHTNESS)
        }
        Adjustment::SetMaxBrightness => {
            light.brightness = MAX_BRIGHTNESS;
            format!("Set to maximum brightness: {}", MAX_BRIGHTNESS)
        }
        Adjustment::SetMinTemperature => {
            light.temperature = MIN_TEMPERATURE;
            format!("Set to minimum temperature: {}", MIN_TEMPERATURE)
        }
        Adjustment::SetMaxTemperature => {
            light.temperature = MAX_TEMPERATURE;
            format!("Set to maximum temperature: {}", MAX_TEMPERATURE)
        }
        Adjustment::SetBrightness(value) => {
            light.brightness = value;
            format!("Set brightness to {}", value)
        }
        Adjustment::SetTemperature(value) => {
            light.temperature = value;
            format!("Set temperature to {}", value)
        }
    };

    Ok(message)
}

/// Parse `command`/`value` and apply the result.
pub fn apply_command(
    state: &mut LightState,
    command: &str,
    value: &str,
) -> Result<String, AppError> {
    let adjustment = Adjustment::parse(command, value)?;
    apply(state, &adjustment)
}
