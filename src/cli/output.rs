use crate::controller::LightUpdate;

pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

pub fn print_update(update: &LightUpdate) {
    print_json(&serde_json::to_value(update).unwrap_or_default());
}

/// Errors are written as one line so they stay greppable in logs.
pub fn print_error(err: &crate::error::AppError) {
    eprintln!("{}", serde_json::to_string(&err.to_json()).unwrap_or_default());
}
