use serde::Serialize;

use crate::adjust;
use crate::api::address::DeviceAddress;
use crate::api::client::LightTransport;
use crate::config::NOTIFICATION_TITLE;
use crate::error::AppError;
use crate::models::command::Adjustment;
use crate::notify::Notifier;

/// Outcome of adjusting one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightUpdate {
    pub device: String,
    pub message: String,
    pub on: i64,
    pub brightness: i64,
    pub temperature: i64,
}

/// Fetch, adjust, push and announce the state of a single device.
pub async fn update_light<T, N>(
    transport: &T,
    notifier: &N,
    address: &DeviceAddress,
    adjustment: &Adjustment,
) -> Result<LightUpdate, AppError>
where
    T: LightTransport,
    N: Notifier,
{
    let mut state = transport.fetch_state(address).await?;
    let message = adjust::apply(&mut state, adjustment)?;
    transport.push_state(address, &state).await?;

    notifier.notify(NOTIFICATION_TITLE, &message).await?;

    let light = state
        .primary()
        .ok_or_else(|| AppError::NoLights(address.to_string()))?;

    Ok(LightUpdate {
        device: address.to_string(),
        message,
        on: light.on,
        brightness: light.brightness,
        temperature: light.temperature,
    })
}

/// Apply `adjustment` to every device in order. Stops at the first failure;
/// devices already updated stay updated and later ones are never contacted.
pub async fn update_lights<T, N, F>(
    transport: &T,
    notifier: &N,
    addresses: &[DeviceAddress],
    adjustment: &Adjustment,
    mut on_update: F,
) -> Result<Vec<LightUpdate>, AppError>
where
    T: LightTransport,
    N: Notifier,
    F: FnMut(&LightUpdate),
{
    let mut updates = Vec::with_capacity(addresses.len());

    for address in addresses {
        let update = update_light(transport, notifier, address, adjustment).await?;
        on_update(&update);
        updates.push(update);
    }

    Ok(updates)
}
