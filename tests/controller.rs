//! Orchestration tests with in-memory stand-ins for the device API and the
//! notification mechanism.

use std::collections::HashMap;
use std::sync::Mutex;

use keylightctl::api::address::DeviceAddress;
use keylightctl::api::client::LightTransport;
use keylightctl::controller::{update_light, update_lights, LightUpdate};
use keylightctl::error::AppError;
use keylightctl::models::command::Adjustment;
use keylightctl::models::light_state::{Light, LightState};
use keylightctl::notify::{NoopNotifier, Notifier};

#[derive(Default)]
struct FakeLights {
    states: Mutex<HashMap<String, LightState>>,
    failing_puts: Vec<String>,
    events: Mutex<Vec<String>>,
}

impl FakeLights {
    fn with(mut self, host: &str, light: Light) -> Self {
        self.states
            .get_mut()
            .unwrap()
            .insert(host.to_string(), LightState::single(light));
        self
    }

    fn failing_put(mut self, host: &str) -> Self {
        self.failing_puts.push(host.to_string());
        self
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn state(&self, host: &str) -> Light {
        self.states.lock().unwrap()[host].lights[0]
    }
}

impl LightTransport for FakeLights {
    async fn fetch_state(&self, address: &DeviceAddress) -> Result<LightState, AppError> {
        self.events
            .lock()
            .unwrap()
            .push(format!("GET {}", address.host()));
        self.states
            .lock()
            .unwrap()
            .get(address.host())
            .cloned()
            .ok_or_else(|| AppError::transport(address, "fetching light state: refused"))
    }

    async fn push_state(
        &self,
        address: &DeviceAddress,
        state: &LightState,
    ) -> Result<(), AppError> {
        self.events
            .lock()
            .unwrap()
            .push(format!("PUT {}", address.host()));
        if self.failing_puts.iter().any(|h| h == address.host()) {
            return Err(AppError::transport(address, "updating light state: 500"));
        }
        self.states
            .lock()
            .unwrap()
            .insert(address.host().to_string(), state.clone());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl Notifier for RecordingNotifier {
    async fn notify(&self, title: &str, message: &str) -> Result<(), AppError> {
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
        Ok(())
    }
}

struct BrokenNotifier;

impl Notifier for BrokenNotifier {
    async fn notify(&self, _title: &str, _message: &str) -> Result<(), AppError> {
        Err(AppError::Notifier("notify-send not found".into()))
    }
}

fn light(on: i64, brightness: i64, temperature: i64) -> Light {
    Light {
        on,
        brightness,
        temperature,
    }
}

#[tokio::test]
async fn processes_devices_one_after_another() {
    let lights = FakeLights::default()
        .with("10.0.0.1", light(0, 50, 200))
        .with("10.0.0.2", light(1, 10, 300));
    let addresses = DeviceAddress::parse_list("10.0.0.1, 10.0.0.2").unwrap();

    let mut seen = Vec::new();
    let updates = update_lights(
        &lights,
        &NoopNotifier,
        &addresses,
        &Adjustment::IncreaseBrightness,
        |u: &LightUpdate| seen.push(u.device.clone()),
    )
    .await
    .unwrap();

    assert_eq!(
        lights.events(),
        vec!["GET 10.0.0.1", "PUT 10.0.0.1", "GET 10.0.0.2", "PUT 10.0.0.2"]
    );
    assert_eq!(seen, vec!["10.0.0.1:9123", "10.0.0.2:9123"]);
    assert_eq!(updates[0].brightness, 55);
    assert_eq!(updates[1].brightness, 15);
    assert_eq!(lights.state("10.0.0.2"), light(1, 15, 300));
}

#[tokio::test]
async fn reports_new_state_and_message() {
    let lights = FakeLights::default().with("10.0.0.1", light(0, 50, 200));
    let notifier = RecordingNotifier::default();
    let address: DeviceAddress = "10.0.0.1".parse().unwrap();

    let update = update_light(&lights, &notifier, &address, &Adjustment::IncreaseBrightness)
        .await
        .unwrap();

    assert_eq!(
        update,
        LightUpdate {
            device: "10.0.0.1:9123".into(),
            message: "Increased brightness to 55".into(),
            on: 0,
            brightness: 55,
            temperature: 200,
        }
    );
    assert_eq!(
        *notifier.sent.lock().unwrap(),
        vec![(
            "Elgato Key Light Controller".to_string(),
            "Increased brightness to 55".to_string()
        )]
    );
}

#[tokio::test]
async fn set_brightness_is_pushed_unclamped() {
    let lights = FakeLights::default().with("10.0.0.1", light(1, 50, 200));
    let address: DeviceAddress = "10.0.0.1".parse().unwrap();

    let update = update_light(
        &lights,
        &NoopNotifier,
        &address,
        &Adjustment::SetBrightness(150),
    )
    .await
    .unwrap();

    assert_eq!(update.message, "Set brightness to 150");
    assert_eq!(lights.state("10.0.0.1").brightness, 150);
}

#[tokio::test]
async fn first_failure_aborts_remaining_devices() {
    let lights = FakeLights::default()
        .with("10.0.0.1", light(0, 50, 200))
        .with("10.0.0.2", light(0, 50, 200))
        .failing_put("10.0.0.1");
    let notifier = RecordingNotifier::default();
    let addresses = DeviceAddress::parse_list("10.0.0.1,10.0.0.2").unwrap();

    let err = update_lights(
        &lights,
        &notifier,
        &addresses,
        &Adjustment::TogglePower,
        |_: &LightUpdate| {},
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Transport { ref device, .. } if device == "10.0.0.1:9123"));
    assert_eq!(lights.events(), vec!["GET 10.0.0.1", "PUT 10.0.0.1"]);
    assert!(notifier.sent.lock().unwrap().is_empty());
    assert_eq!(lights.state("10.0.0.2"), light(0, 50, 200));
}

#[tokio::test]
async fn earlier_devices_stay_updated_after_later_failure() {
    let lights = FakeLights::default().with("10.0.0.1", light(0, 50, 200));
    let addresses = DeviceAddress::parse_list("10.0.0.1,10.0.0.9").unwrap();

    let err = update_lights(
        &lights,
        &NoopNotifier,
        &addresses,
        &Adjustment::TogglePower,
        |_: &LightUpdate| {},
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Transport { .. }));
    assert_eq!(lights.state("10.0.0.1").on, 1);
    assert_eq!(
        lights.events(),
        vec!["GET 10.0.0.1", "PUT 10.0.0.1", "GET 10.0.0.9"]
    );
}

#[tokio::test]
async fn notifier_failure_is_fatal() {
    let lights = FakeLights::default()
        .with("10.0.0.1", light(0, 50, 200))
        .with("10.0.0.2", light(0, 50, 200));
    let addresses = DeviceAddress::parse_list("10.0.0.1,10.0.0.2").unwrap();

    let err = update_lights(
        &lights,
        &BrokenNotifier,
        &addresses,
        &Adjustment::TogglePower,
        |_: &LightUpdate| {},
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Notifier(_)));
    // The state was already written when the notification failed.
    assert_eq!(lights.events(), vec!["GET 10.0.0.1", "PUT 10.0.0.1"]);
    assert_eq!(lights.state("10.0.0.1").on, 1);
}

#[tokio::test]
async fn empty_light_list_never_pushes() {
    let lights = FakeLights::default();
    lights.states.lock().unwrap().insert(
        "10.0.0.1".into(),
        LightState {
            number_of_lights: 0,
            lights: vec![],
        },
    );
    let address: DeviceAddress = "10.0.0.1".parse().unwrap();

    let err = update_light(&lights, &NoopNotifier, &address, &Adjustment::TogglePower)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NoLights(_)));
    assert_eq!(lights.events(), vec!["GET 10.0.0.1"]);
}
