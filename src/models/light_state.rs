use serde::{Deserialize, Serialize};

/// Body of `GET`/`PUT /elgato/lights`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightState {
    pub number_of_lights: i64,
    pub lights: Vec<Light>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    /// 1 when powered, 0 otherwise.
    pub on: i64,
    pub brightness: i64,
    pub temperature: i64,
}

impl LightState {
    pub fn single(light: Light) -> Self {
        Self {
            number_of_lights: 1,
            lights: vec![light],
        }
    }

    /// The only light this tool reads or changes.
    pub fn primary(&self) -> Option<&Light> {
        self.lights.first()
    }

    pub fn primary_mut(&mut self) -> Option<&mut Light> {
        self.lights.first_mut()
    }
}

impl Light {
    pub fn is_on(&self) -> bool {
        self.on == 1
    }
}
