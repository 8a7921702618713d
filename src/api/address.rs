use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::config::CONTROL_PORT;
use crate::error::AppError;

/// Host and port of one light's control API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAddress {
    host: String,
    port: u16,
}

impl DeviceAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self)
    }

    pub fn lights_url(&self) -> String {
        format!("{}/elgato/lights", self.base_url())
    }

    /// Split a comma-separated list, trimming whitespace around each entry.
    pub fn parse_list(list: &str) -> Result<Vec<Self>, AppError> {
        list.split(',').map(str::parse).collect()
    }
}

impl FromStr for DeviceAddress {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::InvalidInput(
                "Empty entry in light address list".into(),
            ));
        }

        // HTTP URLs cannot carry an IPv6 zone id.
        if s.contains('%') {
            return Err(AppError::InvalidInput(format!(
                "IPv6 zone ids are not supported in light address {:?}",
                s
            )));
        }

        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(Self::new(ip.to_string(), CONTROL_PORT));
        }
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(Self::new(addr.ip().to_string(), addr.port()));
        }

        match s.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() && !host.contains(':') => {
                let port = port.parse::<u16>().map_err(|_| {
                    AppError::InvalidInput(format!("Invalid port in light address {:?}", s))
                })?;
                Ok(Self::new(host, port))
            }
            Some(_) => Err(AppError::InvalidInput(format!(
                "Invalid light address {:?}",
                s
            ))),
            None => Ok(Self::new(s, CONTROL_PORT)),
        }
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
