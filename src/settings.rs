use std::{collections::BTreeMap, fs, io, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::{common::*, error::ConfigError};

/// Everything the driver can be told about the mouse, plus the session-only
/// `reapply_config` switch.
///
/// DPI slots are numbered 1..=6. A slot is enabled exactly when its value is
/// positive; there is no separate flag.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceSettings {
    pub active_dpi: u8,
    dpi: [u32; DPI_SLOT_COUNT],
    pub polling_rate: u32,
    pub key_response_time: u32,
    pub angle_snap: bool,
    pub ripple_control: bool,
    pub sleep_time: f64,
    pub deep_sleep_time: u32,
    pub reapply_config: bool,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            active_dpi: DEFAULT_ACTIVE_DPI,
            dpi: std::array::from_fn(|i| default_dpi(i + 1)),
            polling_rate: DEFAULT_POLLING_RATE,
            key_response_time: DEFAULT_KEY_RESPONSE_TIME,
            angle_snap: false,
            ripple_control: false,
            sleep_time: DEFAULT_SLEEP_TIME,
            deep_sleep_time: DEFAULT_DEEP_SLEEP_TIME,
            reapply_config: false,
        }
    }
}

fn default_dpi(slot: usize) -> u32 {
    if slot == 1 { DEFAULT_SLOT1_DPI } else { 0 }
}

impl DeviceSettings {
    pub fn dpi(&self, slot: usize) -> Option<u32> {
        slot.checked_sub(1).and_then(|i| self.dpi.get(i)).copied()
    }

    /// Returns false when `slot` is not in 1..=6.
    pub fn set_dpi(&mut self, slot: usize, value: u32) -> bool {
        match slot.checked_sub(1).and_then(|i| self.dpi.get_mut(i)) {
            Some(v) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    pub fn disable_slot(&mut self, slot: usize) -> bool {
        self.set_dpi(slot, 0)
    }

    pub fn is_slot_enabled(&self, slot: usize) -> bool {
        self.dpi(slot).is_some_and(|v| v > 0)
    }

    /// `(slot, value)` pairs in ascending slot order.
    pub fn dpi_slots(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.dpi.iter().enumerate().map(|(i, v)| (i + 1, *v))
    }

    /// Stores the sleep time rounded to one decimal, the resolution of the slider.
    pub fn set_sleep_time(&mut self, value: f64) {
        self.sleep_time = (value * 10.0).round() / 10.0;
    }

    /// Fields outside the range the device accepts. Loading never rejects
    /// these, they are only reported.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !(1..=DPI_SLOT_COUNT as u8).contains(&self.active_dpi) {
            issues.push(format!("active DPI slot {} is not in 1..6", self.active_dpi));
        }

        if !POLLING_RATES.contains(&self.polling_rate) {
            issues.push(format!("polling rate {} Hz is not supported", self.polling_rate));
        }

        if !(KEY_RESPONSE_MIN..=KEY_RESPONSE_MAX).contains(&self.key_response_time)
            || self.key_response_time % 2 != 0
        {
            issues.push(format!(
                "key response time {} ms must be even and in {KEY_RESPONSE_MIN}..{KEY_RESPONSE_MAX}",
                self.key_response_time
            ));
        }

        if !(SLEEP_TIME_MIN..=SLEEP_TIME_MAX).contains(&self.sleep_time) {
            issues.push(format!("sleep time {} is not in {SLEEP_TIME_MIN}..{SLEEP_TIME_MAX}", self.sleep_time));
        }

        if !(DEEP_SLEEP_MIN..=DEEP_SLEEP_MAX).contains(&self.deep_sleep_time) {
            issues.push(format!(
                "deep sleep time {} is not in {DEEP_SLEEP_MIN}..{DEEP_SLEEP_MAX}",
                self.deep_sleep_time
            ));
        }

        issues
    }
}

/// On-disk shape. Field order is the key order written to the file.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct StoredSettings {
    active_dpi: u8,
    angle_snap: bool,
    deep_sleep_time: u32,
    key_response_time: u32,
    polling_rate: u32,
    ripple_control: bool,
    sleep_time: f64,
    dpi: BTreeMap<String, u32>,
}

impl Default for StoredSettings {
    fn default() -> Self {
        Self::from(&DeviceSettings::default())
    }
}

impl From<&DeviceSettings> for StoredSettings {
    fn from(s: &DeviceSettings) -> Self {
        Self {
            active_dpi: s.active_dpi,
            angle_snap: s.angle_snap,
            deep_sleep_time: s.deep_sleep_time,
            key_response_time: s.key_response_time,
            polling_rate: s.polling_rate,
            ripple_control: s.ripple_control,
            sleep_time: s.sleep_time,
            dpi: s.dpi_slots().map(|(slot, v)| (slot.to_string(), v)).collect(),
        }
    }
}

impl From<StoredSettings> for DeviceSettings {
    fn from(s: StoredSettings) -> Self {
        Self {
            active_dpi: s.active_dpi,
            dpi: std::array::from_fn(|i| {
                let slot = i + 1;
                s.dpi.get(&slot.to_string()).copied().unwrap_or_else(|| default_dpi(slot))
            }),
            polling_rate: s.polling_rate,
            key_response_time: s.key_response_time,
            angle_snap: s.angle_snap,
            ripple_control: s.ripple_control,
            sleep_time: s.sleep_time,
            deep_sleep_time: s.deep_sleep_time,
            reapply_config: false,
        }
    }
}

/// `~/.config/attack-shark/config.json` on Linux.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Reads a config file. Absent keys take their defaults; `reapply_config`
/// always comes back false.
pub fn load(path: &Path) -> Result<DeviceSettings, ConfigError> {
    let json = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io { path: path.to_path_buf(), source: e },
    })?;

    let stored: StoredSettings = serde_json::from_str(&json)
        .map_err(|e| ConfigError::Parse { path: path.to_path_buf(), source: e })?;

    Ok(stored.into())
}

/// Writes `settings` as pretty JSON, creating the parent directory first.
pub fn save(path: &Path, settings: &DeviceSettings) -> Result<(), ConfigError> {
    let io_err = |e: io::Error| ConfigError::Io { path: path.to_path_buf(), source: e };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let json = serde_json::to_string_pretty(&StoredSettings::from(settings))
        .map_err(|e| ConfigError::Io { path: path.to_path_buf(), source: e.into() })?;

    fs::write(path, json).map_err(io_err)
}

pub fn reset() -> DeviceSettings {
    DeviceSettings::default()
}
