pub const DRIVER_BIN: &str = "attack-shark-r1-driver";
pub const DRIVER_ENV: &str = "ATTACK_SHARK_R1_DRIVER";
pub const CONFIG_DIR: &str = "attack-shark";
pub const CONFIG_FILE: &str = "config.json";

pub const DPI_SLOT_COUNT: usize = 6;
pub const POLLING_RATES: [u32; 4] = [125, 250, 500, 1000];

pub const DEFAULT_ACTIVE_DPI: u8 = 1;
pub const DEFAULT_SLOT1_DPI: u32 = 800;
pub const DEFAULT_POLLING_RATE: u32 = 1000;
pub const DEFAULT_KEY_RESPONSE_TIME: u32 = 8;
pub const DEFAULT_SLEEP_TIME: f64 = 2.0;
pub const DEFAULT_DEEP_SLEEP_TIME: u32 = 5;

pub const KEY_RESPONSE_MIN: u32 = 4;
pub const KEY_RESPONSE_MAX: u32 = 50;
pub const SLEEP_TIME_MIN: f64 = 0.5;
pub const SLEEP_TIME_MAX: f64 = 30.0;
pub const DEEP_SLEEP_MIN: u32 = 1;
pub const DEEP_SLEEP_MAX: u32 = 60;
