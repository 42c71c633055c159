//! Front-end Configuration
//!
//! Literal settings of the front end, gathered in one value.

use crate::i18n::{DetectorOptions, DEFAULT_LANGUAGE};

/// Path prefix all client-side navigation is scoped under
pub const BASE_PATH: &str = "/frontend";

/// Element id the application shell is mounted into
pub const ROOT_MOUNT_ID: &str = "root";

/// Element id the counter widget is mounted into
pub const COUNTER_MOUNT_ID: &str = "counter";

/// Front-end settings
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub base_path: &'static str,
    pub root_mount_id: &'static str,
    pub counter_mount_id: &'static str,
    pub fallback_language: &'static str,
    pub detection: DetectorOptions,
    /// Report navigation and paint timings to the log after mounting
    pub report_vitals: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: BASE_PATH,
            root_mount_id: ROOT_MOUNT_ID,
            counter_mount_id: COUNTER_MOUNT_ID,
            fallback_language: DEFAULT_LANGUAGE,
            detection: DetectorOptions::default(),
            report_vitals: true,
        }
    }
}
