use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ValidationError;
use crate::sinks::config::SinksConfig;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub interval: Option<DurationValue>,
    pub duration: Option<DurationValue>,
    pub params: Option<BTreeMap<String, String>>,
    pub proc_root: Option<String>,
    pub loopback_devices: Option<Vec<String>>,
    pub cpu_excluded_modes: Option<Vec<String>>,
    pub export_json: Option<String>,
    pub chart: Option<ChartConfig>,
    pub sinks: Option<SinksConfig>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ChartConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    super::parse::ensure_schedulable(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => super::parse_duration_value(text),
        }
    }
}
