use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SinksConfig {
    /// Log every live reading at debug level.
    pub log: Option<bool>,
    pub influx: Option<InfluxSinkConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InfluxSinkConfig {
    pub path: String,
}
