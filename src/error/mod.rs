mod app;
mod config;
mod measure;
mod sink;
mod source;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use measure::MeasureError;
pub use sink::SinkError;
pub use source::SourceError;
pub use validation::ValidationError;
