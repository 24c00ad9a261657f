use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid param '{value}'. Expected 'key=value'.")]
    InvalidParamFormat { value: String },
    #[error("Invalid param '{value}'. Key must not be empty.")]
    ParamKeyEmpty { value: String },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Value must be <= {max}.")]
    ValueTooLarge { max: u64 },
    #[error("Chart {field} must be >= {min}.")]
    ChartDimensionTooSmall { field: &'static str, min: usize },
    #[error("Chart {field} must be <= {max}.")]
    ChartDimensionTooLarge { field: &'static str, max: usize },
    #[error("Workload '{program}' exited with {status}.")]
    WorkloadFailed { program: String, status: String },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
