use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to open Influx sink '{path}': {source}")]
    OpenInflux {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write Influx sink: {source}")]
    WriteInflux {
        #[source]
        source: std::io::Error,
    },
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
