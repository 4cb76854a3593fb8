// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by command-line parsing, configuration I/O, trace replay
/// and the frame driver.
///
/// The gesture engine itself has no failure modes: malformed touch frames
/// and unknown photo requests are treated as no-ops.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Trace(String),
    Driver(String),
    Cli(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Trace(e) => write!(f, "Trace Error: {}", e),
            Error::Driver(e) => write!(f, "Driver Error: {}", e),
            Error::Cli(e) => write!(f, "Argument Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_variant() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.expect_err("invalid toml must fail").into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn driver_error_formats_properly() {
        let err = Error::Driver("stopped".into());
        assert_eq!(format!("{}", err), "Driver Error: stopped");
    }

    #[test]
    fn trace_error_formats_properly() {
        let err = Error::Trace("unknown step".into());
        assert_eq!(format!("{}", err), "Trace Error: unknown step");
    }

    #[test]
    fn cli_error_formats_properly() {
        let err = Error::Cli("missing trace file argument".into());
        assert_eq!(format!("{}", err), "Argument Error: missing trace file argument");
    }
}
