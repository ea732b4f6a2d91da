use std::{fmt, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {}",
            self.filename
                .display(),
            self.problem,
            self.details
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Unreadable(String, String),
    Malformed(String),
    NotPositive(&'static str, f64),
    NotFinite(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Unreadable(filename, details) => {
                write!(f, "unable to read configuration {}: {}", filename, details)
            }
            ConfigError::Malformed(details) => write!(f, "invalid configuration: {}", details),
            ConfigError::NotPositive(field, value) => {
                write!(f, "{} must be a positive number, not {}", field, value)
            }
            ConfigError::NotFinite(field) => write!(f, "{} must be a finite number", field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingError {
    pub problem: String,
    pub details: String,
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}
