use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown demo: {name}")]
    UnknownDemo { name: String },

    #[error("Arithmetic overflow: {lhs} {operation} {rhs}")]
    ArithmeticOverflow {
        operation: &'static str,
        lhs: i32,
        rhs: i32,
    },
}

impl DemoError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read or write the console: {}", e),
            DemoError::ConfigError { message } => format!("Settings file problem: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DemoError::UnknownDemo { name } => format!("There is no demo called '{}'", name),
            DemoError::ArithmeticOverflow { operation, lhs, rhs } => {
                format!("{} {} {} does not fit in a 32-bit integer", lhs, operation, rhs)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that stdin/stdout are attached to a terminal or pipe",
            DemoError::ConfigError { .. } => "Make sure the file exists and is valid TOML",
            DemoError::InvalidConfigValueError { .. } => {
                "Fix the value in the settings file or override it on the command line"
            }
            DemoError::UnknownDemo { .. } => "Run with --list to see the available demos",
            DemoError::ArithmeticOverflow { .. } => "Use smaller operands in [arithmetic]",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. } => 1,
            DemoError::UnknownDemo { .. } => 2,
            DemoError::IoError(_) => 3,
            DemoError::ArithmeticOverflow { .. } => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let unknown = DemoError::UnknownDemo {
            name: "nope".to_string(),
        };
        assert_eq!(unknown.exit_code(), 2);
        assert!(unknown.user_friendly_message().contains("nope"));

        let io = DemoError::from(std::io::Error::other("closed"));
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_overflow_display() {
        let e = DemoError::ArithmeticOverflow {
            operation: "+",
            lhs: i32::MAX,
            rhs: 1,
        };
        assert_eq!(e.to_string(), format!("Arithmetic overflow: {} + 1", i32::MAX));
        assert_eq!(e.exit_code(), 4);

        let config = DemoError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
    }
}
