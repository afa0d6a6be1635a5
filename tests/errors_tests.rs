use minilinker::errors::{MinilinkerError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = MinilinkerError::validation("Please enter a URL");

        assert!(matches!(error, MinilinkerError::Validation(_)));
        assert!(error.is_validation());
        assert_eq!(error.code(), "E001");
        assert_eq!(error.to_string(), "Validation Error: Please enter a URL");
    }

    #[test]
    fn test_not_found_error() {
        let error = MinilinkerError::not_found("No link at position 3");

        assert!(matches!(error, MinilinkerError::NotFound(_)));
        assert!(!error.is_validation());
        assert!(error.to_string().contains("Resource Not Found"));
        assert!(error.to_string().contains("No link at position 3"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            MinilinkerError::validation(""),
            MinilinkerError::not_found(""),
            MinilinkerError::file_operation(""),
            MinilinkerError::serialization(""),
            MinilinkerError::config(""),
            MinilinkerError::clipboard(""),
            MinilinkerError::launch(""),
            MinilinkerError::terminal(""),
        ];
        let codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(
            codes,
            vec!["E001", "E002", "E003", "E004", "E005", "E006", "E007", "E008"]
        );
    }

    #[test]
    fn test_message_is_payload() {
        let error = MinilinkerError::clipboard("no display");
        assert_eq!(error.message(), "no display");
        assert_eq!(error.error_type(), "Clipboard Error");
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: MinilinkerError = io_error.into();
        assert!(matches!(error, MinilinkerError::FileOperation(_)));
        assert!(error.message().contains("denied"));
    }

    #[test]
    fn test_from_json_error() {
        let json_error = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error: MinilinkerError = json_error.into();
        assert!(matches!(error, MinilinkerError::Serialization(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/minilinker")?)
        }
        assert!(matches!(read_missing(), Err(MinilinkerError::FileOperation(_))));
    }

    #[test]
    fn test_is_std_error() {
        let error = MinilinkerError::launch("xdg-open missing");
        let boxed: Box<dyn Error> = Box::new(error);
        assert!(boxed.to_string().contains("Browser Launch Error"));
    }
}

#[cfg(test)]
mod error_format_tests {
    use super::*;

    #[test]
    fn test_format_simple() {
        let error = MinilinkerError::config("bad toml");
        assert_eq!(error.format_simple(), "Configuration Error: bad toml");
    }

    #[test]
    fn test_format_colored_contains_parts() {
        colored::control::set_override(false);
        let error = MinilinkerError::terminal("no tty");
        let output = error.format_colored();
        assert!(output.contains("[ERROR]"));
        assert!(output.contains("E008"));
        assert!(output.contains("Terminal Error"));
        assert!(output.contains("no tty"));
    }
}
