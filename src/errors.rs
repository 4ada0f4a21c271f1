use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Storage(String),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Invalid stored data: {}", e)
            }
            AppError::Storage(msg) => {
                write!(f, "Storage failure: {}", msg)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_json_error_message() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = AppError::Json(bad_json);

        assert!(format!("{}", err).contains("Invalid stored data: "));
    }

    #[test]
    fn confirm_validation_error_message() {
        let err = AppError::Validation("2 fields need attention".to_string());

        assert_eq!(
            format!("{}", err),
            "Validation failed: 2 fields need attention"
        );
    }
}
