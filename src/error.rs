use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhiteholeError {
    #[error("domain error: {param} = {value} ({reason})")]
    Domain {
        param: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, WhiteholeError>;

impl WhiteholeError {
    pub fn domain(param: &'static str, value: f64, reason: &'static str) -> Self {
        WhiteholeError::Domain { param, value, reason }
    }

    /// Name of the offending parameter for domain errors.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            WhiteholeError::Domain { param, .. } => Some(param),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WhiteholeError::domain("r", 1.5, "inside event horizon");
        let msg = err.to_string();
        assert!(msg.contains("domain error"));
        assert!(msg.contains("r = 1.5"));
        assert!(msg.contains("inside event horizon"));
        assert_eq!(err.param(), Some("r"));

        let err = WhiteholeError::InvalidData("not ascending".to_string());
        assert!(err.to_string().contains("invalid data"));
        assert_eq!(err.param(), None);
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u64>>("[1, 2,").unwrap_err();
        let err: WhiteholeError = json_err.into();
        assert!(matches!(err, WhiteholeError::Json(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: WhiteholeError = io.into();
        assert!(err.to_string().contains("io error"));
    }
}
