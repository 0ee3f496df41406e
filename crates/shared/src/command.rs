#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("unknown {field} value: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("duplicate meal id: {0}")]
    DuplicateMeal(String),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Rejected(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Rejected(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Rejected(format!($fmt, $($arg)*)))
    };
}
