use thiserror::Error;

#[derive(Error, Debug)]
pub enum AllocationError {
    #[error("Not logged in. Run 'allocate auth login' to authenticate.")]
    NotLoggedIn,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AllocationError {
    /// The message a view should render inline for this failure.
    pub fn inline_message(&self) -> String {
        match self {
            AllocationError::Validation { message, .. } => message.clone(),
            AllocationError::NotFound(message) => message.clone(),
            AllocationError::Api(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type AllocationResult<T> = Result<T, AllocationError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AllocationResult<T>;
    fn with_context<F>(self, f: F) -> AllocationResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> AllocationResult<T> {
        self.map_err(|e| AllocationError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AllocationResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AllocationError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> AllocationResult<T> {
        self.ok_or_else(|| AllocationError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> AllocationResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| AllocationError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! allocation_error {
    ($error_type:ident, $msg:expr) => {
        AllocationError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        AllocationError::$error_type(format!($fmt, $($arg)*))
    };
}
