use std::fmt;

// === StorageError ===

/// Errors raised by a key-value store backend.
#[derive(Debug)]
pub enum StorageError {
    /// No store is available in this environment.
    Unavailable,
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage unavailable"),
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === ActivityError ===

/// Errors related to recent-activity persistence.
#[derive(Debug)]
pub enum ActivityError {
    /// The stored activity list could not be parsed.
    ParseError(String),
    /// The activity list could not be serialized.
    SerializationError(String),
    /// The underlying store failed.
    Storage(StorageError),
}

impl fmt::Display for ActivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityError::ParseError(msg) => write!(f, "Activity parse error: {}", msg),
            ActivityError::SerializationError(msg) => {
                write!(f, "Activity serialization error: {}", msg)
            }
            ActivityError::Storage(err) => write!(f, "Activity storage error: {}", err),
        }
    }
}

impl std::error::Error for ActivityError {}

impl From<StorageError> for ActivityError {
    fn from(err: StorageError) -> Self {
        ActivityError::Storage(err)
    }
}

// === AuthError ===

/// Errors related to the demo login.
#[derive(Debug)]
pub enum AuthError {
    /// Username or password was empty.
    MissingCredentials,
    /// Username or password did not match the demo account.
    InvalidCredentials,
    /// Failed to persist or restore the signed-in user.
    SerializationError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCredentials => write!(f, "Username and password are required"),
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::SerializationError(msg) => {
                write!(f, "Auth serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for AuthError {}

// === ChatError ===

/// Errors related to the career chat.
#[derive(Debug)]
pub enum ChatError {
    /// The message was empty or whitespace only.
    EmptyMessage,
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::EmptyMessage => write!(f, "Chat message is empty"),
        }
    }
}

impl std::error::Error for ChatError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
