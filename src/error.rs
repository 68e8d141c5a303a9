use thiserror::Error;

/// Error types that can occur while building or driving a network
///
/// # Variants
///
/// - `ConfigurationError` - indicates the network topology or a hyperparameter is invalid; raised at build/setter time
/// - `InputValidationError` - indicates the input data provided does not match the shape the network expects
/// - `ProcessingError` - indicates an operation was called out of order (e.g. backpropagation before a forward pass)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Input validation error: {0}")]
    InputValidationError(String),
    #[error("Processing error: {0}")]
    ProcessingError(String),
}
