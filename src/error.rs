use std::fs::File;
use std::io::BufReader;

/// Error types that can occur during network operations
///
/// # Variants
///
/// - `ConfigurationError` - Indicates the network cannot be built as described (fewer than two layers, an empty layer, invalid activation parameters or an invalid learning coefficient)
/// - `DimensionMismatchError` - Indicates a vector or matrix does not have the shape an operation expects; the message names the operand and both sizes
/// - `RangeError` - Indicates a transition index that does not exist in the weight store
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    ConfigurationError(String),
    DimensionMismatchError(String),
    RangeError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            ModelError::DimensionMismatchError(msg) => {
                write!(f, "Dimension mismatch error: {}", msg)
            }
            ModelError::RangeError(msg) => write!(f, "Range error: {}", msg),
        }
    }
}

/// Implements the standard error trait for ModelError
impl std::error::Error for ModelError {}

/// Input/Output error types that can occur while saving or loading network weights
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations (reading, writing, file access)
/// - `JsonError` - Wraps JSON serialization/deserialization errors
/// - `WeightError` - The file was read but its contents do not fit the network (topology or shape mismatch)
#[derive(Debug)]
pub enum IoError {
    StdIoError(std::io::Error),
    JsonError(serde_json::Error),
    WeightError(ModelError),
}

impl IoError {
    pub fn load_in_buf_reader(path: &str) -> Result<BufReader<File>, IoError> {
        let file = File::open(path).map_err(IoError::StdIoError)?;
        Ok(BufReader::new(file))
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIoError(e) => write!(f, "IO error: {}", e),
            IoError::JsonError(e) => write!(f, "JSON error: {}", e),
            IoError::WeightError(e) => write!(f, "Weight error: {}", e),
        }
    }
}

impl std::error::Error for IoError {}

impl From<ModelError> for IoError {
    fn from(e: ModelError) -> Self {
        IoError::WeightError(e)
    }
}
