//! Error types for wasm-turtle

use core::fmt;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-turtle operations
#[derive(Debug, Clone, PartialEq)]
pub enum WasmTurtleError {
    /// Transaction type is not one of the kinds the keeper can sign
    UnsupportedTransactionType(String),
    /// Transaction object does not have the shape of its declared type
    InvalidTransaction(String),
    /// Signed transaction payload could not be decoded
    DecodeError(String),
    /// Invalid adapter options
    InvalidOptions(String),
}

impl std::error::Error for WasmTurtleError {}

impl fmt::Display for WasmTurtleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WasmTurtleError::UnsupportedTransactionType(s) => {
                write!(f, "Unsupported transaction type: {}", s)
            }
            WasmTurtleError::InvalidTransaction(s) => write!(f, "Invalid transaction: {}", s),
            WasmTurtleError::DecodeError(s) => write!(f, "Decode error: {}", s),
            WasmTurtleError::InvalidOptions(s) => write!(f, "Invalid options: {}", s),
        }
    }
}

impl From<serde_json::Error> for WasmTurtleError {
    fn from(err: serde_json::Error) -> Self {
        WasmTurtleError::InvalidTransaction(err.to_string())
    }
}

// REQUIRED: Converts to JS Error with stack trace
impl From<WasmTurtleError> for JsValue {
    fn from(err: WasmTurtleError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
