//! Signed transaction parsing
//!
//! The keeper returns signed transactions as canonical JSON text. Decoding
//! is delegated to a [`SignedTxDecoder`]; its result and its errors are
//! returned unchanged.

use crate::error::WasmTurtleError;
use crate::signer::SignedTransaction;

/// Decoder for serialized signed transactions
pub trait SignedTxDecoder {
    fn decode(&self, raw: &str) -> Result<SignedTransaction, WasmTurtleError>;
}

/// Encoder producing the format a [`SignedTxDecoder`] reads
pub trait SignedTxEncoder {
    fn encode(&self, tx: &SignedTransaction) -> Result<String, WasmTurtleError>;
}

/// Canonical JSON codec
///
/// Long values are kept in the form they appear in the payload: numbers stay
/// numbers and strings stay strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTxCodec;

impl SignedTxDecoder for JsonTxCodec {
    fn decode(&self, raw: &str) -> Result<SignedTransaction, WasmTurtleError> {
        serde_json::from_str(raw).map_err(|e| WasmTurtleError::DecodeError(e.to_string()))
    }
}

impl SignedTxEncoder for JsonTxCodec {
    fn encode(&self, tx: &SignedTransaction) -> Result<String, WasmTurtleError> {
        serde_json::to_string(tx).map_err(|e| WasmTurtleError::DecodeError(e.to_string()))
    }
}

/// Parse a signed transaction with the canonical JSON codec
pub fn parse_signed_transaction(raw: &str) -> Result<SignedTransaction, WasmTurtleError> {
    parse_signed_transaction_with(&JsonTxCodec, raw)
}

/// Parse a signed transaction with the given decoder
pub fn parse_signed_transaction_with<D: SignedTxDecoder + ?Sized>(
    decoder: &D,
    raw: &str,
) -> Result<SignedTransaction, WasmTurtleError> {
    tracing::debug!(len = raw.len(), "decoding signed transaction");
    decoder.decode(raw)
}
