//! WASM bindings for signed transaction parsing
//!
//! ParserNamespace turns keeper signing results back into signer transactions

use crate::parser::parse_signed_transaction;
use crate::wasm::to_js_value;
use wasm_bindgen::prelude::*;

/// Namespace for parsing operations
#[wasm_bindgen]
pub struct ParserNamespace;

#[wasm_bindgen]
impl ParserNamespace {
    /// Parse a signed transaction returned by the keeper
    ///
    /// # Arguments
    /// * `signed` - Signed transaction as canonical JSON text
    ///
    /// # Returns
    /// Signer transaction with `id` and `proofs`
    #[wasm_bindgen(js_name = signerTxFactory)]
    pub fn signer_tx_factory(signed: &str) -> Result<JsValue, JsValue> {
        let parsed = parse_signed_transaction(signed)?;
        to_js_value(&parsed)
    }
}
