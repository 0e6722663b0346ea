//! WASM bindings for the signer to keeper adapter
//!
//! AdapterNamespace turns signer transactions into TurtleShell signing requests

use crate::adapter::keeper_tx_from_value;
use crate::error::WasmTurtleError;
use crate::signer::SignerTx;
use crate::types::AdapterOptions;
use crate::wasm::to_js_value;
use wasm_bindgen::prelude::*;

/// Namespace for adapter operations
#[wasm_bindgen]
pub struct AdapterNamespace;

#[wasm_bindgen]
impl AdapterNamespace {
    /// Convert a signer transaction into a keeper signing request
    ///
    /// # Arguments
    /// * `tx` - Signer transaction (JS object with numeric `type` field)
    /// * `options` - Optional adapter options
    ///
    /// # Returns
    /// `{ type, data }` request for `TurtleShell.signTransaction`
    ///
    /// # Example
    /// ```json
    /// { "type": 4, "recipient": "3JmS7yHmnv9qzbnZhFPz4T5nUAVzQknu6dH", "amount": 100000000, "fee": 2000000 }
    /// ```
    /// becomes
    /// ```json
    /// {
    ///   "type": 4,
    ///   "data": {
    ///     "amount": { "amount": 100000000, "assetId": "TN" },
    ///     "recipient": "3JmS7yHmnv9qzbnZhFPz4T5nUAVzQknu6dH",
    ///     "fee": { "amount": 2000000, "assetId": "TN" }
    ///   }
    /// }
    /// ```
    #[wasm_bindgen(js_name = keeperTxFactory)]
    pub fn keeper_tx_factory(tx: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
        let tx: serde_json::Value = serde_wasm_bindgen::from_value(tx)
            .map_err(|e| WasmTurtleError::InvalidTransaction(e.to_string()))?;
        let options = parse_options(options)?;

        let keeper = keeper_tx_from_value(tx, &options)?;
        to_js_value(&keeper)
    }

    /// Get the keeper request type code of a signer transaction
    ///
    /// Throws for transaction types the keeper cannot sign
    #[wasm_bindgen(js_name = getTransactionType)]
    pub fn get_transaction_type(tx: JsValue) -> Result<u8, JsValue> {
        let tx: serde_json::Value = serde_wasm_bindgen::from_value(tx)
            .map_err(|e| WasmTurtleError::InvalidTransaction(e.to_string()))?;
        Ok(SignerTx::type_of(&tx)?.code())
    }
}

fn parse_options(options: JsValue) -> Result<AdapterOptions, WasmTurtleError> {
    if options.is_undefined() || options.is_null() {
        return Ok(AdapterOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| WasmTurtleError::InvalidOptions(e.to_string()))
}
