//! WASM bindings for wasm-turtle
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod adapter;
pub mod parser;

pub use adapter::AdapterNamespace;
pub use parser::ParserNamespace;

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serialize into a plain JS object (maps become objects, not `Map`s)
pub(crate) fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
