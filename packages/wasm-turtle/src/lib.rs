//! wasm-turtle: WASM module adapting TurtleNetwork signer transactions to TurtleShell
//!
//! This crate provides:
//! - Conversion of signer transactions into keeper (TurtleShell) signing requests
//! - Parsing of signed transactions returned by the keeper
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`
//!
//! # Usage from Rust
//!
//! ```rust
//! use wasm_turtle::{keeper_tx_factory, Amount, SignerAliasTx, SignerTxBase};
//!
//! let tx = SignerAliasTx {
//!     base: SignerTxBase { fee: Some(Amount::from(100000)), ..Default::default() },
//!     alias: "turtle".to_string(),
//! };
//! let keeper = keeper_tx_factory(tx);
//! assert_eq!(keeper.tx_type, 10);
//! assert_eq!(keeper.data.base.fee.unwrap().asset_id, "TN");
//! ```

pub mod adapter;
pub mod error;
pub mod keeper;
pub mod parser;
pub mod signer;
pub mod types;
pub mod wasm;

// Re-export main types for convenience
pub use adapter::{keeper_tx_factory, keeper_tx_factory_with, keeper_tx_from_value, KeeperAdapter};
pub use error::WasmTurtleError;
pub use keeper::{KeeperTx, SignTransactionData};
pub use parser::{
    parse_signed_transaction, parse_signed_transaction_with, JsonTxCodec, SignedTxDecoder,
    SignedTxEncoder,
};
pub use signer::{
    SignedTransaction, SignerAliasTx, SignerBurnTx, SignerCancelLeaseTx, SignerDataTx,
    SignerInvokeTx, SignerIssueTx, SignerLeaseTx, SignerMassTransferTx, SignerReissueTx,
    SignerSetAssetScriptTx, SignerSetScriptTx, SignerSponsorshipTx, SignerTransferTx, SignerTx,
    SignerTxBase,
};
pub use types::{AdapterOptions, Amount, MoneyAmount, TransactionType, NATIVE_ASSET_ID};

// Re-export WASM types
pub use wasm::{AdapterNamespace, ParserNamespace};
