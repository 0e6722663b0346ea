//! Signer-side transaction schema
//!
//! These are the transaction objects produced by the signer library. Every
//! kind carries the common [`SignerTxBase`] fields; the numeric `type`
//! discriminator selects the kind and is not stored on the structs
//! themselves.

use crate::error::WasmTurtleError;
use crate::types::{Amount, DataEntry, InvokeCall, InvokePayment, TransactionType, TransferItem};
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Fields shared by every signer transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerTxBase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u8>,
    /// Fields this schema does not model, such as `sender`, kept as given
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerIssueTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: Amount,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reissuable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerTransferTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    pub recipient: String,
    pub amount: Amount,
    /// None transfers the native asset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerReissueTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    pub asset_id: String,
    pub quantity: Amount,
    pub reissuable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerBurnTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    pub asset_id: String,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerLeaseTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    pub recipient: String,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerCancelLeaseTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    pub lease_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerAliasTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerMassTransferTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    pub transfers: Vec<TransferItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerDataTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    pub data: Vec<DataEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerSetScriptTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    /// None removes the account script
    #[serde(default)]
    pub script: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerSponsorshipTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    pub asset_id: String,
    /// None cancels the sponsorship
    #[serde(default)]
    pub min_sponsored_asset_fee: Option<Amount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerSetAssetScriptTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    pub asset_id: String,
    pub script: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerInvokeTx {
    #[serde(flatten)]
    pub base: SignerTxBase,
    pub d_app: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Vec<InvokePayment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<InvokeCall>,
}

/// Any signer transaction the keeper can sign, keyed by its numeric `type`
#[derive(Debug, Clone, PartialEq)]
pub enum SignerTx {
    Issue(SignerIssueTx),
    Transfer(SignerTransferTx),
    Reissue(SignerReissueTx),
    Burn(SignerBurnTx),
    Lease(SignerLeaseTx),
    CancelLease(SignerCancelLeaseTx),
    Alias(SignerAliasTx),
    MassTransfer(SignerMassTransferTx),
    Data(SignerDataTx),
    SetScript(SignerSetScriptTx),
    Sponsorship(SignerSponsorshipTx),
    SetAssetScript(SignerSetAssetScriptTx),
    InvokeScript(SignerInvokeTx),
}

impl SignerTx {
    pub fn tx_type(&self) -> TransactionType {
        match self {
            SignerTx::Issue(_) => TransactionType::Issue,
            SignerTx::Transfer(_) => TransactionType::Transfer,
            SignerTx::Reissue(_) => TransactionType::Reissue,
            SignerTx::Burn(_) => TransactionType::Burn,
            SignerTx::Lease(_) => TransactionType::Lease,
            SignerTx::CancelLease(_) => TransactionType::CancelLease,
            SignerTx::Alias(_) => TransactionType::Alias,
            SignerTx::MassTransfer(_) => TransactionType::MassTransfer,
            SignerTx::Data(_) => TransactionType::Data,
            SignerTx::SetScript(_) => TransactionType::SetScript,
            SignerTx::Sponsorship(_) => TransactionType::Sponsorship,
            SignerTx::SetAssetScript(_) => TransactionType::SetAssetScript,
            SignerTx::InvokeScript(_) => TransactionType::InvokeScript,
        }
    }

    pub fn base(&self) -> &SignerTxBase {
        match self {
            SignerTx::Issue(tx) => &tx.base,
            SignerTx::Transfer(tx) => &tx.base,
            SignerTx::Reissue(tx) => &tx.base,
            SignerTx::Burn(tx) => &tx.base,
            SignerTx::Lease(tx) => &tx.base,
            SignerTx::CancelLease(tx) => &tx.base,
            SignerTx::Alias(tx) => &tx.base,
            SignerTx::MassTransfer(tx) => &tx.base,
            SignerTx::Data(tx) => &tx.base,
            SignerTx::SetScript(tx) => &tx.base,
            SignerTx::Sponsorship(tx) => &tx.base,
            SignerTx::SetAssetScript(tx) => &tx.base,
            SignerTx::InvokeScript(tx) => &tx.base,
        }
    }

    /// Read the `type` discriminator of an untyped transaction object
    ///
    /// Fails with `UnsupportedTransactionType` unless the discriminator is
    /// one of the kinds the keeper can sign.
    pub fn type_of(value: &Value) -> Result<TransactionType, WasmTurtleError> {
        let raw = value.get("type").unwrap_or(&Value::Null);
        // JS numbers may arrive as floats
        let code = raw
            .as_u64()
            .or_else(|| raw.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64));
        match code.and_then(TransactionType::from_code) {
            Some(tx_type) if tx_type.is_adaptable() => Ok(tx_type),
            _ => {
                tracing::debug!(discriminator = %raw, "rejecting unsupported transaction type");
                Err(WasmTurtleError::UnsupportedTransactionType(raw.to_string()))
            }
        }
    }

    /// Build a typed transaction from an untyped JSON object
    pub fn from_value(mut value: Value) -> Result<Self, WasmTurtleError> {
        let tx_type = Self::type_of(&value)?;
        // The discriminator lives on the enum, not in the unmodelled fields
        if let Value::Object(map) = &mut value {
            map.remove("type");
        }
        let tx = match tx_type {
            TransactionType::Issue => SignerTx::Issue(serde_json::from_value(value)?),
            TransactionType::Transfer => SignerTx::Transfer(serde_json::from_value(value)?),
            TransactionType::Reissue => SignerTx::Reissue(serde_json::from_value(value)?),
            TransactionType::Burn => SignerTx::Burn(serde_json::from_value(value)?),
            TransactionType::Lease => SignerTx::Lease(serde_json::from_value(value)?),
            TransactionType::CancelLease => SignerTx::CancelLease(serde_json::from_value(value)?),
            TransactionType::Alias => SignerTx::Alias(serde_json::from_value(value)?),
            TransactionType::MassTransfer => {
                SignerTx::MassTransfer(serde_json::from_value(value)?)
            }
            TransactionType::Data => SignerTx::Data(serde_json::from_value(value)?),
            TransactionType::SetScript => SignerTx::SetScript(serde_json::from_value(value)?),
            TransactionType::Sponsorship => SignerTx::Sponsorship(serde_json::from_value(value)?),
            TransactionType::SetAssetScript => {
                SignerTx::SetAssetScript(serde_json::from_value(value)?)
            }
            TransactionType::InvokeScript => {
                SignerTx::InvokeScript(serde_json::from_value(value)?)
            }
            other => {
                return Err(WasmTurtleError::UnsupportedTransactionType(
                    other.code().to_string(),
                ))
            }
        };
        Ok(tx)
    }

    /// Convert to an untyped JSON object including the `type` discriminator
    pub fn to_value(&self) -> Result<Value, WasmTurtleError> {
        let mut value = match self {
            SignerTx::Issue(tx) => serde_json::to_value(tx)?,
            SignerTx::Transfer(tx) => serde_json::to_value(tx)?,
            SignerTx::Reissue(tx) => serde_json::to_value(tx)?,
            SignerTx::Burn(tx) => serde_json::to_value(tx)?,
            SignerTx::Lease(tx) => serde_json::to_value(tx)?,
            SignerTx::CancelLease(tx) => serde_json::to_value(tx)?,
            SignerTx::Alias(tx) => serde_json::to_value(tx)?,
            SignerTx::MassTransfer(tx) => serde_json::to_value(tx)?,
            SignerTx::Data(tx) => serde_json::to_value(tx)?,
            SignerTx::SetScript(tx) => serde_json::to_value(tx)?,
            SignerTx::Sponsorship(tx) => serde_json::to_value(tx)?,
            SignerTx::SetAssetScript(tx) => serde_json::to_value(tx)?,
            SignerTx::InvokeScript(tx) => serde_json::to_value(tx)?,
        };
        if let Value::Object(map) = &mut value {
            map.insert("type".to_string(), self.tx_type().code().into());
        }
        Ok(value)
    }
}

impl Serialize for SignerTx {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SignerTx {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        SignerTx::from_value(value).map_err(de::Error::custom)
    }
}

/// Signer transaction together with its id and proofs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    pub id: String,
    #[serde(default)]
    pub proofs: Vec<String>,
    #[serde(flatten)]
    pub tx: SignerTx,
}
