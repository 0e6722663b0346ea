//! Keeper-side transaction schema
//!
//! Request shapes accepted by the TurtleShell `signTransaction` API. Each
//! request is an envelope `{ type, data }` where `data` depends on the type.

use crate::types::{
    Amount, DataEntry, InvokeCall, InvokePayment, MoneyAmount, TransactionType, TransferItem,
};
use serde::Serialize;

/// Fields shared by every keeper transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeeperTxBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<MoneyAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    pub name: String,
    pub description: String,
    pub quantity: Amount,
    pub precision: u8,
    pub reissuable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    pub amount: MoneyAmount,
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReissueTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    pub asset_id: String,
    pub quantity: Amount,
    pub reissuable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    pub asset_id: String,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    pub recipient: String,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseCancelTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    pub lease_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAliasTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MassTransferTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    /// The keeper computes the real total itself; only the asset matters here
    pub total_amount: MoneyAmount,
    pub transfers: Vec<TransferItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    pub data: Vec<DataEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetScriptTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    /// Null removes the account script
    pub script: Option<String>,
}

/// Sponsored fee rate; a null amount cancels the sponsorship
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredFee {
    pub amount: Option<Amount>,
    pub asset_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredFeeTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    pub min_sponsored_asset_fee: SponsoredFee,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAssetScriptTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    pub asset_id: String,
    pub script: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptInvocationTx {
    #[serde(flatten)]
    pub base: KeeperTxBase,
    pub d_app: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<InvokeCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Vec<InvokePayment>>,
}

/// Keeper signing request `{ type, data }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeeperTx<D> {
    #[serde(rename = "type")]
    pub tx_type: u8,
    pub data: D,
}

impl<D> KeeperTx<D> {
    pub fn new(tx_type: TransactionType, data: D) -> Self {
        KeeperTx {
            tx_type: tx_type.code(),
            data,
        }
    }
}

/// Keeper signing request of any supported type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SignTransactionData {
    Issue(KeeperTx<IssueTx>),
    Transfer(KeeperTx<TransferTx>),
    Reissue(KeeperTx<ReissueTx>),
    Burn(KeeperTx<BurnTx>),
    Lease(KeeperTx<LeaseTx>),
    LeaseCancel(KeeperTx<LeaseCancelTx>),
    CreateAlias(KeeperTx<CreateAliasTx>),
    MassTransfer(KeeperTx<MassTransferTx>),
    Data(KeeperTx<DataTx>),
    SetScript(KeeperTx<SetScriptTx>),
    SponsoredFee(KeeperTx<SponsoredFeeTx>),
    SetAssetScript(KeeperTx<SetAssetScriptTx>),
    ScriptInvocation(KeeperTx<ScriptInvocationTx>),
}

impl SignTransactionData {
    /// Numeric type code of the request
    pub fn tx_type(&self) -> u8 {
        match self {
            SignTransactionData::Issue(tx) => tx.tx_type,
            SignTransactionData::Transfer(tx) => tx.tx_type,
            SignTransactionData::Reissue(tx) => tx.tx_type,
            SignTransactionData::Burn(tx) => tx.tx_type,
            SignTransactionData::Lease(tx) => tx.tx_type,
            SignTransactionData::LeaseCancel(tx) => tx.tx_type,
            SignTransactionData::CreateAlias(tx) => tx.tx_type,
            SignTransactionData::MassTransfer(tx) => tx.tx_type,
            SignTransactionData::Data(tx) => tx.tx_type,
            SignTransactionData::SetScript(tx) => tx.tx_type,
            SignTransactionData::SponsoredFee(tx) => tx.tx_type,
            SignTransactionData::SetAssetScript(tx) => tx.tx_type,
            SignTransactionData::ScriptInvocation(tx) => tx.tx_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let tx = KeeperTx::new(
            TransactionType::Alias,
            CreateAliasTx {
                base: KeeperTxBase::default(),
                alias: "turtle".to_string(),
            },
        );
        assert_eq!(
            serde_json::to_value(&tx).unwrap(),
            json!({ "type": 10, "data": { "alias": "turtle" } })
        );
    }

    #[test]
    fn test_set_script_keeps_null_script() {
        let tx = SetScriptTx {
            base: KeeperTxBase::default(),
            script: None,
        };
        assert_eq!(
            serde_json::to_value(&tx).unwrap(),
            json!({ "script": null })
        );
    }
}
