//! Shared types for TurtleNetwork transactions

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Ticker of the ledger's built-in asset
pub const NATIVE_ASSET_ID: &str = "TN";

/// Transaction type codes used by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransactionType {
    Genesis = 1,
    Payment = 2,
    Issue = 3,
    Transfer = 4,
    Reissue = 5,
    Burn = 6,
    Exchange = 7,
    Lease = 8,
    CancelLease = 9,
    Alias = 10,
    MassTransfer = 11,
    Data = 12,
    SetScript = 13,
    Sponsorship = 14,
    SetAssetScript = 15,
    InvokeScript = 16,
    UpdateAssetInfo = 17,
}

impl TransactionType {
    /// Get the numeric code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a type by its numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        let tx_type = match code {
            1 => TransactionType::Genesis,
            2 => TransactionType::Payment,
            3 => TransactionType::Issue,
            4 => TransactionType::Transfer,
            5 => TransactionType::Reissue,
            6 => TransactionType::Burn,
            7 => TransactionType::Exchange,
            8 => TransactionType::Lease,
            9 => TransactionType::CancelLease,
            10 => TransactionType::Alias,
            11 => TransactionType::MassTransfer,
            12 => TransactionType::Data,
            13 => TransactionType::SetScript,
            14 => TransactionType::Sponsorship,
            15 => TransactionType::SetAssetScript,
            16 => TransactionType::InvokeScript,
            17 => TransactionType::UpdateAssetInfo,
            _ => return None,
        };
        Some(tx_type)
    }

    pub fn name(self) -> &'static str {
        match self {
            TransactionType::Genesis => "genesis",
            TransactionType::Payment => "payment",
            TransactionType::Issue => "issue",
            TransactionType::Transfer => "transfer",
            TransactionType::Reissue => "reissue",
            TransactionType::Burn => "burn",
            TransactionType::Exchange => "exchange",
            TransactionType::Lease => "lease",
            TransactionType::CancelLease => "cancel-lease",
            TransactionType::Alias => "alias",
            TransactionType::MassTransfer => "mass-transfer",
            TransactionType::Data => "data",
            TransactionType::SetScript => "set-script",
            TransactionType::Sponsorship => "sponsorship",
            TransactionType::SetAssetScript => "set-asset-script",
            TransactionType::InvokeScript => "invoke-script",
            TransactionType::UpdateAssetInfo => "update-asset-info",
        }
    }

    /// Whether the keeper accepts signing requests of this type
    pub fn is_adaptable(self) -> bool {
        !matches!(
            self,
            TransactionType::Genesis
                | TransactionType::Payment
                | TransactionType::Exchange
                | TransactionType::UpdateAssetInfo
        )
    }

    /// Whether the fee may be paid in an asset other than the native one
    pub fn has_custom_fee_asset(self) -> bool {
        matches!(
            self,
            TransactionType::Transfer | TransactionType::InvokeScript
        )
    }
}

/// Long value as received from JS: a number, or a string when it exceeds
/// the safe integer range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(Number),
    Text(String),
}

impl Amount {
    /// Zero and the empty string count as "no value"
    pub fn is_empty(&self) -> bool {
        match self {
            Amount::Number(n) => n.as_f64() == Some(0.0),
            Amount::Text(s) => s.is_empty(),
        }
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount::Number(value.into())
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

/// Amount denominated in a specific asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyAmount {
    pub amount: Amount,
    pub asset_id: String,
}

/// Adapter options passed from the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterOptions {
    /// Asset used when a money value carries no asset id (default: "TN")
    #[serde(default = "default_native_asset_id")]
    pub native_asset_id: String,
}

fn default_native_asset_id() -> String {
    NATIVE_ASSET_ID.to_string()
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            native_asset_id: default_native_asset_id(),
        }
    }
}

impl AdapterOptions {
    /// Wrap an amount, falling back to the native asset when no asset id is given
    pub fn money(&self, amount: Amount, asset_id: Option<&str>) -> MoneyAmount {
        MoneyAmount {
            amount,
            asset_id: asset_id.unwrap_or(&self.native_asset_id).to_string(),
        }
    }
}

/// Single recipient of a mass transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferItem {
    pub recipient: String,
    pub amount: Amount,
}

/// Value type of a data entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Integer,
    Boolean,
    Binary,
    String,
}

/// Account data storage entry; a null value deletes the key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataEntry {
    pub key: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(default)]
    pub value: Value,
}

/// Argument type of a dApp function call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    Integer,
    Boolean,
    Binary,
    String,
    List,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallArg {
    #[serde(rename = "type")]
    pub arg_type: ArgType,
    pub value: Value,
}

/// dApp function call of an invoke-script transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeCall {
    pub function: String,
    #[serde(default)]
    pub args: Vec<CallArg>,
}

/// Payment attached to an invoke-script transaction (null asset id is the native asset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokePayment {
    #[serde(default)]
    pub asset_id: Option<String>,
    pub amount: Amount,
}
