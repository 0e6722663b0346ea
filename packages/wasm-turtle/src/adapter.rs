//! Signer to keeper transaction adapter
//!
//! Every signer transaction kind implements [`KeeperAdapter`] with the
//! keeper request shape it maps to, so adapting a concrete kind yields a
//! concrete `KeeperTx<..>`. [`SignerTx`] implements it too and yields the
//! type-erased [`SignTransactionData`].
//!
//! The fee is only included when the signer transaction has a non-empty
//! fee. Its asset is the native one except for transfer and invoke-script,
//! which are the only kinds the ledger lets pay fees in another asset.

use crate::error::WasmTurtleError;
use crate::keeper::{
    BurnTx, CreateAliasTx, DataTx, IssueTx, KeeperTx, KeeperTxBase, LeaseCancelTx, LeaseTx,
    MassTransferTx, ReissueTx, ScriptInvocationTx, SetAssetScriptTx, SetScriptTx,
    SignTransactionData, SponsoredFee, SponsoredFeeTx, TransferTx,
};
use crate::signer::{
    SignerAliasTx, SignerBurnTx, SignerCancelLeaseTx, SignerDataTx, SignerInvokeTx,
    SignerIssueTx, SignerLeaseTx, SignerMassTransferTx, SignerReissueTx, SignerSetAssetScriptTx,
    SignerSetScriptTx, SignerSponsorshipTx, SignerTransferTx, SignerTx, SignerTxBase,
};
use crate::types::{AdapterOptions, Amount, TransactionType};
use serde_json::Value;

/// Conversion of a signer transaction into a keeper signing request
pub trait KeeperAdapter {
    /// Keeper request produced for this transaction
    type Output;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output;
}

/// Adapt a signer transaction using the default options
pub fn keeper_tx_factory<T: KeeperAdapter>(tx: T) -> T::Output {
    tx.into_keeper_tx(&AdapterOptions::default())
}

/// Adapt a signer transaction
pub fn keeper_tx_factory_with<T: KeeperAdapter>(tx: T, options: &AdapterOptions) -> T::Output {
    tx.into_keeper_tx(options)
}

/// Adapt an untyped signer transaction object
///
/// Fails with `UnsupportedTransactionType` when `type` is not a kind the
/// keeper can sign.
pub fn keeper_tx_from_value(
    value: Value,
    options: &AdapterOptions,
) -> Result<SignTransactionData, WasmTurtleError> {
    let tx = SignerTx::from_value(value)?;
    Ok(tx.into_keeper_tx(options))
}

fn defaults(
    tx_type: TransactionType,
    base: &SignerTxBase,
    fee_asset_id: Option<&str>,
    options: &AdapterOptions,
) -> KeeperTxBase {
    let fee_asset_id = fee_asset_id.filter(|_| tx_type.has_custom_fee_asset());
    let fee = base
        .fee
        .as_ref()
        .filter(|fee| !fee.is_empty())
        .map(|fee| options.money(fee.clone(), fee_asset_id));
    KeeperTxBase { fee }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl KeeperAdapter for SignerIssueTx {
    type Output = KeeperTx<IssueTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = IssueTx {
            base: defaults(TransactionType::Issue, &self.base, None, options),
            name: self.name,
            description: self.description.unwrap_or_default(),
            quantity: self.quantity,
            precision: self.decimals,
            reissuable: self.reissuable.unwrap_or(false),
            script: non_empty(self.script),
        };
        KeeperTx::new(TransactionType::Issue, data)
    }
}

impl KeeperAdapter for SignerTransferTx {
    type Output = KeeperTx<TransferTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = TransferTx {
            base: defaults(
                TransactionType::Transfer,
                &self.base,
                self.fee_asset_id.as_deref(),
                options,
            ),
            amount: options.money(self.amount, self.asset_id.as_deref()),
            recipient: self.recipient,
            attachment: non_empty(self.attachment),
        };
        KeeperTx::new(TransactionType::Transfer, data)
    }
}

impl KeeperAdapter for SignerReissueTx {
    type Output = KeeperTx<ReissueTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = ReissueTx {
            base: defaults(TransactionType::Reissue, &self.base, None, options),
            asset_id: self.asset_id,
            quantity: self.quantity,
            reissuable: self.reissuable,
        };
        KeeperTx::new(TransactionType::Reissue, data)
    }
}

impl KeeperAdapter for SignerBurnTx {
    type Output = KeeperTx<BurnTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = BurnTx {
            base: defaults(TransactionType::Burn, &self.base, None, options),
            asset_id: self.asset_id,
            amount: self.amount,
        };
        KeeperTx::new(TransactionType::Burn, data)
    }
}

impl KeeperAdapter for SignerLeaseTx {
    type Output = KeeperTx<LeaseTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = LeaseTx {
            base: defaults(TransactionType::Lease, &self.base, None, options),
            recipient: self.recipient,
            amount: self.amount,
        };
        KeeperTx::new(TransactionType::Lease, data)
    }
}

impl KeeperAdapter for SignerCancelLeaseTx {
    type Output = KeeperTx<LeaseCancelTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = LeaseCancelTx {
            base: defaults(TransactionType::CancelLease, &self.base, None, options),
            lease_id: self.lease_id,
        };
        KeeperTx::new(TransactionType::CancelLease, data)
    }
}

impl KeeperAdapter for SignerAliasTx {
    type Output = KeeperTx<CreateAliasTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = CreateAliasTx {
            base: defaults(TransactionType::Alias, &self.base, None, options),
            alias: self.alias,
        };
        KeeperTx::new(TransactionType::Alias, data)
    }
}

impl KeeperAdapter for SignerMassTransferTx {
    type Output = KeeperTx<MassTransferTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = MassTransferTx {
            base: defaults(TransactionType::MassTransfer, &self.base, None, options),
            total_amount: options.money(Amount::from(0), self.asset_id.as_deref()),
            transfers: self.transfers,
            attachment: non_empty(self.attachment),
        };
        KeeperTx::new(TransactionType::MassTransfer, data)
    }
}

impl KeeperAdapter for SignerDataTx {
    type Output = KeeperTx<DataTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = DataTx {
            base: defaults(TransactionType::Data, &self.base, None, options),
            data: self.data,
        };
        KeeperTx::new(TransactionType::Data, data)
    }
}

impl KeeperAdapter for SignerSetScriptTx {
    type Output = KeeperTx<SetScriptTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = SetScriptTx {
            base: defaults(TransactionType::SetScript, &self.base, None, options),
            script: self.script,
        };
        KeeperTx::new(TransactionType::SetScript, data)
    }
}

impl KeeperAdapter for SignerSponsorshipTx {
    type Output = KeeperTx<SponsoredFeeTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = SponsoredFeeTx {
            base: defaults(TransactionType::Sponsorship, &self.base, None, options),
            min_sponsored_asset_fee: SponsoredFee {
                amount: self.min_sponsored_asset_fee,
                asset_id: self.asset_id,
            },
        };
        KeeperTx::new(TransactionType::Sponsorship, data)
    }
}

impl KeeperAdapter for SignerSetAssetScriptTx {
    type Output = KeeperTx<SetAssetScriptTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = SetAssetScriptTx {
            base: defaults(TransactionType::SetAssetScript, &self.base, None, options),
            asset_id: self.asset_id,
            script: self.script,
        };
        KeeperTx::new(TransactionType::SetAssetScript, data)
    }
}

impl KeeperAdapter for SignerInvokeTx {
    type Output = KeeperTx<ScriptInvocationTx>;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        let data = ScriptInvocationTx {
            base: defaults(
                TransactionType::InvokeScript,
                &self.base,
                self.fee_asset_id.as_deref(),
                options,
            ),
            d_app: self.d_app,
            call: self.call,
            payment: self.payment,
        };
        KeeperTx::new(TransactionType::InvokeScript, data)
    }
}

impl KeeperAdapter for SignerTx {
    type Output = SignTransactionData;

    fn into_keeper_tx(self, options: &AdapterOptions) -> Self::Output {
        tracing::debug!(tx_type = self.tx_type().name(), "adapting signer transaction");
        match self {
            SignerTx::Issue(tx) => SignTransactionData::Issue(tx.into_keeper_tx(options)),
            SignerTx::Transfer(tx) => SignTransactionData::Transfer(tx.into_keeper_tx(options)),
            SignerTx::Reissue(tx) => SignTransactionData::Reissue(tx.into_keeper_tx(options)),
            SignerTx::Burn(tx) => SignTransactionData::Burn(tx.into_keeper_tx(options)),
            SignerTx::Lease(tx) => SignTransactionData::Lease(tx.into_keeper_tx(options)),
            SignerTx::CancelLease(tx) => {
                SignTransactionData::LeaseCancel(tx.into_keeper_tx(options))
            }
            SignerTx::Alias(tx) => SignTransactionData::CreateAlias(tx.into_keeper_tx(options)),
            SignerTx::MassTransfer(tx) => {
                SignTransactionData::MassTransfer(tx.into_keeper_tx(options))
            }
            SignerTx::Data(tx) => SignTransactionData::Data(tx.into_keeper_tx(options)),
            SignerTx::SetScript(tx) => SignTransactionData::SetScript(tx.into_keeper_tx(options)),
            SignerTx::Sponsorship(tx) => {
                SignTransactionData::SponsoredFee(tx.into_keeper_tx(options))
            }
            SignerTx::SetAssetScript(tx) => {
                SignTransactionData::SetAssetScript(tx.into_keeper_tx(options))
            }
            SignerTx::InvokeScript(tx) => {
                SignTransactionData::ScriptInvocation(tx.into_keeper_tx(options))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const RECIPIENT: &str = "3JmS7yHmnv9qzbnZhFPz4T5nUAVzQknu6dH";
    const ASSET_ID: &str = "7sP5abE9nGRwZxkgaEXgkQDZ3ERBcm9PLHixaUE5SYoT";

    fn adapt(value: Value) -> Value {
        let keeper = keeper_tx_from_value(value, &AdapterOptions::default()).unwrap();
        serde_json::to_value(&keeper).unwrap()
    }

    #[rstest]
    #[case::issue(json!({ "type": 3, "name": "Turtle", "quantity": 1000, "decimals": 2 }), 3)]
    #[case::transfer(json!({ "type": 4, "recipient": RECIPIENT, "amount": 1 }), 4)]
    #[case::reissue(json!({ "type": 5, "assetId": ASSET_ID, "quantity": 5, "reissuable": true }), 5)]
    #[case::burn(json!({ "type": 6, "assetId": ASSET_ID, "amount": 5 }), 6)]
    #[case::lease(json!({ "type": 8, "recipient": RECIPIENT, "amount": 5 }), 8)]
    #[case::cancel_lease(json!({ "type": 9, "leaseId": ASSET_ID }), 9)]
    #[case::alias(json!({ "type": 10, "alias": "turtle" }), 10)]
    #[case::mass_transfer(json!({ "type": 11, "transfers": [] }), 11)]
    #[case::data(json!({ "type": 12, "data": [] }), 12)]
    #[case::set_script(json!({ "type": 13, "script": null }), 13)]
    #[case::sponsorship(json!({ "type": 14, "assetId": ASSET_ID, "minSponsoredAssetFee": 1 }), 14)]
    #[case::set_asset_script(json!({ "type": 15, "assetId": ASSET_ID, "script": "base64:AQa3b8tH" }), 15)]
    #[case::invoke_script(json!({ "type": 16, "dApp": RECIPIENT }), 16)]
    fn test_envelope_type_matches_kind(#[case] tx: Value, #[case] expected: u8) {
        let keeper = keeper_tx_from_value(tx, &AdapterOptions::default()).unwrap();
        assert_eq!(keeper.tx_type(), expected);
        assert_eq!(adapt_type(&keeper), json!(expected));
    }

    fn adapt_type(keeper: &SignTransactionData) -> Value {
        serde_json::to_value(keeper).unwrap()["type"].clone()
    }

    #[rstest]
    #[case::transfer(json!({ "type": 4, "recipient": RECIPIENT, "amount": 1, "fee": 100000, "feeAssetId": "ASSETID" }))]
    #[case::invoke_script(json!({ "type": 16, "dApp": RECIPIENT, "fee": 100000, "feeAssetId": "ASSETID" }))]
    fn test_fee_uses_fee_asset(#[case] tx: Value) {
        assert_eq!(
            adapt(tx)["data"]["fee"],
            json!({ "amount": 100000, "assetId": "ASSETID" })
        );
    }

    #[rstest]
    #[case::lease(json!({ "type": 8, "recipient": RECIPIENT, "amount": 5, "fee": 100000 }))]
    #[case::alias(json!({ "type": 10, "alias": "turtle", "fee": 100000, "feeAssetId": "ASSETID" }))]
    #[case::data(json!({ "type": 12, "data": [], "fee": 100000 }))]
    fn test_fee_defaults_to_native_asset(#[case] tx: Value) {
        assert_eq!(
            adapt(tx)["data"]["fee"],
            json!({ "amount": 100000, "assetId": "TN" })
        );
    }

    #[rstest]
    #[case::transfer(TransactionType::Transfer, "ASSETID")]
    #[case::invoke_script(TransactionType::InvokeScript, "ASSETID")]
    #[case::lease(TransactionType::Lease, "TN")]
    #[case::sponsorship(TransactionType::Sponsorship, "TN")]
    fn test_fee_asset_depends_on_kind(
        #[case] tx_type: TransactionType,
        #[case] expected: &str,
    ) {
        let base = SignerTxBase {
            fee: Some(Amount::from(100000)),
            ..Default::default()
        };
        let keeper = defaults(tx_type, &base, Some("ASSETID"), &AdapterOptions::default());
        assert_eq!(keeper.fee.unwrap().asset_id, expected);
    }

    #[test]
    fn test_transfer_fee_without_fee_asset() {
        let keeper = adapt(json!({
            "type": 4, "recipient": RECIPIENT, "amount": 1, "fee": "100000", "feeAssetId": null
        }));
        assert_eq!(
            keeper["data"]["fee"],
            json!({ "amount": "100000", "assetId": "TN" })
        );
    }

    #[test]
    fn test_empty_fee_is_omitted() {
        for fee in [json!(0), json!("")] {
            let keeper = adapt(json!({ "type": 10, "alias": "turtle", "fee": fee }));
            assert!(keeper["data"].get("fee").is_none());
        }
        let keeper = adapt(json!({ "type": 10, "alias": "turtle" }));
        assert!(keeper["data"].get("fee").is_none());
    }

    #[test]
    fn test_transfer() {
        let keeper = adapt(json!({
            "type": 4,
            "recipient": RECIPIENT,
            "amount": 100000000,
            "assetId": ASSET_ID,
            "attachment": "3MyAGEBuZGDKZDzYn6sbh2noqk9uYHy4kjw"
        }));
        assert_eq!(
            keeper,
            json!({
                "type": 4,
                "data": {
                    "amount": { "amount": 100000000, "assetId": ASSET_ID },
                    "recipient": RECIPIENT,
                    "attachment": "3MyAGEBuZGDKZDzYn6sbh2noqk9uYHy4kjw"
                }
            })
        );
    }

    #[test]
    fn test_transfer_omits_missing_attachment() {
        let keeper = adapt(json!({ "type": 4, "recipient": RECIPIENT, "amount": 1 }));
        assert!(keeper["data"].get("attachment").is_none());
        assert_eq!(keeper["data"]["amount"]["assetId"], json!("TN"));

        let keeper = adapt(json!({
            "type": 4, "recipient": RECIPIENT, "amount": 1, "attachment": ""
        }));
        assert!(keeper["data"].get("attachment").is_none());
    }

    #[test]
    fn test_issue_defaults() {
        let keeper = adapt(json!({
            "type": 3, "name": "Turtle", "quantity": "1000000000000", "decimals": 8
        }));
        assert_eq!(
            keeper,
            json!({
                "type": 3,
                "data": {
                    "name": "Turtle",
                    "description": "",
                    "quantity": "1000000000000",
                    "precision": 8,
                    "reissuable": false
                }
            })
        );
    }

    #[test]
    fn test_issue_keeps_given_fields() {
        let keeper = adapt(json!({
            "type": 3,
            "name": "Turtle",
            "description": "Shell token",
            "quantity": 1000,
            "decimals": 0,
            "reissuable": true,
            "script": "base64:AQa3b8tH",
            "fee": 100000000
        }));
        let data = &keeper["data"];
        assert_eq!(data["description"], json!("Shell token"));
        assert_eq!(data["reissuable"], json!(true));
        assert_eq!(data["precision"], json!(0));
        assert_eq!(data["script"], json!("base64:AQa3b8tH"));
        assert_eq!(data["fee"], json!({ "amount": 100000000, "assetId": "TN" }));
        assert!(data.get("decimals").is_none());
    }

    #[test]
    fn test_mass_transfer_total_is_zero() {
        let keeper = adapt(json!({
            "type": 11,
            "assetId": ASSET_ID,
            "transfers": [
                { "recipient": RECIPIENT, "amount": 100 },
                { "recipient": "alias:L:turtle", "amount": "200" }
            ]
        }));
        let data = &keeper["data"];
        assert_eq!(data["totalAmount"], json!({ "amount": 0, "assetId": ASSET_ID }));
        assert_eq!(data["transfers"].as_array().unwrap().len(), 2);
        assert_eq!(data["transfers"][1]["amount"], json!("200"));
        assert!(data.get("attachment").is_none());
    }

    #[test]
    fn test_mass_transfer_native_asset() {
        let keeper = adapt(json!({ "type": 11, "assetId": null, "transfers": [] }));
        assert_eq!(
            keeper["data"]["totalAmount"],
            json!({ "amount": 0, "assetId": "TN" })
        );
    }

    #[test]
    fn test_sponsorship() {
        let keeper = adapt(json!({
            "type": 14, "assetId": ASSET_ID, "minSponsoredAssetFee": 100, "fee": 100000000
        }));
        assert_eq!(
            keeper["data"],
            json!({
                "fee": { "amount": 100000000, "assetId": "TN" },
                "minSponsoredAssetFee": { "amount": 100, "assetId": ASSET_ID }
            })
        );
    }

    #[test]
    fn test_sponsorship_cancel_keeps_null_amount() {
        let keeper = adapt(json!({
            "type": 14, "assetId": ASSET_ID, "minSponsoredAssetFee": null, "fee": 100000000
        }));
        assert_eq!(
            keeper,
            json!({
                "type": 14,
                "data": {
                    "fee": { "amount": 100000000, "assetId": "TN" },
                    "minSponsoredAssetFee": { "amount": null, "assetId": ASSET_ID }
                }
            })
        );

        let keeper = adapt(json!({ "type": 14, "assetId": ASSET_ID }));
        assert_eq!(
            keeper["data"]["minSponsoredAssetFee"],
            json!({ "amount": null, "assetId": ASSET_ID })
        );
    }

    #[test]
    fn test_data_entries_pass_through() {
        let entries = json!([
            { "key": "int", "type": "integer", "value": 42 },
            { "key": "flag", "type": "boolean", "value": true },
            { "key": "bin", "type": "binary", "value": "base64:AQID" },
            { "key": "deleted", "value": null }
        ]);
        let keeper = adapt(json!({ "type": 12, "data": entries.clone() }));
        assert_eq!(keeper["data"]["data"], entries);
    }

    #[test]
    fn test_invoke_script() {
        let keeper = adapt(json!({
            "type": 16,
            "dApp": RECIPIENT,
            "call": { "function": "deposit", "args": [{ "type": "string", "value": "x" }] },
            "payment": [{ "assetId": null, "amount": 1000 }],
            "fee": 500000
        }));
        assert_eq!(
            keeper,
            json!({
                "type": 16,
                "data": {
                    "fee": { "amount": 500000, "assetId": "TN" },
                    "dApp": RECIPIENT,
                    "call": { "function": "deposit", "args": [{ "type": "string", "value": "x" }] },
                    "payment": [{ "assetId": null, "amount": 1000 }]
                }
            })
        );
    }

    #[test]
    fn test_invoke_script_without_call_or_payment() {
        let keeper = adapt(json!({ "type": 16, "dApp": RECIPIENT }));
        assert_eq!(keeper, json!({ "type": 16, "data": { "dApp": RECIPIENT } }));
    }

    #[test]
    fn test_set_script_and_asset_script() {
        let keeper = adapt(json!({ "type": 13, "script": "base64:AQa3b8tH" }));
        assert_eq!(keeper["data"], json!({ "script": "base64:AQa3b8tH" }));

        let keeper = adapt(json!({ "type": 15, "assetId": ASSET_ID, "script": "base64:AQa3b8tH" }));
        assert_eq!(
            keeper["data"],
            json!({ "assetId": ASSET_ID, "script": "base64:AQa3b8tH" })
        );
    }

    #[test]
    fn test_typed_adapter_keeps_concrete_shape() {
        let tx = SignerLeaseTx {
            base: SignerTxBase {
                fee: Some(Amount::from(100000)),
                ..Default::default()
            },
            recipient: RECIPIENT.to_string(),
            amount: Amount::from(500),
        };
        let keeper: KeeperTx<LeaseTx> = keeper_tx_factory(tx);
        assert_eq!(keeper.tx_type, 8);
        assert_eq!(keeper.data.amount, Amount::from(500));
        assert_eq!(keeper.data.base.fee.unwrap().asset_id, "TN");
    }

    #[test]
    fn test_custom_native_asset() {
        let options = AdapterOptions {
            native_asset_id: "WAVES".to_string(),
        };
        let tx = SignerTransferTx {
            base: SignerTxBase {
                fee: Some(Amount::from(100000)),
                ..Default::default()
            },
            recipient: RECIPIENT.to_string(),
            amount: Amount::from(1),
            asset_id: None,
            fee_asset_id: None,
            attachment: None,
        };
        let keeper = keeper_tx_factory_with(tx, &options);
        assert_eq!(keeper.data.amount.asset_id, "WAVES");
        assert_eq!(keeper.data.base.fee.unwrap().asset_id, "WAVES");
    }

    #[rstest]
    #[case::genesis(json!({ "type": 1 }))]
    #[case::exchange(json!({ "type": 7 }))]
    #[case::update_asset_info(json!({ "type": 17, "assetId": ASSET_ID }))]
    #[case::unknown(json!({ "type": 99 }))]
    #[case::text(json!({ "type": "transfer" }))]
    fn test_unsupported_type(#[case] tx: Value) {
        let err = keeper_tx_from_value(tx, &AdapterOptions::default()).unwrap_err();
        assert!(matches!(err, WasmTurtleError::UnsupportedTransactionType(_)));
        assert!(err.to_string().starts_with("Unsupported transaction type"));
    }
}
