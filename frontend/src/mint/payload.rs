//! Entry function payload for `launchpad::mint_nft`.

use serde::Serialize;
use serde_json::{json, Value};

/// Arguments of the `mint_nft` entry function.
#[derive(Clone, Debug, PartialEq)]
pub struct MintNftArguments {
    pub collection_id: String,
    pub amount: u64,
    /// Serialized prescription form
    pub prescription_data: String,
}

/// Transaction request handed to the wallet.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputTransactionData {
    pub data: EntryFunctionData,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFunctionData {
    /// Fully qualified `<address>::<module>::<function>`
    pub function: String,
    pub type_arguments: Vec<String>,
    pub function_arguments: Vec<Value>,
}

/// Build the `mint_nft` call against the module published at `module_address`.
pub fn mint_nft(module_address: &str, args: MintNftArguments) -> InputTransactionData {
    InputTransactionData {
        data: EntryFunctionData {
            function: format!("{}::launchpad::mint_nft", module_address),
            type_arguments: Vec::new(),
            function_arguments: vec![
                json!(args.collection_id),
                json!(args.amount),
                json!(args.prescription_data),
            ],
        },
    }
}
