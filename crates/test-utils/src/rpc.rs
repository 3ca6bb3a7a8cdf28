//! Helpers for driving [`EvmTransport`] against an alloy [`Asserter`].
//!
//! The mocked client answers requests from a FIFO queue, so only providers
//! without recommended fillers are used here: every RPC the transport makes
//! is then one the test scripted.

use actionkit_transport::EvmTransport;
use alloy::{
    primitives::{Address, TxHash, U64},
    providers::{Provider, ProviderBuilder},
    transports::mock::Asserter,
};
use serde_json::{json, Value};
use std::time::Duration;

/// Poll interval used by mocked transports.
pub const MOCK_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A node-signing [`EvmTransport`] for `from`, answering from `asserter`.
pub fn mocked_transport(asserter: &Asserter, from: Address) -> EvmTransport {
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone())
        .erased();
    EvmTransport::new(provider, from).with_poll_interval(MOCK_POLL_INTERVAL)
}

/// Push a quantity response, e.g. for `eth_chainId` or
/// `eth_getTransactionCount`.
pub fn push_quantity(asserter: &Asserter, value: u64) {
    asserter.push_success(&U64::from(value));
}

/// Push `n` empty `eth_getTransactionReceipt` responses.
pub fn push_pending(asserter: &Asserter, n: usize) {
    for _ in 0..n {
        asserter.push_success(&Value::Null);
    }
}

/// A JSON-RPC transaction receipt.
pub fn rpc_receipt(tx_hash: TxHash, success: bool, block: u64) -> Value {
    json!({
        "type": "0x2",
        "status": if success { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0xfde8",
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": TxHash::repeat_byte(0xbb),
        "blockNumber": format!("{block:#x}"),
        "gasUsed": "0xfde8",
        "effectiveGasPrice": "0x3b9aca00",
        "from": Address::repeat_byte(0x01),
        "to": Address::repeat_byte(0x02),
        "contractAddress": null,
    })
}
