//! End-to-end tests of the USDC and wallet providers through the registry.
use actionkit_actions::{
    providers::{
        usdc::{AMOUNT, GET_BALANCE, TO_ADDRESS, TRANSFER, USER_ADDRESS},
        wallet::GET_WALLET_DETAILS,
        UsdcActionProvider, WalletActionProvider,
    },
    ActionError, ActionRegistry,
};
use actionkit_constants::{base_mainnet, base_sepolia};
use actionkit_test_utils::transport::MockTransport;
use actionkit_transport::TransportError;
use actionkit_types::{selector, TxStatus};
use alloy::primitives::{address, hex, Address, TxHash, U256};
use serde_json::{json, Map, Value};
use std::time::Duration;

const RECIPIENT: Address = address!("0x1111111111111111111111111111111111111111");

fn registry(wallet: MockTransport) -> ActionRegistry<MockTransport> {
    ActionRegistry::new(wallet)
        .with_provider(WalletActionProvider.build().unwrap())
        .unwrap()
        .with_provider(UsdcActionProvider::default().build().unwrap())
        .unwrap()
}

fn args(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

fn transfer_args(amount: Value) -> Map<String, Value> {
    args(json!({ TO_ADDRESS: RECIPIENT.to_string(), AMOUNT: amount }))
}

async fn transfer(registry: &ActionRegistry<MockTransport>, amount: Value) -> String {
    registry.invoke(TRANSFER, &transfer_args(amount), &base_sepolia::NETWORK).await
}

#[tokio::test]
async fn balance_query() {
    let wallet = MockTransport::new();
    wallet.push_uint(U256::from(2_500_000));
    let registry = registry(wallet.clone());

    let out = registry
        .invoke(
            GET_BALANCE,
            &args(json!({ USER_ADDRESS: "0x1111111111111111111111111111111111111111" })),
            &base_sepolia::NETWORK,
        )
        .await;
    assert_eq!(out, "User 0x1111111111111111111111111111111111111111 has 2.50 USDC");

    let calls = wallet.state_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].contract, base_sepolia::USDC_ADDRESS);
    assert_eq!(calls[0].selector, selector("balanceOf(address)"));
    assert_eq!(calls[0].args.as_ref(), RECIPIENT.into_word().as_slice());
    assert!(wallet.submissions().is_empty());
}

#[tokio::test]
async fn addresses_are_echoed_as_given() {
    let lower = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd";
    let tx_hash = TxHash::repeat_byte(0xef);
    let wallet = MockTransport::new();
    wallet.push_uint(U256::from(2_500_000));
    wallet.push_tx_hash(tx_hash);
    let registry = registry(wallet.clone());

    let out = registry
        .invoke(GET_BALANCE, &args(json!({ USER_ADDRESS: lower })), &base_sepolia::NETWORK)
        .await;
    assert_eq!(out, format!("User {lower} has 2.50 USDC"));

    let out = registry
        .invoke(
            TRANSFER,
            &args(json!({ TO_ADDRESS: lower, AMOUNT: 1_000_000 })),
            &base_sepolia::NETWORK,
        )
        .await;
    assert_eq!(
        out,
        format!("Successfully transferred 1.00 USDC to {lower}. Transaction hash: {tx_hash}")
    );
    let user: Address = lower.parse().unwrap();
    assert_eq!(wallet.state_calls()[0].args.as_ref(), user.into_word().as_slice());
}

#[tokio::test]
async fn balance_query_formats_thousands() {
    let wallet = MockTransport::new();
    wallet.push_uint(U256::from(1_234_567_890u64));
    let registry = registry(wallet);

    let out = registry
        .invoke(
            GET_BALANCE,
            &args(json!({ USER_ADDRESS: RECIPIENT.to_string() })),
            &base_sepolia::NETWORK,
        )
        .await;
    assert!(out.ends_with("has 1,234.57 USDC"), "{out}");
}

#[tokio::test]
async fn balance_query_reports_transport_failure() {
    let wallet = MockTransport::new();
    wallet.push_state_error(TransportError::Reverted {
        message: "execution reverted".to_string(),
        data: None,
    });
    let registry = registry(wallet);

    let out = registry
        .invoke(
            GET_BALANCE,
            &args(json!({ USER_ADDRESS: RECIPIENT.to_string() })),
            &base_sepolia::NETWORK,
        )
        .await;
    assert_eq!(out, "Error checking USDC balance: execution reverted: execution reverted");
}

#[tokio::test]
async fn balance_query_reports_malformed_output() {
    let wallet = MockTransport::new();
    wallet.push_state(vec![0u8; 31]);
    let registry = registry(wallet);

    let out = registry
        .invoke(
            GET_BALANCE,
            &args(json!({ USER_ADDRESS: RECIPIENT.to_string() })),
            &base_sepolia::NETWORK,
        )
        .await;
    assert!(out.starts_with("Error checking USDC balance: abi error:"), "{out}");
}

#[tokio::test]
async fn transfer_succeeds() {
    let tx_hash = TxHash::repeat_byte(0xab);
    let wallet = MockTransport::new();
    wallet.push_tx_hash(tx_hash);
    wallet.push_receipt(TxStatus::Success);
    let registry = registry(wallet.clone());

    let out = transfer(&registry, json!(1_000_000)).await;
    assert_eq!(
        out,
        format!(
            "Successfully transferred 1.00 USDC to {RECIPIENT}. Transaction hash: {tx_hash}"
        )
    );

    let submissions = wallet.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].to(), base_sepolia::USDC_ADDRESS);
    assert_eq!(submissions[0].value(), Some(U256::ZERO));

    let expected = hex::decode(concat!(
        "a9059cbb",
        "0000000000000000000000001111111111111111111111111111111111111111",
        "00000000000000000000000000000000000000000000000000000000000f4240",
    ))
    .unwrap();
    assert_eq!(submissions[0].data().as_ref(), expected.as_slice());

    assert_eq!(wallet.confirmations(), vec![(tx_hash, Duration::from_secs(120))]);
}

#[tokio::test]
async fn transfer_amount_as_decimal_string() {
    let wallet = MockTransport::new();
    let registry = registry(wallet.clone());

    let out = transfer(&registry, json!("2500000")).await;
    assert!(out.starts_with("Successfully transferred 2.50 USDC"), "{out}");
    assert_eq!(wallet.submissions().len(), 1);
}

#[tokio::test]
async fn transfer_reverted() {
    let tx_hash = TxHash::repeat_byte(0xcd);
    let wallet = MockTransport::new();
    wallet.push_tx_hash(tx_hash);
    wallet.push_receipt(TxStatus::Reverted);
    let registry = registry(wallet);

    let out = transfer(&registry, json!(1_000_000)).await;
    assert!(!out.starts_with("Successfully"));
    assert_eq!(out, format!("Error transferring USDC: transaction {tx_hash} reverted"));
}

#[tokio::test]
async fn transfer_submit_failure() {
    let wallet = MockTransport::new();
    wallet.push_submit_error(TransportError::Rejected("insufficient funds".to_string()));
    let registry = registry(wallet.clone());

    let out = transfer(&registry, json!(1_000_000)).await;
    assert_eq!(out, "Error transferring USDC: transaction rejected: insufficient funds");
    assert!(wallet.confirmations().is_empty());
}

#[tokio::test]
async fn transfer_timeout_is_pending() {
    let tx_hash = TxHash::repeat_byte(0xef);
    let wallet = MockTransport::new();
    wallet.push_tx_hash(tx_hash);
    wallet.push_timeout();
    let provider = UsdcActionProvider::default()
        .with_confirmation_timeout(Duration::from_secs(30))
        .build()
        .unwrap();
    let registry = ActionRegistry::new(wallet.clone()).with_provider(provider).unwrap();

    let out = transfer(&registry, json!(1_000_000)).await;
    assert_eq!(out, format!("USDC transfer {tx_hash} is pending: outcome unknown after 30s"));
    assert_eq!(wallet.submissions().len(), 1);
}

#[tokio::test]
async fn non_positive_amounts_never_reach_the_transport() {
    let wallet = MockTransport::new();
    let registry = registry(wallet.clone());

    for amount in [json!(0), json!(-1), json!("0"), json!(0.5)] {
        let err = registry
            .try_invoke(TRANSFER, &transfer_args(amount.clone()), &base_sepolia::NETWORK)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, ActionError::Validation(e) if e.field == AMOUNT),
            "{amount}: {err}"
        );
    }
    assert_eq!(wallet.io_count(), 0);
}

#[tokio::test]
async fn malformed_address_is_rejected() {
    let wallet = MockTransport::new();
    let registry = registry(wallet.clone());

    let out = registry
        .invoke(GET_BALANCE, &args(json!({ USER_ADDRESS: "0x123" })), &base_sepolia::NETWORK)
        .await;
    assert!(out.starts_with("Error: invalid field `user_address`"), "{out}");
    assert_eq!(wallet.io_count(), 0);
}

#[tokio::test]
async fn network_mismatch_precedes_validation() {
    let wallet = MockTransport::new();
    let registry = registry(wallet.clone());

    let err = registry
        .try_invoke(TRANSFER, &transfer_args(json!(0)), &base_mainnet::NETWORK)
        .await
        .unwrap_err();
    assert!(matches!(err, ActionError::NetworkMismatch { ref action, .. } if action == TRANSFER));

    let out = registry.invoke(TRANSFER, &Map::new(), &base_mainnet::NETWORK).await;
    assert_eq!(
        out,
        "Error: action `transfer_usdc` is not available on base-mainnet (8453); \
         supported: chain ids [84532]"
    );
    assert_eq!(wallet.io_count(), 0);
}

#[tokio::test]
async fn wallet_details() {
    let wallet = MockTransport::new()
        .with_address(RECIPIENT)
        .with_native_balance(U256::from(1_500_000_000_000_000_000u64));
    let registry = registry(wallet);

    let out = registry.invoke(GET_WALLET_DETAILS, &Map::new(), &base_mainnet::NETWORK).await;
    assert_eq!(
        out,
        format!(
            "Wallet {RECIPIENT} on network 84532 (base-sepolia) has a native balance of \
             1.500000 ETH"
        )
    );
}
