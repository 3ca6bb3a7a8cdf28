//! Registry behavior across several providers.
use actionkit_actions::{
    providers::{
        usdc::{GET_BALANCE, TRANSFER},
        wallet::GET_WALLET_DETAILS,
        UsdcActionProvider, WalletActionProvider,
    },
    ActionError, ActionHandler, ActionProvider, ActionRegistry, ActionSchema, ActionSpec,
    CallArgs, FieldSpec, RegistryError,
};
use actionkit_constants::{base_mainnet, base_sepolia, SupportedNetworks};
use actionkit_test_utils::{
    init_tracing,
    test_constants::{self, UNSUPPORTED_NETWORK},
    transport::MockTransport,
};
use actionkit_transport::WalletTransport;
use async_trait::async_trait;
use serde_json::{json, Map};

/// Reports the wallet address without touching the chain.
struct WhoAmI;

#[async_trait]
impl<W: WalletTransport> ActionHandler<W> for WhoAmI {
    async fn call(&self, wallet: &W, _: CallArgs) -> Result<String, ActionError> {
        Ok(wallet.address().to_string())
    }
}

fn custom_provider(action: &str) -> ActionProvider<MockTransport> {
    ActionProvider::builder("custom")
        .action(ActionSpec::new(action, "custom action", ActionSchema::empty(), WhoAmI))
        .build()
        .unwrap()
}

fn names(registry: &ActionRegistry<MockTransport>) -> Vec<String> {
    registry.list_actions().into_iter().map(|d| d.name).collect()
}

#[test]
fn duplicate_names_fail_in_either_order() {
    let usdc = || UsdcActionProvider::default().build().unwrap();
    let conflicting = || custom_provider(TRANSFER);

    let mut registry = ActionRegistry::new(MockTransport::new());
    registry.register(usdc()).unwrap();
    assert_eq!(
        registry.register(conflicting()).unwrap_err(),
        RegistryError::DuplicateActionName {
            name: TRANSFER.to_string(),
            existing_provider: "usdc-provider".to_string(),
        }
    );
    assert_eq!(names(&registry), [GET_BALANCE, TRANSFER]);

    let mut registry = ActionRegistry::new(MockTransport::new());
    registry.register(conflicting()).unwrap();
    assert_eq!(
        registry.register(usdc()).unwrap_err(),
        RegistryError::DuplicateActionName {
            name: TRANSFER.to_string(),
            existing_provider: "custom".to_string(),
        }
    );
    assert_eq!(names(&registry), [TRANSFER]);
}

#[test]
fn same_provider_twice_fails() {
    let mut registry = ActionRegistry::new(MockTransport::new());
    registry.register(WalletActionProvider.build().unwrap()).unwrap();
    assert!(registry.register(WalletActionProvider.build().unwrap()).is_err());
    assert_eq!(names(&registry), [GET_WALLET_DETAILS]);
}

#[test]
fn discovery_is_network_scoped() {
    let registry = ActionRegistry::new(MockTransport::new())
        .with_provider(UsdcActionProvider::default().build().unwrap())
        .unwrap()
        .with_provider(WalletActionProvider.build().unwrap())
        .unwrap();

    assert_eq!(names(&registry), [GET_BALANCE, TRANSFER, GET_WALLET_DETAILS]);

    let on_sepolia: Vec<_> =
        registry.actions_for(&base_sepolia::NETWORK).into_iter().map(|d| d.name).collect();
    assert_eq!(on_sepolia, [GET_BALANCE, TRANSFER, GET_WALLET_DETAILS]);

    let on_mainnet: Vec<_> =
        registry.actions_for(&base_mainnet::NETWORK).into_iter().map(|d| d.name).collect();
    assert_eq!(on_mainnet, [GET_WALLET_DETAILS]);
}

#[test]
fn tool_definitions() {
    let registry = ActionRegistry::new(MockTransport::new())
        .with_provider(UsdcActionProvider::default().build().unwrap())
        .unwrap();

    let tools: Vec<_> = registry.list_actions().iter().map(|d| d.to_json()).collect();
    assert_eq!(tools[0]["name"], GET_BALANCE);
    assert_eq!(tools[0]["parameters"]["required"], json!(["user_address"]));
    assert_eq!(
        tools[1]["parameters"]["properties"]["to_address"]["pattern"],
        "^0x[0-9a-fA-F]{40}$"
    );
}

#[tokio::test]
async fn unknown_action() {
    init_tracing();
    let wallet = MockTransport::new();
    let registry = ActionRegistry::new(wallet.clone())
        .with_provider(WalletActionProvider.build().unwrap())
        .unwrap();

    let err = registry
        .try_invoke("launch_rocket", &Map::new(), &base_sepolia::NETWORK)
        .await
        .unwrap_err();
    assert!(matches!(err, ActionError::UnknownAction(ref name) if name == "launch_rocket"));

    let out = registry.invoke("launch_rocket", &Map::new(), &base_sepolia::NETWORK).await;
    assert_eq!(out, "Error: unknown action `launch_rocket`");
    assert_eq!(wallet.io_count(), 0);
}

#[tokio::test]
async fn scoped_provider_on_test_network() {
    let provider = ActionProvider::builder("scoped")
        .action(ActionSpec::new(
            "whoami",
            "",
            ActionSchema::new([FieldSpec::address("ignored").optional()]).unwrap(),
            WhoAmI,
        ))
        .supported_networks(SupportedNetworks::only([test_constants::CHAIN_ID]))
        .build()
        .unwrap();
    let wallet = MockTransport::new();
    let registry = ActionRegistry::new(wallet.clone()).with_provider(provider).unwrap();

    let out = registry.invoke("whoami", &Map::new(), &test_constants::NETWORK).await;
    assert_eq!(out, wallet.address().to_string());

    let err =
        registry.try_invoke("whoami", &Map::new(), &UNSUPPORTED_NETWORK).await.unwrap_err();
    assert!(matches!(err, ActionError::NetworkMismatch { .. }));
}

#[tokio::test]
async fn concurrent_invocations_are_independent() {
    let wallet = MockTransport::new();
    let registry = ActionRegistry::new(wallet.clone())
        .with_provider(UsdcActionProvider::default().build().unwrap())
        .unwrap();

    let raw = json!({
        "to_address": "0x2222222222222222222222222222222222222222",
        "amount": 5,
    });
    let raw = raw.as_object().unwrap();
    let network = base_sepolia::NETWORK;

    let (a, b) = tokio::join!(
        registry.invoke(TRANSFER, raw, &network),
        registry.invoke(TRANSFER, raw, &network),
    );
    assert!(a.starts_with("Successfully transferred 0.00 USDC"), "{a}");
    assert!(b.starts_with("Successfully transferred 0.00 USDC"), "{b}");
    assert_ne!(a, b);
    assert_eq!(wallet.submissions().len(), 2);
}
