//! Integration tests for message construction and the lane client surface
//!
//! Everything here runs offline: message building, the extraArgs codecs, fee
//! rescaling, and the validation that must reject bad input before any
//! network call is attempted.

use alloy_chains::NamedChain;
use alloy_network::Ethereum;
use alloy_primitives::{hex, Address, Bytes, U256};
use alloy_provider::{Provider, ProviderBuilder};
use ccip_rs::{
    Ccip, CcipError, CcipTransfer, ChainSelector, EvmExtraArgsV2, FeeScaling, FeeScalingEntry,
    MessageRequest, RampGeneration, StatusParams, TransferParams, TransferStatus, WaitConfig,
    LEGACY_ON_RAMP_VERSION,
};

const ROUTER: &str = "0xF694E193200268f9a4868e4Aa017A0118C9a8177";
const TOKEN: &str = "0x779877A7B0D9E8603169DdbD7836e478b4624789";
const ACCOUNT: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d";

fn test_client() -> Ccip<impl Provider<Ethereum> + Clone> {
    let provider = ProviderBuilder::new().connect_http("http://localhost:8545".parse().unwrap());
    Ccip::builder()
        .source_provider(provider.clone())
        .destination_provider(provider)
        .source_chain(NamedChain::Sepolia)
        .source_selector(ChainSelector::new(16015286601757825753))
        .destination_selector(ChainSelector::new(3478487238524512106))
        .build()
}

#[test]
fn test_built_message_survives_extra_args_decode() {
    let receiver: Address = ACCOUNT.parse().unwrap();
    let token: Address = TOKEN.parse().unwrap();

    let message = MessageRequest::builder()
        .receiver(receiver)
        .token(token)
        .amount(U256::from(5_000_000u64))
        .data(Bytes::from_static(b"invoice #42"))
        .gas_limit(400_000)
        .build()
        .to_message();

    assert_eq!(message.tokenAmounts.len(), 1);
    assert_eq!(message.feeToken, Address::ZERO);

    let args = EvmExtraArgsV2::decode(&message.extraArgs).unwrap();
    assert_eq!(args.gas_limit, 400_000);
    assert!(args.allow_out_of_order_execution);
}

#[test]
fn test_token_only_message_matches_documented_encoding() {
    let message = MessageRequest::builder()
        .receiver(ACCOUNT.parse::<Address>().unwrap())
        .gas_limit(100_000)
        .build()
        .to_message();

    // Tag, then 100000 as a 32-byte word, then the out-of-order flag word.
    insta::assert_snapshot!(hex::encode(&message.extraArgs), @"181dcf1000000000000000000000000000000000000000000000000000000000000186a00000000000000000000000000000000000000000000000000000000000000001");
}

#[test]
fn test_fee_scaling_table_is_injected_configuration() {
    let provider = ProviderBuilder::new().connect_http("http://localhost:8545".parse().unwrap());
    let client = Ccip::builder()
        .source_provider(provider.clone())
        .destination_provider(provider)
        .source_chain(NamedChain::Mainnet)
        .source_selector(ChainSelector::new(5009297550715157269))
        .destination_selector(ChainSelector::new(4949039107694359620))
        .fee_scaling(FeeScaling::new(vec![FeeScalingEntry {
            name_fragment: "mainnet".to_string(),
            exponent: 3,
        }]))
        .build();

    assert_eq!(client.fee_scaling().exponent_for("mainnet"), Some(3));
    assert_eq!(client.fee_scaling().exponent_for("hedera"), None);
    assert_eq!(
        client
            .fee_scaling()
            .scale(U256::from(2u64), &client.source_chain().to_string()),
        U256::from(2_000u64)
    );
}

#[test]
fn test_legacy_version_string_selects_legacy_schema() {
    let legacy = RampGeneration::from_type_and_version(LEGACY_ON_RAMP_VERSION);
    assert_eq!(legacy, RampGeneration::Legacy);
    assert_eq!(legacy.send_event_name(), "CCIPSendRequested");
    assert_eq!(legacy.message_id_path(), "message.messageId");

    let current = RampGeneration::from_type_and_version("OnRamp 1.6.0");
    assert_eq!(current, RampGeneration::Current);
    assert_eq!(current.send_event_name(), "CCIPMessageSent");
    assert_eq!(current.message_id_path(), "message.header.messageId");
}

#[test]
fn test_transfer_status_serializes_for_callers() {
    let status = TransferStatus::Success;
    let json = serde_json::to_string(&status).unwrap();
    let back: TransferStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(back, status);
}

#[tokio::test]
async fn test_validation_rejects_before_any_network_call() {
    // No RPC endpoint is listening on the configured URL; every error below
    // must therefore come from validation, not transport.
    let client = test_client();

    let bad_router = TransferParams::builder()
        .router("0x1234".to_string())
        .from(ACCOUNT.to_string())
        .token(TOKEN.to_string())
        .amount(U256::from(1u64))
        .receiver(ACCOUNT.to_string())
        .build();
    assert!(matches!(
        client.transfer(bad_router).await.unwrap_err(),
        CcipError::Parameter { ref role, .. } if role == "router"
    ));

    let bad_message_id = StatusParams::builder()
        .destination_router(ROUTER.to_string())
        .message_id("not-hex".to_string())
        .build();
    assert!(matches!(
        client.get_transfer_status(bad_message_id).await.unwrap_err(),
        CcipError::Parameter { ref role, .. } if role == "messageId"
    ));
}

#[test]
fn test_client_is_usable_through_trait_object() {
    let client = test_client();
    let lane: &dyn CcipTransfer = &client;

    assert_eq!(
        lane.source_selector(),
        ChainSelector::new(16015286601757825753)
    );
    assert_eq!(
        lane.destination_selector(),
        ChainSelector::new(3478487238524512106)
    );
}

#[test]
fn test_wait_config_defaults_to_two_confirmations() {
    let config = WaitConfig::default();
    assert_eq!(config.confirmations, 2);

    let custom = WaitConfig::default()
        .with_confirmations(6)
        .with_timeout_secs(300);
    assert_eq!(custom.confirmations, 6);
    assert_eq!(custom.timeout_secs, Some(300));
}
