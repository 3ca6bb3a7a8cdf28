//! actionkit types: the contract-call ABI codec, transaction requests and
//! receipts, token amount formatting, and startup configuration.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod abi;
pub use abi::{
    build_call, decode_args, decode_output, encode_args, parse_address, selector, AbiError,
    ContractInterface, FunctionEntry,
};

pub mod config;
pub use config::{ActionKitConfig, ConfigError};

mod tx;
pub use tx::{TransactionReceipt, TransactionRequest, TxStatus};

mod units;
pub use units::format_units;
