//! actionkit wallet transports.
//!
//! A [`WalletTransport`] is the only component permitted to perform chain
//! I/O: reading contract state, broadcasting signed transactions, and waiting
//! for their inclusion.

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
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::TransportError;

mod evm;
pub use evm::EvmTransport;

mod nonce;
pub use nonce::{NonceLease, NonceManager};

mod traits;
pub use traits::WalletTransport;
