//! Deterministic test keys.

use alloy::{
    primitives::Address,
    signers::{k256::ecdsa::SigningKey, local::PrivateKeySigner},
};
use std::sync::LazyLock;

/// Test signers, one per key `[n + 1; 32]`.
pub static TEST_SIGNERS: LazyLock<[PrivateKeySigner; 8]> = LazyLock::new(|| {
    core::array::from_fn(|i| {
        let key = [i as u8 + 1; 32];
        PrivateKeySigner::from(SigningKey::from_slice(&key).expect("valid test key"))
    })
});

/// Addresses of [`TEST_SIGNERS`].
pub static TEST_USERS: LazyLock<[Address; 8]> =
    LazyLock::new(|| core::array::from_fn(|i| TEST_SIGNERS[i].address()));
