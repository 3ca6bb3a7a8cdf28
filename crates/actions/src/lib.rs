//! actionkit actions.
//!
//! Actions are typed, schema-validated operations bundled into
//! [`ActionProvider`]s and dispatched by name through an [`ActionRegistry`].
//! Handlers perform chain I/O only through a [`WalletTransport`].
//!
//! [`WalletTransport`]: actionkit_transport::WalletTransport

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
pub use error::ActionError;

mod provider;
pub use provider::{supports, ActionProvider, ActionProviderBuilder, ProviderError};

pub mod providers;

mod registry;
pub use registry::{ActionRegistry, RegistryError};

pub mod schema;
pub use schema::{
    validate, ActionSchema, ArgValue, CallArgs, Constraint, FieldSpec, FieldType, SchemaError,
    ValidationError,
};

mod spec;
pub use spec::{ActionDescriptor, ActionHandler, ActionSpec};
