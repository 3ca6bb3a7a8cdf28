use crate::{ActionError, ActionSchema, CallArgs};
use async_trait::async_trait;
use serde_json::Value;
use std::{fmt, sync::Arc};

/// Executes one action.
///
/// The wallet is the only route to chain I/O. Read-only handlers may ignore
/// it. Errors are returned as-is; the registry renders them for the caller.
#[async_trait]
pub trait ActionHandler<W>: Send + Sync {
    /// Run the action with validated arguments, returning a human-readable
    /// result.
    async fn call(&self, wallet: &W, args: CallArgs) -> Result<String, ActionError>;
}

/// A named action: its schema and the handler that runs it.
///
/// The name is the dispatch key and cannot change after construction.
pub struct ActionSpec<W> {
    name: String,
    description: String,
    schema: ActionSchema,
    handler: Arc<dyn ActionHandler<W>>,
}

impl<W> Clone for ActionSpec<W> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            schema: self.schema.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<W> fmt::Debug for ActionSpec<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl<W> ActionSpec<W> {
    /// Create a new action.
    pub fn new<H>(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: ActionSchema,
        handler: H,
    ) -> Self
    where
        H: ActionHandler<W> + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
            handler: Arc::new(handler),
        }
    }

    /// Get the action name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the input schema.
    pub const fn schema(&self) -> &ActionSchema {
        &self.schema
    }

    /// Get the handler.
    pub fn handler(&self) -> &dyn ActionHandler<W> {
        self.handler.as_ref()
    }

    /// Describe the action for discovery.
    pub fn descriptor(&self) -> ActionDescriptor {
        ActionDescriptor {
            name: self.name.clone(),
            description: self.description.clone(),
            schema: self.schema.clone(),
        }
    }
}

/// What a caller needs to discover an action: name, description and
/// input schema.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    /// The dispatch key.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// The input schema.
    pub schema: ActionSchema,
}

impl ActionDescriptor {
    /// Render as a tool definition: `{name, description, parameters}` with
    /// the schema as JSON Schema.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "parameters": self.schema.json_schema(),
        })
    }
}
