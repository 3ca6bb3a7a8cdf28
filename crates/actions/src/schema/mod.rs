//! Action input schemas.
//!
//! An [`ActionSchema`] is an ordered list of [`FieldSpec`]s. Raw JSON input
//! is checked against it by [`validate`], producing typed [`CallArgs`].

mod validate;
pub use validate::{validate, ArgValue, CallArgs, ValidationError};

use alloy::primitives::U256;
use regex::Regex;
use serde_json::{json, Map, Value};
use std::{collections::HashSet, fmt, sync::LazyLock};

/// Pattern accepted for address fields: `0x` followed by 40 hex digits in
/// any case.
pub const ADDRESS_PATTERN: &str = "^0x[0-9a-fA-F]{40}$";

pub(crate) static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ADDRESS_PATTERN).expect("address pattern is valid"));

/// Errors building an [`ActionSchema`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Two fields share a name.
    #[error("duplicate field `{0}`")]
    DuplicateField(String),
    /// A pattern constraint is not a valid regular expression.
    #[error("invalid pattern for field `{field}`: {reason}")]
    InvalidPattern {
        /// The field carrying the pattern.
        field: String,
        /// The regex compiler's message.
        reason: String,
    },
}

/// The type of an action input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// A 20-byte account address, given as a `0x`-prefixed hex string.
    Address,
    /// An unsigned integer of up to 256 bits, given as a JSON integer or a
    /// decimal string.
    Uint,
    /// A JSON string.
    String,
    /// A JSON boolean.
    Bool,
}

impl FieldType {
    /// The JSON Schema type keyword for this field type.
    pub const fn json_type(&self) -> &'static str {
        match self {
            Self::Address | Self::String => "string",
            Self::Uint => "integer",
            Self::Bool => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Address => "address",
            Self::Uint => "uint",
            Self::String => "string",
            Self::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A constraint on a field's value.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// The string form must match the regular expression.
    Pattern(Regex),
    /// The integer must be at least this value.
    Min(U256),
    /// The integer must be at most this value.
    Max(U256),
    /// A mixed-case address must carry a valid EIP-55 checksum.
    /// Single-case addresses are accepted unchanged.
    Checksum,
}

impl Constraint {
    /// A strictly positive integer.
    pub const fn positive() -> Self {
        Self::Min(U256::from_limbs([1, 0, 0, 0]))
    }
}

/// A single named field of an [`ActionSchema`].
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    ty: FieldType,
    required: bool,
    description: String,
    constraints: Vec<Constraint>,
}

impl FieldSpec {
    /// A required field of the given type.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: true,
            description: String::new(),
            constraints: Vec::new(),
        }
    }

    /// A required address field.
    pub fn address(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Address)
    }

    /// A required unsigned integer field.
    pub fn uint(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Uint)
    }

    /// Mark the field optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the description shown to callers.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a constraint.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Add a pattern constraint, compiling `pattern`.
    pub fn with_pattern(self, pattern: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern).map_err(|e| SchemaError::InvalidPattern {
            field: self.name.clone(),
            reason: e.to_string(),
        })?;
        Ok(self.with_constraint(Constraint::Pattern(regex)))
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the field type.
    pub const fn ty(&self) -> FieldType {
        self.ty
    }

    /// True if the field must be present.
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the constraints.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    fn json_schema(&self) -> Value {
        let mut property = Map::new();
        property.insert("type".into(), self.ty.json_type().into());
        if !self.description.is_empty() {
            property.insert("description".into(), self.description.clone().into());
        }
        if self.ty == FieldType::Address {
            property.insert("pattern".into(), ADDRESS_PATTERN.into());
        }
        for constraint in &self.constraints {
            match constraint {
                Constraint::Pattern(regex) => {
                    property.insert("pattern".into(), regex.as_str().into());
                }
                Constraint::Min(min) => {
                    property.insert("minimum".into(), json_number(*min));
                }
                Constraint::Max(max) => {
                    property.insert("maximum".into(), json_number(*max));
                }
                Constraint::Checksum => {}
            }
        }
        Value::Object(property)
    }
}

/// Integers beyond `u64` render as decimal strings.
fn json_number(value: U256) -> Value {
    u64::try_from(value).map(Value::from).unwrap_or_else(|_| value.to_string().into())
}

/// The ordered input fields of an action. Field names are unique.
#[derive(Debug, Clone, Default)]
pub struct ActionSchema {
    fields: Vec<FieldSpec>,
}

impl ActionSchema {
    /// Create a schema, rejecting duplicate field names.
    pub fn new(fields: impl IntoIterator<Item = FieldSpec>) -> Result<Self, SchemaError> {
        let fields: Vec<_> = fields.into_iter().collect();
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// A schema with no fields.
    pub const fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Get the fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// True if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the schema as a JSON Schema object.
    pub fn json_schema(&self) -> Value {
        let properties: Map<String, Value> =
            self.fields.iter().map(|field| (field.name.clone(), field.json_schema())).collect();
        let required: Vec<&str> =
            self.fields.iter().filter(|field| field.required).map(FieldSpec::name).collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}
