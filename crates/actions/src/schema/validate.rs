use super::{ActionSchema, Constraint, FieldSpec, FieldType, ADDRESS_RE};
use actionkit_types::parse_address;
use alloy::primitives::{Address, U256};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A field failed validation. Only the first failing field is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid field `{field}`: {reason}")]
pub struct ValidationError {
    /// The offending field.
    pub field: String,
    /// What was wrong with it.
    pub reason: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { field: field.into(), reason: reason.into() }
    }
}

/// A validated, typed argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// An address.
    Address(Address),
    /// An unsigned integer.
    Uint(U256),
    /// A string.
    String(String),
    /// A boolean.
    Bool(bool),
}

impl ArgValue {
    /// The field type this value satisfies.
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Address(_) => FieldType::Address,
            Self::Uint(_) => FieldType::Uint,
            Self::String(_) => FieldType::String,
            Self::Bool(_) => FieldType::Bool,
        }
    }
}

/// Validated arguments of one action call, keyed by field name.
///
/// Optional fields absent from the input are absent here. Fields given as
/// JSON strings also keep their text exactly as the caller wrote it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallArgs {
    values: BTreeMap<String, ArgValue>,
    texts: BTreeMap<String, String>,
}

impl CallArgs {
    /// Get a value by field name.
    pub fn get(&self, field: &str) -> Option<&ArgValue> {
        self.values.get(field)
    }

    /// The input text of a field given as a JSON string, before coercion.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.texts.get(field).map(String::as_str)
    }

    /// True if the field is present.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no fields are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get an address field.
    pub fn address(&self, field: &str) -> Result<Address, ValidationError> {
        match self.require(field)? {
            ArgValue::Address(address) => Ok(*address),
            other => Err(type_error(field, FieldType::Address, other)),
        }
    }

    /// Get an unsigned integer field.
    pub fn uint(&self, field: &str) -> Result<U256, ValidationError> {
        match self.require(field)? {
            ArgValue::Uint(value) => Ok(*value),
            other => Err(type_error(field, FieldType::Uint, other)),
        }
    }

    /// Get a string field.
    pub fn string(&self, field: &str) -> Result<&str, ValidationError> {
        match self.require(field)? {
            ArgValue::String(value) => Ok(value),
            other => Err(type_error(field, FieldType::String, other)),
        }
    }

    /// Get a boolean field.
    pub fn bool(&self, field: &str) -> Result<bool, ValidationError> {
        match self.require(field)? {
            ArgValue::Bool(value) => Ok(*value),
            other => Err(type_error(field, FieldType::Bool, other)),
        }
    }

    fn require(&self, field: &str) -> Result<&ArgValue, ValidationError> {
        self.get(field).ok_or_else(|| ValidationError::new(field, "missing required field"))
    }
}

impl FromIterator<(String, ArgValue)> for CallArgs {
    fn from_iter<T: IntoIterator<Item = (String, ArgValue)>>(iter: T) -> Self {
        Self { values: iter.into_iter().collect(), texts: BTreeMap::new() }
    }
}

fn type_error(field: &str, expected: FieldType, actual: &ArgValue) -> ValidationError {
    ValidationError::new(field, format!("expected {expected}, found {}", actual.field_type()))
}

/// Validate raw input against a schema.
///
/// Fields are checked in declaration order and the first failure is
/// returned. Fields not named by the schema are ignored.
pub fn validate(
    schema: &ActionSchema,
    raw: &Map<String, Value>,
) -> Result<CallArgs, ValidationError> {
    let mut args = CallArgs::default();

    for field in schema.fields() {
        let value = match raw.get(field.name()) {
            None | Some(Value::Null) if field.is_required() => {
                return Err(ValidationError::new(field.name(), "missing required field"));
            }
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };

        let (typed, text) = coerce(field, value)?;
        check_constraints(field, &typed, text)?;
        if let Some(text) = text {
            args.texts.insert(field.name().to_string(), text.to_string());
        }
        args.values.insert(field.name().to_string(), typed);
    }

    Ok(args)
}

/// Coerce a JSON value to the field's type, also returning the string form
/// used for pattern constraints.
fn coerce<'a>(
    field: &FieldSpec,
    value: &'a Value,
) -> Result<(ArgValue, Option<&'a str>), ValidationError> {
    let invalid = |reason: &str| ValidationError::new(field.name(), reason);

    match (field.ty(), value) {
        (FieldType::Address, Value::String(s)) => {
            if !ADDRESS_RE.is_match(s) {
                return Err(invalid("not a 0x-prefixed 40 hex digit address"));
            }
            let address: Address = s.parse().map_err(|_| invalid("not a valid address"))?;
            Ok((ArgValue::Address(address), Some(s)))
        }
        (FieldType::Uint, Value::Number(n)) => {
            if let Some(n) = n.as_u64() {
                Ok((ArgValue::Uint(U256::from(n)), None))
            } else if n.as_i64().is_some() {
                Err(invalid("must be non-negative"))
            } else {
                // Integers beyond 64 bits arrive as floats.
                match n.as_f64() {
                    Some(f) if f < 0.0 => Err(invalid("must be non-negative")),
                    Some(f) if f.fract() == 0.0 => {
                        Err(invalid("exceeds 64 bits; pass large values as a decimal string"))
                    }
                    _ => Err(invalid("must be an integer")),
                }
            }
        }
        (FieldType::Uint, Value::String(s)) => {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("not a decimal unsigned integer"));
            }
            let n = U256::from_str_radix(s, 10).map_err(|_| invalid("exceeds 256 bits"))?;
            Ok((ArgValue::Uint(n), Some(s)))
        }
        (FieldType::String, Value::String(s)) => Ok((ArgValue::String(s.clone()), Some(s))),
        (FieldType::Bool, Value::Bool(b)) => Ok((ArgValue::Bool(*b), None)),
        (ty, _) => Err(ValidationError::new(
            field.name(),
            format!("expected {ty}, found {}", json_kind(value)),
        )),
    }
}

fn check_constraints(
    field: &FieldSpec,
    value: &ArgValue,
    text: Option<&str>,
) -> Result<(), ValidationError> {
    for constraint in field.constraints() {
        match (constraint, value) {
            (Constraint::Pattern(regex), _) => {
                if !text.is_some_and(|text| regex.is_match(text)) {
                    return Err(ValidationError::new(
                        field.name(),
                        format!("does not match pattern {}", regex.as_str()),
                    ));
                }
            }
            (Constraint::Min(min), ArgValue::Uint(n)) if n < min => {
                return Err(ValidationError::new(field.name(), format!("must be at least {min}")));
            }
            (Constraint::Max(max), ArgValue::Uint(n)) if n > max => {
                return Err(ValidationError::new(field.name(), format!("must be at most {max}")));
            }
            (Constraint::Checksum, ArgValue::Address(_)) => {
                if let Err(e) = parse_address(text.unwrap_or_default()) {
                    return Err(ValidationError::new(field.name(), e.to_string()));
                }
            }
            _ => {}
        }
    }
    Ok(())
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
