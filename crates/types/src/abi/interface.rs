use crate::abi::{build_call, decode_output, encode_args, AbiError};
use alloy::{
    dyn_abi::{DynSolType, DynSolValue},
    json_abi::{Function, JsonAbi, Param},
    primitives::{Bytes, Selector},
};
use std::sync::LazyLock;

/// The ERC-20 interface description shipped with this crate.
const ERC20_ABI: &str = include_str!("../../abi/erc20.json");

static ERC20: LazyLock<ContractInterface> = LazyLock::new(|| {
    ContractInterface::from_json(ERC20_ABI).expect("embedded ERC-20 ABI is valid")
});

/// A contract's declarative interface: its function entries with ordered
/// input and output types.
///
/// Loaded once from a JSON ABI and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ContractInterface {
    abi: JsonAbi,
}

impl ContractInterface {
    /// Parse an interface from a JSON ABI document.
    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        serde_json::from_str(json)
            .map(|abi| Self { abi })
            .map_err(|e| AbiError::Interface(e.to_string()))
    }

    /// The standard ERC-20 interface.
    pub fn erc20() -> &'static Self {
        &ERC20
    }

    /// Get the underlying JSON ABI.
    pub const fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Look up a function by name. Overloads resolve to the first
    /// declaration.
    pub fn function(&self, name: &str) -> Result<FunctionEntry, AbiError> {
        let function = self
            .abi
            .function(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| AbiError::UnknownFunction(name.to_string()))?;
        FunctionEntry::try_from(function)
    }
}

/// A resolved function entry of a [`ContractInterface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    name: String,
    signature: String,
    selector: Selector,
    inputs: Vec<DynSolType>,
    outputs: Vec<DynSolType>,
}

impl TryFrom<&Function> for FunctionEntry {
    type Error = AbiError;

    fn try_from(function: &Function) -> Result<Self, Self::Error> {
        Ok(Self {
            name: function.name.clone(),
            signature: function.signature(),
            selector: function.selector(),
            inputs: resolve_params(&function.inputs)?,
            outputs: resolve_params(&function.outputs)?,
        })
    }
}

impl FunctionEntry {
    /// Get the function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the canonical signature, e.g. `balanceOf(address)`.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Get the 4-byte selector.
    pub const fn selector(&self) -> Selector {
        self.selector
    }

    /// Get the ordered input types.
    pub fn inputs(&self) -> &[DynSolType] {
        &self.inputs
    }

    /// Get the ordered output types.
    pub fn outputs(&self) -> &[DynSolType] {
        &self.outputs
    }

    /// Encode the arguments without the selector.
    pub fn encode_args(&self, values: &[DynSolValue]) -> Result<Bytes, AbiError> {
        encode_args(&self.inputs, values)
    }

    /// Encode a full call: selector followed by the arguments.
    pub fn encode_call(&self, values: &[DynSolValue]) -> Result<Bytes, AbiError> {
        self.encode_args(values).map(|args| build_call(self.selector, &args))
    }

    /// Decode the function's return data.
    pub fn decode_output(&self, data: &[u8]) -> Result<Vec<DynSolValue>, AbiError> {
        decode_output(&self.outputs, data)
    }
}

fn resolve_params(params: &[Param]) -> Result<Vec<DynSolType>, AbiError> {
    params
        .iter()
        .map(|param| {
            DynSolType::parse(&param.selector_type())
                .map_err(|e| AbiError::Interface(format!("parameter {:?}: {e}", param.name)))
        })
        .collect()
}
