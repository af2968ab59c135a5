//! Input validation for the provision command
//!
//! Turns the raw strings a user typed into a [`ProvisionRequest`]:
//! - one positional argument, the instance name
//! - `--param NAME=VALUE` entries or a single `--params-json` value, never both
//! - `--secret SECRET[KEY]` entries, independent of either parameter source
//!
//! The first failure is returned; nothing is partially resolved.

use svcat_core::{
    parse_key_maps, parse_variable_assignments, parse_variable_json, ParameterPayload,
    ProvisionRequest, SecretRefs, DEFAULT_NAMESPACE,
};
use tracing::trace;

use crate::{Error, Result};

/// Flag names used to prefix parse errors
pub const FLAG_PARAM: &str = "--param";
/// Flag carrying JSON parameters
pub const FLAG_PARAMS_JSON: &str = "--params-json";
/// Flag carrying secret references
pub const FLAG_SECRET: &str = "--secret";

/// Raw, unvalidated provision input as collected from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionInput {
    /// Positional arguments
    pub args: Vec<String>,
    /// Target namespace
    pub namespace: String,
    /// Service class name
    pub class_name: String,
    /// Service plan name
    pub plan_name: String,
    /// `--param` entries
    pub raw_params: Vec<String>,
    /// `--params-json` text, empty when not given
    pub json_params: String,
    /// `--secret` entries
    pub raw_secrets: Vec<String>,
}

impl Default for ProvisionInput {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            class_name: String::new(),
            plan_name: String::new(),
            raw_params: Vec::new(),
            json_params: String::new(),
            raw_secrets: Vec::new(),
        }
    }
}

impl ProvisionInput {
    /// Start an input for an instance name, class and plan
    pub fn new(
        instance_name: impl Into<String>,
        class_name: impl Into<String>,
        plan_name: impl Into<String>,
    ) -> Self {
        Self {
            args: vec![instance_name.into()],
            class_name: class_name.into(),
            plan_name: plan_name.into(),
            ..Self::default()
        }
    }

    /// Set the namespace
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Add a `NAME=VALUE` entry
    pub fn param(mut self, raw: impl Into<String>) -> Self {
        self.raw_params.push(raw.into());
        self
    }

    /// Set the JSON parameter text
    pub fn params_json(mut self, json: impl Into<String>) -> Self {
        self.json_params = json.into();
        self
    }

    /// Add a `SECRET[KEY]` entry
    pub fn secret(mut self, raw: impl Into<String>) -> Self {
        self.raw_secrets.push(raw.into());
        self
    }
}

/// Validate raw input into a provisioning request
pub fn validate(input: &ProvisionInput) -> Result<ProvisionRequest> {
    let instance_name = instance_name(&input.args)?;
    let parameters = resolve_parameters(&input.raw_params, &input.json_params)?;
    let secrets = resolve_secrets(&input.raw_secrets)?;

    trace!(
        instance = %instance_name,
        structured = parameters.as_structured().is_some(),
        secrets = secrets.len(),
        "validated provision input"
    );

    Ok(ProvisionRequest::new(
        input.namespace.as_str(),
        instance_name,
        input.class_name.as_str(),
        input.plan_name.as_str(),
        parameters,
        secrets,
    )?)
}

/// Extract the single positional instance name
pub fn instance_name(args: &[String]) -> Result<&str> {
    match args {
        [] => Err(Error::Usage {
            reason: "an instance name is required".into(),
        }),
        [name] => Ok(name.as_str()),
        [_, extra @ ..] => Err(Error::Usage {
            reason: format!(
                "only one instance name may be given, got unexpected argument(s): {}",
                extra.join(" ")
            ),
        }),
    }
}

/// Resolve `--param` entries or `--params-json` text into a payload
///
/// Supplying both is a usage error, reported before either is parsed.
/// Supplying neither yields an empty flat payload.
pub fn resolve_parameters<S: AsRef<str>>(
    raw_params: &[S],
    json_params: &str,
) -> Result<ParameterPayload> {
    if !json_params.is_empty() && !raw_params.is_empty() {
        return Err(Error::Usage {
            reason: format!("{} cannot be used with {}", FLAG_PARAMS_JSON, FLAG_PARAM),
        });
    }

    if !json_params.is_empty() {
        let value = parse_variable_json(json_params).map_err(|source| Error::InvalidParam {
            flag: FLAG_PARAMS_JSON,
            source,
        })?;
        Ok(ParameterPayload::Structured(value))
    } else {
        let pairs = parse_variable_assignments(raw_params).map_err(|source| {
            Error::InvalidParam {
                flag: FLAG_PARAM,
                source,
            }
        })?;
        Ok(ParameterPayload::Flat(pairs))
    }
}

/// Resolve `--secret` entries into secret references
pub fn resolve_secrets<S: AsRef<str>>(raw_secrets: &[S]) -> Result<SecretRefs> {
    parse_key_maps(raw_secrets).map_err(|source| Error::InvalidParam {
        flag: FLAG_SECRET,
        source,
    })
}
