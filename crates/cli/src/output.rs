//! Instance rendering.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Deserialize;
use svcat_core::ServiceInstance;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable key/value listing
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Write an instance in the requested format
pub fn write_instance(
    w: &mut impl Write,
    instance: &ServiceInstance,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_instance_details(w, instance)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, instance)?;
            writeln!(w)?;
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *w, instance)?;
        }
    }
    Ok(())
}

/// Key/value listing of an instance followed by its parameters and secrets
pub fn write_instance_details(
    w: &mut impl Write,
    instance: &ServiceInstance,
) -> std::io::Result<()> {
    let rows = [
        ("Name:", instance.name()),
        ("Namespace:", instance.namespace()),
        ("Status:", instance.status_summary()),
        ("Class:", instance.spec.cluster_service_class_external_name.as_str()),
        ("Plan:", instance.spec.cluster_service_plan_external_name.as_str()),
    ];
    for (label, value) in rows {
        writeln!(w, "  {:<12}{}", label, value)?;
    }

    writeln!(w)?;
    writeln!(w, "Parameters:")?;
    write_parameters(w, instance.spec.parameters.as_ref())?;

    if !instance.spec.parameters_from.is_empty() {
        writeln!(w)?;
        writeln!(w, "Secrets:")?;
        for source in &instance.spec.parameters_from {
            let r = &source.secret_key_ref;
            writeln!(w, "  {}[{}]", r.name, r.key)?;
        }
    }
    Ok(())
}

fn write_parameters(w: &mut impl Write, parameters: Option<&serde_json::Value>) -> std::io::Result<()> {
    let Some(value) = parameters else {
        return writeln!(w, "  No parameters defined");
    };

    // Flat string maps print one pair per line; anything else as indented JSON.
    if let Some(map) = value.as_object() {
        if map.values().all(serde_json::Value::is_string) {
            if map.is_empty() {
                return writeln!(w, "  No parameters defined");
            }
            for (name, v) in map {
                writeln!(w, "  {}: {}", name, v.as_str().unwrap_or_default())?;
            }
            return Ok(());
        }
    }

    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    for line in pretty.lines() {
        writeln!(w, "  {}", line)?;
    }
    Ok(())
}
