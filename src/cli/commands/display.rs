//! Rendering of resolved values.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::value::Value;

/// Render a value for printing.
///
/// YAML output has its trailing newline removed so scalars print as a
/// single bare line.
pub fn render_value(value: &Value, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map_err(anyhow::Error::from)?
            .trim_end()
            .to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?,
    };
    Ok(rendered)
}
