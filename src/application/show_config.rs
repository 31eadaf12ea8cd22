//! Config dump use case

use crate::error::Result;
use crate::infrastructure::{Config, ConfigSource};

/// Render the effective configuration as TOML plus a source comment
pub fn render(config: &Config, source: &ConfigSource) -> Result<String> {
    let mut output = config.to_toml()?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output.push_str(&format!("# source: {}\n", source));
    Ok(output)
}
