use anyhow::Result;
use serde_json::json;

use super::utils::print_json;
use super::GlobalOptions;

pub fn show(options: &GlobalOptions) -> Result<()> {
    let config = options.resolve_config()?;
    let endpoints = config.endpoints()?;

    print_json(&json!({
        "environment": config.environment,
        "request_timeout_secs": config.request_timeout_secs,
        "endpoints": endpoints,
    }))
}
