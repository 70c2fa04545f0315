use anyhow::{bail, Result};
use serde::Serialize;
use smartops_application::FetchState;

use super::utils::print_json;
use super::GlobalOptions;

/// Prints a loaded value, or fails with the screen message and a retry hint.
fn finish<T: Serialize>(state: FetchState<T>) -> Result<()> {
    match state {
        FetchState::Loaded(value) => print_json(&value),
        FetchState::Failed {
            message,
            retry_available,
        } => {
            if retry_available {
                bail!("{} (retry available)", message)
            }
            bail!("{}", message)
        }
        FetchState::Loading => bail!("Request did not complete"),
    }
}

pub async fn list_clients(options: &GlobalOptions) -> Result<()> {
    let app = options.open_app().await?;
    finish(app.catalog.load_clients().await)
}

pub async fn show_client(options: &GlobalOptions, id: u64) -> Result<()> {
    let app = options.open_app().await?;
    finish(app.catalog.load_client(id).await)
}

pub async fn list_products(options: &GlobalOptions) -> Result<()> {
    let app = options.open_app().await?;
    finish(app.catalog.load_products().await)
}

pub async fn show_product(options: &GlobalOptions, id: u64) -> Result<()> {
    let app = options.open_app().await?;
    finish(app.catalog.load_product(id).await)
}
