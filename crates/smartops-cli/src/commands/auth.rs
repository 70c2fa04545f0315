use anyhow::{bail, Result};
use serde_json::json;
use smartops_application::{FeatureGate, Route};

use super::utils::{mask_token, print_json};
use super::GlobalOptions;

pub async fn login(options: &GlobalOptions, email: &str, password: &str) -> Result<()> {
    let app = options.open_app().await?;

    match app.auth.login(email, password).await {
        Ok(response) => {
            println!(
                "Logged in as {} <{}> ({})",
                response.user.display_name(),
                response.user.email,
                response.user.role
            );
            Ok(())
        }
        Err(err) => bail!("{}", err.user_message()),
    }
}

pub async fn logout(options: &GlobalOptions) -> Result<()> {
    let app = options.open_app().await?;
    app.auth.logout().await;
    println!("Logged out");
    Ok(())
}

pub async fn status(options: &GlobalOptions) -> Result<()> {
    let app = options.open_app().await?;
    let session = app.auth.session();

    let mut summary = session.summary();
    summary["route"] = json!(Route::for_session(&session));
    summary["access"] = json!(FeatureGate::default().check(&session));
    summary["token"] = json!(session.token().map(mask_token));

    print_json(&summary)
}
