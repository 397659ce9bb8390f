use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Table};
use registry_connect::registry::{redact_password, redact_password_str, ConnectedRegistries};
use registry_connect::wizard::terminal::TerminalInputBox;
use registry_connect::wizard::{
    check_url, GenericRegistryV2Context, PromptStep, RegistryUrlPromptStep, WizardError,
};
use tracing::info;

use super::Session;

/// Connect a registry, prompting for its URL unless `url` is given
pub async fn handle_connect(session: Session, url: Option<&str>) -> Result<()> {
    let step = RegistryUrlPromptStep::new(Arc::new(TerminalInputBox::stdio()));
    connect_with_step(session, url, &step).await
}

async fn connect_with_step(
    mut session: Session,
    url: Option<&str>,
    step: &RegistryUrlPromptStep,
) -> Result<()> {
    let mut context = session.context();

    if let Some(url) = url {
        let parsed = check_url(url, &context, session.parser.as_ref())
            .map_err(|e| anyhow!(e.localize(session.localizer.as_ref())))?;
        let url = parsed
            .into_complete_url()
            .context("Please enter a valid URL")?;
        context.set_registry_uri(url);
    }

    if step.should_prompt(&context) {
        match step.prompt(&mut context).await {
            Ok(()) => {}
            Err(WizardError::Cancelled) => {
                println!("Cancelled, no registry was connected.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }

    let Some(url) = context.registry_uri() else {
        bail!("No registry URL to connect");
    };

    session.config.add_registry(session.parser.as_ref(), url);
    session.save()?;

    let shown = redact_password(url);
    info!("Saved registry {}", shown);
    println!("✓ Connected registry {}", shown);

    Ok(())
}

/// Table of connected registries, or `None` when there are none
fn registry_table(registries: &ConnectedRegistries) -> Option<Table> {
    if registries.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![Cell::new("REGISTRY").add_attribute(Attribute::Bold)]);

    for registry in registries.iter() {
        table.add_row(vec![Cell::new(redact_password_str(registry))]);
    }

    Some(table)
}

/// List connected registries
pub fn handle_list(session: &Session) -> Result<()> {
    let registries = session.config.connected(session.parser.as_ref());

    match registry_table(&registries) {
        Some(table) => println!("{}", table),
        None => println!("No registries connected."),
    }

    Ok(())
}

/// Disconnect a registry
pub fn handle_disconnect(mut session: Session, url: &str) -> Result<()> {
    let uri = session
        .parser
        .parse(url)
        .with_context(|| format!("Invalid registry URL '{}'", url))?;

    let shown = redact_password_str(&uri.normalized());
    if !session.config.remove_registry(session.parser.as_ref(), &uri) {
        bail!("Registry {} is not connected", shown);
    }
    session.save()?;

    println!("✓ Disconnected registry {}", shown);
    Ok(())
}

/// Check whether `url` would be accepted by the connect wizard.
///
/// A rejected URL is returned as an error carrying the localized message.
pub fn handle_check(session: &Session, url: &str) -> Result<()> {
    let context = session.context();

    let parsed = check_url(url, &context, session.parser.as_ref())
        .map_err(|e| anyhow!(e.localize(session.localizer.as_ref())))?;

    println!("OK: {}", redact_password_str(&parsed.to_string()));
    Ok(())
}
