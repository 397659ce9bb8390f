// Wizard step asking for the URL of a generic V2 registry

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::context::GenericRegistryV2Context;
use super::input::{InputBox, InputBoxOptions};
use super::{PromptStep, WizardError};
use crate::l10n::{Localizer, TemplateLocalizer};
use crate::registry::{redact_password, ParsedUri, StandardUriParser, UriParser};

const EMPTY_URL: &str = "URL cannot be empty.";
const INVALID_URL: &str = "Please enter a valid URL";
const ALREADY_CONNECTED: &str = "URL {0} is already connected.";

/// Reasons a registry URL is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL cannot be empty.")]
    EmptyInput,
    #[error("Please enter a valid URL")]
    MalformedUrl,
    #[error("URL {normalized} is already connected.")]
    DuplicateRegistry { normalized: String },
    /// Parsed, but scheme or authority is missing
    #[error("Please enter a valid URL")]
    IncompleteUrl,
}

impl UrlValidationError {
    /// Untranslated message template
    pub fn template(&self) -> &'static str {
        match self {
            UrlValidationError::EmptyInput => EMPTY_URL,
            UrlValidationError::MalformedUrl | UrlValidationError::IncompleteUrl => INVALID_URL,
            UrlValidationError::DuplicateRegistry { .. } => ALREADY_CONNECTED,
        }
    }

    /// Positional arguments for [`Self::template`]
    pub fn args(&self) -> Vec<&str> {
        match self {
            UrlValidationError::DuplicateRegistry { normalized } => vec![normalized.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn localize(&self, localizer: &dyn Localizer) -> String {
        localizer.translate(self.template(), &self.args())
    }
}

/// Validate a candidate registry URL against the context.
///
/// Checks run in order and stop at the first failure: empty input, parse
/// failure, already connected, missing scheme or authority.
pub fn check_url<T>(
    candidate: &str,
    context: &T,
    parser: &dyn UriParser,
) -> Result<ParsedUri, UrlValidationError>
where
    T: GenericRegistryV2Context + ?Sized,
{
    if candidate.is_empty() {
        return Err(UrlValidationError::EmptyInput);
    }

    let parsed = parser.parse(candidate).map_err(|e| {
        debug!("{}", e);
        UrlValidationError::MalformedUrl
    })?;

    if context.connected_registries().contains(&parsed) {
        return Err(UrlValidationError::DuplicateRegistry {
            normalized: parsed.normalized(),
        });
    }

    if !parsed.is_complete() {
        return Err(UrlValidationError::IncompleteUrl);
    }

    Ok(parsed)
}

/// Prompts for a registry URL and stores it in the wizard context
pub struct RegistryUrlPromptStep {
    input: Arc<dyn InputBox>,
    parser: Arc<dyn UriParser>,
    localizer: Arc<dyn Localizer>,
}

impl RegistryUrlPromptStep {
    pub fn new(input: Arc<dyn InputBox>) -> Self {
        Self {
            input,
            parser: Arc::new(StandardUriParser),
            localizer: Arc::new(TemplateLocalizer::new()),
        }
    }

    pub fn with_parser(mut self, parser: Arc<dyn UriParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = localizer;
        self
    }

    /// Localized validation message for `value`, or `None` if it is accepted
    pub fn validate_url<T>(&self, value: &str, context: &T) -> Option<String>
    where
        T: GenericRegistryV2Context + ?Sized,
    {
        check_url(value, context, self.parser.as_ref())
            .err()
            .map(|e| e.localize(self.localizer.as_ref()))
    }
}

#[async_trait]
impl<T> PromptStep<T> for RegistryUrlPromptStep
where
    T: GenericRegistryV2Context,
{
    fn should_prompt(&self, context: &T) -> bool {
        !context.registry_prompt().is_empty() && context.registry_uri().is_none()
    }

    async fn prompt(&self, context: &mut T) -> Result<(), WizardError> {
        let url = {
            let ctx: &T = &*context;
            let validate = |value: &str| self.validate_url(value, ctx);
            let options = InputBoxOptions {
                title: ctx.wizard_title(),
                is_secret: false,
                prompt: ctx.registry_prompt(),
                placeholder: ctx.registry_prompt_placeholder().unwrap_or(""),
                validate_input: Some(&validate),
            };

            debug!(
                "Prompting for registry URL ({} registries connected)",
                ctx.connected_registries().len()
            );

            let Some(value) = self.input.show(options).await? else {
                warn!("Registry URL prompt was cancelled");
                return Err(WizardError::Cancelled);
            };

            check_url(&value, ctx, self.parser.as_ref())?
                .into_complete_url()
                .ok_or(UrlValidationError::IncompleteUrl)?
        };

        info!("Resolved registry URL: {}", redact_password(&url));
        context.set_registry_uri(url);

        Ok(())
    }
}
