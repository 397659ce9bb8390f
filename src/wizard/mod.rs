pub mod context;
pub mod input;
pub mod registry_url_step;
#[cfg(feature = "cli")]
pub mod terminal;

pub use context::{ConnectRegistryContext, GenericRegistryV2Context, RegistryWizardContext};
pub use input::{InputBox, InputBoxOptions, InputError};
pub use registry_url_step::{check_url, RegistryUrlPromptStep, UrlValidationError};

use async_trait::async_trait;

/// Error returned by a wizard step that did not complete
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// The user dismissed the prompt; the wizard should stop
    #[error("Operation cancelled by user")]
    Cancelled,
    /// The input box returned a value that does not pass validation
    #[error("Rejected input: {0}")]
    Rejected(#[from] UrlValidationError),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// A single step of a wizard.
///
/// The wizard engine calls `should_prompt` to decide whether the step is
/// needed, then `prompt` to run it. Steps run one at a time against the same
/// context.
#[async_trait]
pub trait PromptStep<T: Send + Sync>: Send + Sync {
    fn should_prompt(&self, context: &T) -> bool;

    async fn prompt(&self, context: &mut T) -> Result<(), WizardError>;
}
