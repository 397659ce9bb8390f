use url::Url;

use crate::registry::ConnectedRegistries;

/// Base capability shared by every registry wizard context
pub trait RegistryWizardContext: Send + Sync {
    /// Heading for prompts shown while this wizard runs
    fn wizard_title(&self) -> Option<&str> {
        None
    }
}

/// Fields read and written by the generic V2 registry URL step
pub trait GenericRegistryV2Context: RegistryWizardContext {
    /// Question shown to the user. An empty prompt means the step is not needed.
    fn registry_prompt(&self) -> &str;

    fn connected_registries(&self) -> &ConnectedRegistries;

    fn registry_prompt_placeholder(&self) -> Option<&str>;

    /// The resolved registry URL, if any step already set it
    fn registry_uri(&self) -> Option<&Url>;

    fn set_registry_uri(&mut self, uri: Url);
}

/// Context for connecting a single registry from the command line
#[derive(Debug, Clone, Default)]
pub struct ConnectRegistryContext {
    pub title: Option<String>,
    pub registry_prompt: String,
    pub connected_registries: ConnectedRegistries,
    pub registry_prompt_placeholder: Option<String>,
    pub registry_uri: Option<Url>,
}

impl ConnectRegistryContext {
    pub fn new(
        registry_prompt: impl Into<String>,
        connected_registries: ConnectedRegistries,
    ) -> Self {
        Self {
            registry_prompt: registry_prompt.into(),
            connected_registries,
            ..Default::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.registry_prompt_placeholder = Some(placeholder.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl RegistryWizardContext for ConnectRegistryContext {
    fn wizard_title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl GenericRegistryV2Context for ConnectRegistryContext {
    fn registry_prompt(&self) -> &str {
        &self.registry_prompt
    }

    fn connected_registries(&self) -> &ConnectedRegistries {
        &self.connected_registries
    }

    fn registry_prompt_placeholder(&self) -> Option<&str> {
        self.registry_prompt_placeholder.as_deref()
    }

    fn registry_uri(&self) -> Option<&Url> {
        self.registry_uri.as_ref()
    }

    fn set_registry_uri(&mut self, uri: Url) {
        self.registry_uri = Some(uri);
    }
}
