pub mod registry;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use registry_connect::config::Config;
use registry_connect::l10n::{Localizer, TemplateLocalizer};
use registry_connect::registry::{StandardUriParser, UriParser};
use registry_connect::wizard::ConnectRegistryContext;

/// Everything a command needs: loaded config and the shared collaborators
pub struct Session {
    pub config: Config,
    config_path: PathBuf,
    pub parser: Arc<dyn UriParser>,
    pub localizer: Arc<dyn Localizer>,
}

impl Session {
    pub fn open(config_path: Option<PathBuf>, l10n_bundle: Option<&Path>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Config::config_path()?,
        };
        let config = Config::load_from(&config_path)?;

        let localizer = match l10n_bundle {
            Some(path) => TemplateLocalizer::from_bundle_file(path)?,
            None => TemplateLocalizer::new(),
        };

        Ok(Self {
            config,
            config_path,
            parser: Arc::new(StandardUriParser),
            localizer: Arc::new(localizer),
        })
    }

    pub fn save(&self) -> Result<()> {
        self.config.save_to(&self.config_path)
    }

    /// Fresh wizard context seeded from the config
    pub fn context(&self) -> ConnectRegistryContext {
        ConnectRegistryContext::new(
            self.config.get_registry_prompt(),
            self.config.connected(self.parser.as_ref()),
        )
        .with_title("Connect Registry")
        .with_placeholder(self.config.get_registry_prompt_placeholder())
    }
}
