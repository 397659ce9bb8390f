// Localization of user-facing messages

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Translates a message template and fills in its positional arguments
pub trait Localizer: Send + Sync {
    fn translate(&self, template: &str, args: &[&str]) -> String;
}

/// Localizer backed by an optional l10n bundle.
///
/// A bundle is a JSON object mapping source templates to translated
/// templates, e.g. `{"URL cannot be empty.": "Die URL darf nicht leer sein."}`.
/// Templates missing from the bundle are used as-is. Placeholders `{0}`,
/// `{1}`, ... are replaced by the matching argument.
#[derive(Debug, Clone, Default)]
pub struct TemplateLocalizer {
    bundle: HashMap<String, String>,
}

impl TemplateLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle(bundle: HashMap<String, String>) -> Self {
        Self { bundle }
    }

    /// Load a bundle from a JSON file
    pub fn from_bundle_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read l10n bundle {}", path.display()))?;

        let bundle: HashMap<String, String> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse l10n bundle {}", path.display()))?;

        debug!(
            "Loaded {} translations from {}",
            bundle.len(),
            path.display()
        );

        Ok(Self { bundle })
    }
}

impl Localizer for TemplateLocalizer {
    fn translate(&self, template: &str, args: &[&str]) -> String {
        let template = self
            .bundle
            .get(template)
            .map(String::as_str)
            .unwrap_or(template);
        format_template(template, args)
    }
}

/// Replace `{N}` placeholders with `args[N]`. Unknown placeholders are left untouched.
fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((*arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
