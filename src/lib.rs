//! Wizard for connecting generic V2 container registries.
//!
//! The [`wizard::RegistryUrlPromptStep`] asks for a registry URL, rejects
//! empty, malformed, incomplete and already connected URLs, and stores the
//! result in a [`wizard::GenericRegistryV2Context`].

#[cfg(feature = "cli")]
pub mod config;
pub mod l10n;
pub mod registry;
pub mod wizard;
