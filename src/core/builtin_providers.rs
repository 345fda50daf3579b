//! Built-in provider catalog
//!
//! The selectable providers and their models ship with the binary in
//! `builtins/providers.toml`. The file is parsed once, on first access, into
//! an immutable table that lives for the rest of the process.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinProvider {
    pub id: String,
    pub display_name: String,
    pub models: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct BuiltinProvidersConfig {
    providers: Vec<BuiltinProvider>,
}

impl BuiltinProvider {
    /// The model selected whenever this provider becomes active.
    pub fn first_model(&self) -> Option<&str> {
        self.models.first().map(String::as_str)
    }

    pub fn model_index(&self, model: &str) -> Option<usize> {
        self.models.iter().position(|m| m == model)
    }
}

/// All built-in providers, in display order.
pub fn builtin_providers() -> &'static [BuiltinProvider] {
    static PROVIDERS: OnceLock<Vec<BuiltinProvider>> = OnceLock::new();
    PROVIDERS.get_or_init(load_builtin_providers)
}

fn load_builtin_providers() -> Vec<BuiltinProvider> {
    const CONFIG_CONTENT: &str = include_str!("../builtins/providers.toml");

    let config: BuiltinProvidersConfig =
        toml::from_str(CONFIG_CONTENT).expect("Failed to parse builtins/providers.toml");

    config.providers
}

/// Find a built-in provider by its exact ID.
pub fn find_builtin_provider(id: &str) -> Option<&'static BuiltinProvider> {
    builtin_providers().iter().find(|p| p.id == id)
}

/// Position of a provider in the catalog, used by the selector widget.
pub fn provider_index(id: &str) -> Option<usize> {
    builtin_providers().iter().position(|p| p.id == id)
}

/// The provider selected when a session starts.
pub fn default_provider() -> &'static BuiltinProvider {
    builtin_providers()
        .first()
        .expect("builtins/providers.toml must list at least one provider")
}
