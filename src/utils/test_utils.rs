#[cfg(test)]
use crate::core::app::{App, AppInitConfig};
#[cfg(test)]
use crate::ui::theme::Theme;

/// An app on the default provider pointed at a port nothing listens on.
#[cfg(test)]
pub fn create_test_app() -> App {
    App::new(
        AppInitConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            provider: None,
            model: None,
        },
        Theme::dark_default(),
    )
}
