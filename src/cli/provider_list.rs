use unicode_width::UnicodeWidthStr;

use crate::core::builtin_providers::{builtin_providers, default_provider, BuiltinProvider};

/// Render the provider catalog as an aligned table. The provider selected at
/// startup is marked with `*`.
pub fn format_provider_table() -> String {
    format_table(builtin_providers(), &default_provider().id)
}

fn format_table(providers: &[BuiltinProvider], default_id: &str) -> String {
    let id_cells: Vec<String> = providers
        .iter()
        .map(|p| {
            if p.id == default_id {
                format!("{}*", p.id)
            } else {
                p.id.clone()
            }
        })
        .collect();

    let id_width = id_cells
        .iter()
        .map(|cell| cell.width())
        .chain(std::iter::once("Provider".width()))
        .max()
        .unwrap_or(0);
    let name_width = providers
        .iter()
        .map(|p| p.display_name.width())
        .chain(std::iter::once("Name".width()))
        .max()
        .unwrap_or(0);

    let mut out = String::from("Available providers:\n\n");
    out.push_str(&row("Provider", id_width, "Name", name_width, "Models"));
    for (provider, id_cell) in providers.iter().zip(&id_cells) {
        out.push_str(&row(
            id_cell,
            id_width,
            &provider.display_name,
            name_width,
            &provider.models.join(", "),
        ));
    }
    out.push_str("\n* = selected at startup\n");
    out
}

fn row(id: &str, id_width: usize, name: &str, name_width: usize, models: &str) -> String {
    format!(
        "  {}{}  {}{}  {}\n",
        id,
        " ".repeat(id_width.saturating_sub(id.width())),
        name,
        " ".repeat(name_width.saturating_sub(name.width())),
        models
    )
}

pub fn list_providers() {
    print!("{}", format_provider_table());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_provider_with_models() {
        let table = format_provider_table();
        assert!(table.starts_with("Available providers:\n"));
        assert!(table.contains("openai*"));
        assert!(table.contains("Google Gemini"));
        assert!(table.contains("claude-3-opus-20240229, claude-3-sonnet-20240229"));
        assert!(table.contains("deepseek-r1:1.5b"));
    }

    #[test]
    fn columns_are_aligned() {
        let providers = vec![
            BuiltinProvider {
                id: "a".into(),
                display_name: "Alpha".into(),
                models: vec!["m1".into()],
            },
            BuiltinProvider {
                id: "longer-id".into(),
                display_name: "B".into(),
                models: vec!["m2".into(), "m3".into()],
            },
        ];

        let table = format_table(&providers, "a");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[2], "  Provider   Name   Models");
        assert_eq!(lines[3], "  a*         Alpha  m1");
        assert_eq!(lines[4], "  longer-id  B      m2, m3");
    }
}
