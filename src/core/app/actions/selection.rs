use super::{App, AppAction, AppCommand};
use crate::core::builtin_providers::{builtin_providers, provider_index};

pub(super) fn handle_selection_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SelectProvider { provider_id } => {
            app.session.select_provider(&provider_id);
        }
        AppAction::SelectModel { model } => app.session.select_model(model),
        AppAction::CycleProvider { forward } => cycle_provider(app, forward),
        AppAction::CycleModel { forward } => cycle_model(app, forward),
        _ => unreachable!("non-selection action routed to selection handler"),
    }
    None
}

fn step(index: Option<usize>, len: usize, forward: bool) -> usize {
    match (index, forward) {
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    }
}

fn cycle_provider(app: &mut App, forward: bool) {
    let providers = builtin_providers();
    if providers.is_empty() {
        return;
    }
    let current = provider_index(app.session.selected_provider_id());
    let next = step(current, providers.len(), forward);
    app.session.select_provider(&providers[next].id);
}

/// Move through the current provider's models. A model chosen outside the
/// list steps back onto the list's first (or last) entry.
fn cycle_model(app: &mut App, forward: bool) {
    let Some(provider) = app.session.selected_provider() else {
        return;
    };
    if provider.models.is_empty() {
        return;
    }
    let current = provider.model_index(app.session.selected_model());
    let next = step(current, provider.models.len(), forward);
    app.session.select_model(provider.models[next].clone());
}
