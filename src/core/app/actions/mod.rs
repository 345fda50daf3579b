mod generation;
mod input;
mod selection;

use tokio::sync::mpsc;

use super::App;
use crate::core::generate::GenerateParams;

pub enum AppAction {
    SelectProvider { provider_id: String },
    SelectModel { model: String },
    CycleProvider { forward: bool },
    CycleModel { forward: bool },
    FocusNext,
    FocusPrevious,
    UpdateDraft { text: String },
    InsertIntoInput { text: String },
    SubmitDraft,
    SubmitInput { text: String },
    GenerateCompleted { request_id: u64, output: String },
    GenerateFailed { request_id: u64, message: String },
    Quit,
}

#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppAction>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppAction>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: AppAction) {
        let _ = self.tx.send(action);
    }
}

/// Side effects requested by the reducer, carried out by the event loop.
pub enum AppCommand {
    SendGenerate(GenerateParams),
}

pub fn apply_actions(app: &mut App, actions: impl IntoIterator<Item = AppAction>) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    for action in actions {
        if let Some(cmd) = apply_action(app, action) {
            commands.push(cmd);
        }
    }
    commands
}

pub fn apply_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SelectProvider { .. }
        | AppAction::SelectModel { .. }
        | AppAction::CycleProvider { .. }
        | AppAction::CycleModel { .. } => selection::handle_selection_action(app, action),

        AppAction::FocusNext
        | AppAction::FocusPrevious
        | AppAction::UpdateDraft { .. }
        | AppAction::InsertIntoInput { .. }
        | AppAction::Quit => input::handle_input_action(app, action),

        AppAction::SubmitDraft
        | AppAction::SubmitInput { .. }
        | AppAction::GenerateCompleted { .. }
        | AppAction::GenerateFailed { .. } => generation::handle_generation_action(app, action),
    }
}
