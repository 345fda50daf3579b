use super::{App, AppAction, AppCommand};
use crate::core::generate::GenerateParams;
use crate::core::session::GenerateRequest;

pub(super) fn handle_generation_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SubmitDraft => submit_draft(app),
        AppAction::SubmitInput { text } => {
            let request = app.session.submit_captured(text)?;
            Some(send_command(app, request))
        }
        AppAction::GenerateCompleted { request_id, output } => {
            app.session.record_response(request_id, output);
            None
        }
        AppAction::GenerateFailed {
            request_id,
            message,
        } => {
            app.session.record_failure(request_id, message);
            None
        }
        _ => unreachable!("non-generation action routed to generation handler"),
    }
}

fn submit_draft(app: &mut App) -> Option<AppCommand> {
    let request = app.session.submit()?;
    app.ui.clear_input();
    Some(send_command(app, request))
}

fn send_command(app: &App, request: GenerateRequest) -> AppCommand {
    AppCommand::SendGenerate(GenerateParams {
        client: app.client.clone(),
        base_url: app.api_base_url.clone(),
        request,
    })
}
