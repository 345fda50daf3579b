//! TUI-less "say" command

use std::error::Error;

use crate::api::generate::GENERIC_ERROR_MESSAGE;
use crate::core::app::{apply_action, App, AppAction, AppCommand};
use crate::core::generate::{GenerateEvent, GenerateService};

/// Submit one prompt through the session and wait for its outcome.
///
/// Returns the assistant reply, or the session's error text on failure.
pub(crate) async fn say_once(app: &mut App, prompt: String) -> Result<String, String> {
    apply_action(app, AppAction::UpdateDraft { text: prompt });
    let params = match apply_action(app, AppAction::SubmitDraft) {
        Some(AppCommand::SendGenerate(params)) => params,
        None => return Err("Nothing to send".to_string()),
    };
    let request_id = params.request.request_id;

    let (service, mut rx) = GenerateService::new();
    service.spawn_request(params);

    let action = match rx.recv().await {
        Some((GenerateEvent::Completed(output), id)) => AppAction::GenerateCompleted {
            request_id: id,
            output,
        },
        Some((GenerateEvent::Failed(message), id)) => AppAction::GenerateFailed {
            request_id: id,
            message,
        },
        None => AppAction::GenerateFailed {
            request_id,
            message: GENERIC_ERROR_MESSAGE.to_string(),
        },
    };
    apply_action(app, action);

    if let Some(err) = app.session.last_error() {
        return Err(err.to_string());
    }
    app.session
        .messages()
        .last()
        .map(|message| message.content.clone())
        .ok_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

pub async fn run_say(prompt: Vec<String>, mut app: App) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: palaver say <prompt>");
        std::process::exit(1);
    }

    match say_once(&mut app, prompt).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ Error: {err}");
            std::process::exit(1);
        }
    }
}
