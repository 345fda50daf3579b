use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::keybindings::{handle_key_event, KeyResult};
use super::lifecycle::{restore_terminal, setup_terminal, SharedTerminal};
use super::AppHandle;
use crate::core::app::{apply_actions, App, AppAction, AppActionDispatcher, AppCommand};
use crate::core::generate::{GenerateEvent, GenerateService};
use crate::ui::renderer::ui;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

struct EventProcessingOutcome {
    events_processed: bool,
    request_redraw: bool,
    exit_requested: bool,
}

pub(crate) fn sanitize_pasted_text(text: &str) -> String {
    let without_crlf = text.replace("\r\n", "\n");
    let without_cr = without_crlf.replace('\r', "\n");
    let expanded_tabs = without_cr.replace('\t', "    ");
    expanded_tabs
        .chars()
        .filter(|&c| c == '\n' || !c.is_control())
        .collect()
}

async fn process_ui_events(
    app: &AppHandle,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    dispatcher: &AppActionDispatcher,
) -> EventProcessingOutcome {
    let mut outcome = EventProcessingOutcome {
        events_processed: false,
        request_redraw: false,
        exit_requested: false,
    };

    while let Ok(ev) = event_rx.try_recv() {
        outcome.events_processed = true;
        match ev {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let result = app
                    .update(|app| handle_key_event(app, dispatcher, &key))
                    .await;
                match result {
                    KeyResult::Exit => {
                        outcome.exit_requested = true;
                        break;
                    }
                    KeyResult::Handled => outcome.request_redraw = true,
                    KeyResult::NotHandled => {}
                }
            }
            UiEvent::Crossterm(Event::Paste(text)) => {
                let sanitized = sanitize_pasted_text(&text);
                if !sanitized.is_empty() {
                    dispatcher.dispatch(AppAction::InsertIntoInput { text: sanitized });
                }
                outcome.request_redraw = true;
            }
            UiEvent::Crossterm(Event::Resize(_, _)) => {
                outcome.request_redraw = true;
            }
            UiEvent::Crossterm(_) => {}
        }
    }

    outcome
}

fn process_generate_updates(
    dispatcher: &AppActionDispatcher,
    rx: &mut mpsc::UnboundedReceiver<(GenerateEvent, u64)>,
) -> bool {
    let mut received_any = false;
    while let Ok((event, request_id)) = rx.try_recv() {
        received_any = true;
        let action = match event {
            GenerateEvent::Completed(output) => AppAction::GenerateCompleted { request_id, output },
            GenerateEvent::Failed(message) => AppAction::GenerateFailed {
                request_id,
                message,
            },
        };
        dispatcher.dispatch(action);
    }
    received_any
}

async fn drain_action_queue(
    app: &AppHandle,
    service: &GenerateService,
    action_rx: &mut mpsc::UnboundedReceiver<AppAction>,
) -> bool {
    let mut pending = Vec::new();
    while let Ok(action) = action_rx.try_recv() {
        pending.push(action);
    }

    if pending.is_empty() {
        return false;
    }

    let commands = app.update(|app| apply_actions(app, pending)).await;
    for cmd in commands {
        match cmd {
            AppCommand::SendGenerate(params) => {
                debug!(
                    request_id = params.request.request_id,
                    provider = %params.request.provider,
                    model = %params.request.model,
                    "submitting generate request"
                );
                service.spawn_request(params);
            }
        }
    }
    true
}

async fn try_draw_frame(
    app: &AppHandle,
    terminal: &SharedTerminal,
    request_redraw: &mut bool,
    last_draw: &mut Instant,
    frame_duration: Duration,
) -> io::Result<()> {
    if !*request_redraw {
        return Ok(());
    }

    let now = Instant::now();
    if now.duration_since(*last_draw) < frame_duration {
        return Ok(());
    }

    let app_guard = app.lock().await;
    let mut terminal_guard = terminal.lock().await;
    terminal_guard.draw(|f| ui(f, &app_guard))?;
    *last_draw = now;
    *request_redraw = false;
    Ok(())
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => continue,
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

pub async fn run_chat(app: App) -> Result<(), Box<dyn Error>> {
    let app = AppHandle::new(app);
    let terminal = setup_terminal()?;

    let result = run_main_loop(&app, &terminal).await;
    let restored = restore_terminal(&terminal).await;

    let (message_count, pending) = app
        .read(|app| (app.session.messages().len(), app.session.in_flight_count()))
        .await;
    info!(message_count, pending, "chat session ended");

    result?;
    restored
}

async fn run_main_loop(app: &AppHandle, terminal: &SharedTerminal) -> Result<(), Box<dyn Error>> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppAction>();
    let dispatcher = AppActionDispatcher::new(action_tx);

    let (service, mut generate_rx) = GenerateService::new();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    const MAX_FPS: u64 = 60;
    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw = Instant::now() - frame_duration;
    let mut request_redraw = true;
    let mut loading_visible = false;

    let result = loop {
        if app.read(|app| app.ui.exit_requested).await {
            break Ok(());
        }

        if let Err(err) = try_draw_frame(
            app,
            terminal,
            &mut request_redraw,
            &mut last_draw,
            frame_duration,
        )
        .await
        {
            break Err(err.into());
        }

        let event_outcome = process_ui_events(app, &mut event_rx, &dispatcher).await;
        if event_outcome.exit_requested {
            break Ok(());
        }
        if event_outcome.request_redraw {
            request_redraw = true;
        }

        let received_any = process_generate_updates(&dispatcher, &mut generate_rx);
        if received_any {
            request_redraw = true;
        }

        if drain_action_queue(app, &service, &mut action_rx).await {
            request_redraw = true;
        }

        let loading_now = app.read(|app| app.session.is_loading()).await;
        if loading_now != loading_visible {
            loading_visible = loading_now;
            request_redraw = true;
        }

        let idle = !event_outcome.events_processed && !received_any && !request_redraw;
        if idle {
            tokio::time::sleep(Duration::from_millis(16)).await; // ~60 FPS when idle
        }
    };

    event_reader_handle.abort();
    result
}
