//! Key handling for the chat screen
//!
//! Keys are resolved against the focused control. Selector changes and
//! submissions go through the action dispatcher; text edits are applied to
//! the input widget directly.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input as TAInput;

use crate::core::app::{App, AppAction, AppActionDispatcher, UiFocus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Exit,
    Handled,
    NotHandled,
}

pub fn handle_key_event(
    app: &mut App,
    dispatcher: &AppActionDispatcher,
    key: &KeyEvent,
) -> KeyResult {
    if is_exit_key(key) {
        return KeyResult::Exit;
    }

    match key.code {
        KeyCode::Tab if key.modifiers.is_empty() => {
            dispatcher.dispatch(AppAction::FocusNext);
            return KeyResult::Handled;
        }
        KeyCode::BackTab => {
            dispatcher.dispatch(AppAction::FocusPrevious);
            return KeyResult::Handled;
        }
        _ => {}
    }

    match app.ui.focus {
        UiFocus::Provider => handle_selector_key(key, |forward| AppAction::CycleProvider { forward }, dispatcher),
        UiFocus::Model => handle_selector_key(key, |forward| AppAction::CycleModel { forward }, dispatcher),
        UiFocus::Input => handle_input_key(app, dispatcher, key),
    }
}

fn is_exit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_selector_key<F>(key: &KeyEvent, make_action: F, dispatcher: &AppActionDispatcher) -> KeyResult
where
    F: Fn(bool) -> AppAction,
{
    let forward = match key.code {
        KeyCode::Left | KeyCode::Up => false,
        KeyCode::Right | KeyCode::Down => true,
        _ => return KeyResult::NotHandled,
    };
    dispatcher.dispatch(make_action(forward));
    KeyResult::Handled
}

fn handle_input_key(app: &mut App, dispatcher: &AppActionDispatcher, key: &KeyEvent) -> KeyResult {
    // Input field and send control are disabled until the reply arrives
    if !app.input_enabled() {
        return if key.code == KeyCode::Enter {
            KeyResult::Handled
        } else {
            KeyResult::NotHandled
        };
    }

    if key.code == KeyCode::Enter {
        if key.modifiers.contains(KeyModifiers::ALT) {
            app.ui.apply_textarea_edit(|ta| {
                ta.insert_newline();
                true
            });
            app.sync_draft_from_input();
        } else {
            submit_input(app, dispatcher);
        }
        return KeyResult::Handled;
    }

    let changed = app
        .ui
        .apply_textarea_edit(|ta| ta.input(TAInput::from(*key)));
    if changed {
        app.sync_draft_from_input();
    }
    KeyResult::Handled
}

/// Capture the input text as it is now. Keys that follow Enter edit a fresh
/// draft, even before the submission is applied.
fn submit_input(app: &mut App, dispatcher: &AppActionDispatcher) {
    let text = app.ui.get_input_text();
    if text.trim().is_empty() {
        return;
    }
    app.ui.clear_input();
    app.sync_draft_from_input();
    dispatcher.dispatch(AppAction::SubmitInput { text });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::create_test_app;
    use tokio::sync::mpsc;

    fn dispatcher() -> (AppActionDispatcher, mpsc::UnboundedReceiver<AppAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AppActionDispatcher::new(tx), rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_and_escape_exit() {
        let mut app = create_test_app();
        let (dispatcher, _rx) = dispatcher();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&mut app, &dispatcher, &ctrl_c), KeyResult::Exit);
        assert_eq!(
            handle_key_event(&mut app, &dispatcher, &key(KeyCode::Esc)),
            KeyResult::Exit
        );
    }

    #[test]
    fn typing_updates_draft() {
        let mut app = create_test_app();
        let (dispatcher, mut rx) = dispatcher();

        for ch in "Hi".chars() {
            handle_key_event(&mut app, &dispatcher, &key(KeyCode::Char(ch)));
        }

        assert_eq!(app.session.pending_input(), "Hi");
        assert!(rx.try_recv().is_err(), "edits are applied directly");
    }

    #[test]
    fn enter_dispatches_submit() {
        let mut app = create_test_app();
        let (dispatcher, mut rx) = dispatcher();
        app.ui.set_input_text("Hello");
        app.sync_draft_from_input();

        let result = handle_key_event(&mut app, &dispatcher, &key(KeyCode::Enter));

        assert_eq!(result, KeyResult::Handled);
        match rx.try_recv() {
            Ok(AppAction::SubmitInput { text }) => assert_eq!(text, "Hello"),
            _ => panic!("expected a captured submission"),
        }
        assert_eq!(app.ui.get_input_text(), "");
        assert_eq!(app.session.pending_input(), "");
    }

    #[test]
    fn enter_on_blank_input_sends_nothing() {
        let mut app = create_test_app();
        let (dispatcher, mut rx) = dispatcher();
        app.ui.set_input_text("   ");
        app.sync_draft_from_input();

        handle_key_event(&mut app, &dispatcher, &key(KeyCode::Enter));

        assert!(rx.try_recv().is_err());
        assert_eq!(app.ui.get_input_text(), "   ");
    }

    #[test]
    fn alt_enter_inserts_newline() {
        let mut app = create_test_app();
        let (dispatcher, mut rx) = dispatcher();
        app.ui.set_input_text("one");

        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        handle_key_event(&mut app, &dispatcher, &alt_enter);
        handle_key_event(&mut app, &dispatcher, &key(KeyCode::Char('2')));

        assert_eq!(app.session.pending_input(), "one\n2");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn input_and_submit_are_disabled_while_loading() {
        let mut app = create_test_app();
        let (dispatcher, mut rx) = dispatcher();
        app.session.update_draft("Hello");
        app.session.submit().expect("request");

        assert_eq!(
            handle_key_event(&mut app, &dispatcher, &key(KeyCode::Char('x'))),
            KeyResult::NotHandled
        );
        assert_eq!(
            handle_key_event(&mut app, &dispatcher, &key(KeyCode::Enter)),
            KeyResult::Handled
        );
        assert!(rx.try_recv().is_err());
        assert_eq!(app.ui.get_input_text(), "");
    }

    #[test]
    fn selectors_stay_usable_while_loading() {
        let mut app = create_test_app();
        let (dispatcher, mut rx) = dispatcher();
        app.session.update_draft("Hello");
        app.session.submit().expect("request");
        app.ui.focus = UiFocus::Provider;

        let result = handle_key_event(&mut app, &dispatcher, &key(KeyCode::Right));

        assert_eq!(result, KeyResult::Handled);
        assert!(matches!(
            rx.try_recv(),
            Ok(AppAction::CycleProvider { forward: true })
        ));
    }

    #[test]
    fn model_selector_uses_arrows() {
        let mut app = create_test_app();
        let (dispatcher, mut rx) = dispatcher();
        app.ui.focus = UiFocus::Model;

        handle_key_event(&mut app, &dispatcher, &key(KeyCode::Up));
        assert!(matches!(
            rx.try_recv(),
            Ok(AppAction::CycleModel { forward: false })
        ));
        assert_eq!(
            handle_key_event(&mut app, &dispatcher, &key(KeyCode::Char('a'))),
            KeyResult::NotHandled
        );
    }

    #[test]
    fn tab_moves_focus() {
        let mut app = create_test_app();
        let (dispatcher, mut rx) = dispatcher();

        handle_key_event(&mut app, &dispatcher, &key(KeyCode::Tab));
        handle_key_event(&mut app, &dispatcher, &key(KeyCode::BackTab));

        assert!(matches!(rx.try_recv(), Ok(AppAction::FocusNext)));
        assert!(matches!(rx.try_recv(), Ok(AppAction::FocusPrevious)));
    }
}
