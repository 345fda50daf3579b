use super::{App, AppAction, AppCommand};

pub(super) fn handle_input_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::FocusNext => app.ui.focus_next(),
        AppAction::FocusPrevious => app.ui.focus_previous(),
        AppAction::UpdateDraft { text } => {
            app.ui.set_input_text(&text);
            app.session.update_draft(text);
        }
        AppAction::InsertIntoInput { text } => insert_into_input(app, &text),
        AppAction::Quit => app.ui.exit_requested = true,
        _ => unreachable!("non-input action routed to input handler"),
    }
    None
}

fn insert_into_input(app: &mut App, text: &str) {
    if !app.input_enabled() || text.is_empty() {
        return;
    }
    app.ui.focus_input();
    let changed = app.ui.apply_textarea_edit(|ta| ta.insert_str(text));
    if changed {
        app.sync_draft_from_input();
    }
}

#[cfg(test)]
mod tests {
    use super::super::apply_action;
    use super::*;
    use crate::core::app::UiFocus;
    use crate::utils::test_utils::create_test_app;

    #[test]
    fn update_draft_sets_session_and_widget() {
        let mut app = create_test_app();
        apply_action(
            &mut app,
            AppAction::UpdateDraft {
                text: "Hello".into(),
            },
        );
        assert_eq!(app.session.pending_input(), "Hello");
        assert_eq!(app.ui.get_input_text(), "Hello");
    }

    #[test]
    fn paste_inserts_at_cursor_and_focuses_input() {
        let mut app = create_test_app();
        app.ui.focus = UiFocus::Model;
        apply_action(
            &mut app,
            AppAction::UpdateDraft {
                text: "Hello ".into(),
            },
        );
        apply_action(
            &mut app,
            AppAction::InsertIntoInput {
                text: "world".into(),
            },
        );
        assert!(app.ui.is_input_focused());
        assert_eq!(app.session.pending_input(), "Hello world");
    }

    #[test]
    fn paste_is_ignored_while_loading() {
        let mut app = create_test_app();
        app.session.update_draft("Hello");
        app.session.submit().expect("request");

        apply_action(
            &mut app,
            AppAction::InsertIntoInput {
                text: "ignored".into(),
            },
        );
        assert_eq!(app.session.pending_input(), "");
        assert_eq!(app.ui.get_input_text(), "");
    }

    #[test]
    fn quit_requests_exit() {
        let mut app = create_test_app();
        apply_action(&mut app, AppAction::Quit);
        assert!(app.ui.exit_requested);
    }

    #[test]
    fn focus_actions_move_focus() {
        let mut app = create_test_app();
        apply_action(&mut app, AppAction::FocusPrevious);
        assert_eq!(app.ui.focus, UiFocus::Model);
        apply_action(&mut app, AppAction::FocusNext);
        assert_eq!(app.ui.focus, UiFocus::Input);
    }
}
