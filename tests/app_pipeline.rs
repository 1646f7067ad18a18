//! Keys in, terminal writes out: the full application pipeline against an
//! emulated terminal.

use pretty_assertions::assert_eq;
use trellis::element::{focus_path, Border, MultiWrapper, Wrapper};
use trellis::terminal::{HeadlessTerminal, TerminalDriver};
use trellis::widget::{Label, StatusBar, TextInput};
use trellis::{AppError, Application, Command, Key, KeyCode, TerminalEvent};

fn trimmed(term: &HeadlessTerminal) -> Vec<String> {
    term.lines().iter().map(|line| line.trim_end().to_string()).collect()
}

fn two_inputs() -> MultiWrapper {
    MultiWrapper::new(vec![Box::new(TextInput::new()), Box::new(TextInput::new())])
}

fn started(width: u16, height: u16, view: MultiWrapper) -> Application<HeadlessTerminal> {
    let mut app = Application::new(HeadlessTerminal::new(width, height));
    app.add_view("form", view).unwrap();
    app.start().unwrap();
    app
}

#[test]
fn test_start_draws_first_frame() {
    let app = started(12, 3, two_inputs());
    let term = app.terminal();
    assert!(term.is_attached());
    assert_eq!(term.title(), "trellis");
    assert_eq!(trimmed(term), vec![">", ">", ""]);
    assert!(term.is_inverse(2, 0), "cursor of the focused field");
    assert!(!term.is_inverse(2, 1));
}

#[test]
fn test_typing_writes_only_changed_cells() {
    let mut app = started(12, 3, two_inputs());
    app.terminal_mut().reset_counters();

    app.handle_key(Key::char('h')).unwrap();
    assert_eq!(app.terminal().put_count(), 2);
    assert_eq!(app.terminal().flush_count(), 1);
    assert_eq!(app.terminal().line(0).trim_end(), "> h");
    assert!(app.terminal().is_underlined(2, 0));
    assert!(app.terminal().is_inverse(3, 0));
}

#[test]
fn test_unhandled_key_does_not_render() {
    let mut app = started(12, 3, two_inputs());
    let frames = app.frame_count();
    app.terminal_mut().reset_counters();

    app.handle_key(Key::new(KeyCode::F(5))).unwrap();
    assert_eq!(app.frame_count(), frames);
    assert_eq!(app.terminal().put_count(), 0);
}

#[test]
fn test_tab_moves_cursor_between_fields() {
    let mut app = started(12, 3, two_inputs());
    app.handle_key(Key::new(KeyCode::Tab)).unwrap();

    assert_eq!(focus_path(app.view("form").unwrap()), Some(vec![1]));
    assert!(!app.terminal().is_inverse(2, 0));
    assert!(app.terminal().is_inverse(2, 1));
}

#[test]
fn test_bordered_form_renders_titles() {
    let form = MultiWrapper::new(vec![
        Box::new(Wrapper::decorated(TextInput::new(), Border::titled("Name"))),
        Box::new(Label::new("-- end --")),
    ]);
    let app = started(14, 5, form);
    assert_eq!(
        trimmed(app.terminal()),
        vec!["┌─Name───────┐", "│>           │", "└────────────┘", "-- end --", ""]
    );
    assert!(app.terminal().is_bold(0, 0), "focused border is bold");
}

#[test]
fn test_resize_repaints_everything() {
    let mut app = started(10, 2, MultiWrapper::new(vec![Box::new(Label::new("hello"))]));
    app.terminal_mut().resize(12, 3);
    app.terminal_mut().reset_counters();

    let event = app.terminal_mut().poll_event(std::time::Duration::ZERO).unwrap().unwrap();
    app.handle_event(event).unwrap();
    assert_eq!(app.terminal().clear_count(), 1);
    assert_eq!(trimmed(app.terminal()), vec!["hello", "", ""]);
}

#[test]
fn test_run_processes_script_until_quit() {
    let mut terminal = HeadlessTerminal::new(16, 3);
    for c in "ok".chars() {
        terminal.push_key(Key::char(c));
    }
    terminal.push_event(TerminalEvent::FocusLost);
    terminal.push_key(Key::ctrl('c'));

    let mut app = Application::new(terminal);
    app.add_view("form", two_inputs()).unwrap();
    app.bind(Key::ctrl('c'), Command::Quit);
    app.run().unwrap();

    assert!(!app.is_running());
    assert!(!app.terminal().is_attached());
    assert_eq!(app.terminal().line(0).trim_end(), "> ok");
}

#[test]
fn test_run_restores_terminal_on_exhausted_input() {
    let mut app = Application::new(HeadlessTerminal::new(8, 2));
    app.add_view("form", two_inputs()).unwrap();

    let err = app.run().unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
    assert!(!app.terminal().is_attached());
}

#[test]
fn test_switching_views() {
    let mut status = StatusBar::new();
    status.set_all("left", "", "right");

    let mut app = started(16, 2, two_inputs());
    app.add_view("status", MultiWrapper::new(vec![Box::new(status)])).unwrap();
    app.on_key(|key| (key.code == KeyCode::F(2)).then(|| Command::ShowView("status".into())));

    app.handle_key(Key::new(KeyCode::F(2))).unwrap();
    assert_eq!(app.current_view(), Some("status"));
    assert!(!app.view("form").unwrap().is_focused());
    assert_eq!(app.terminal().line(0), "left       right");
    assert_eq!(app.terminal().line(1).trim_end(), "");
}
