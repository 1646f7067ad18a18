//! Focus Demo: a bordered sign-up form driven entirely by the keyboard.
//!
//! Demonstrates:
//! - Tab / Shift+Tab moving focus across nested composites
//! - Enter handing focus to the next field
//! - Switching between named views with key bindings
//!
//! Set `TRELLIS_LOG=/path/to/file` to capture debug logs; the terminal
//! itself is busy showing the UI.

use std::fs::File;
use std::sync::Mutex;
use trellis::element::{Border, Element, Inset, MultiWrapper, Row, Wrapper};
use trellis::terminal::CrosstermDriver;
use trellis::widget::{Label, StatusBar, TextInput};
use trellis::{Application, Command, Key, KeyCode};

fn init_logging() -> std::io::Result<()> {
    let Ok(path) = std::env::var("TRELLIS_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn field(title: &str, placeholder: &str) -> Box<dyn Element> {
    Box::new(Wrapper::decorated(
        TextInput::new().placeholder(placeholder),
        Border::titled(title),
    ))
}

fn form() -> MultiWrapper {
    let names = MultiWrapper::with_arrange(
        vec![field("First name", "Ada"), field("Last name", "Lovelace")],
        Row { gap: 1 },
    );

    let mut status = StatusBar::new();
    status.set_all("Sign up", "Tab: next field", "F1: help");

    MultiWrapper::new(vec![
        Box::new(Wrapper::decorated(
            Label::new("Tell us who you are.").styled(&["bold"]),
            Inset::uniform(1),
        )),
        Box::new(names),
        field("Email", "ada@example.com"),
        Box::new(status),
    ])
}

fn help() -> MultiWrapper {
    MultiWrapper::new(vec![
        Box::new(Wrapper::decorated(
            Label::new(
                "Tab / Shift+Tab  move between fields\n\
                 Enter            accept field\n\
                 F1               this help\n\
                 Esc              back to the form\n\
                 Ctrl+C           quit",
            ),
            Border::titled("Keys"),
        )),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let mut app = Application::new(CrosstermDriver::new());
    app.add_view("form", form())?;
    app.add_view("help", help())?;

    app.bind(Key::ctrl('c'), Command::Quit);
    app.bind(Key::new(KeyCode::F(1)), Command::ShowView("help".into()));
    app.bind(Key::new(KeyCode::Esc), Command::ShowView("form".into()));

    app.run()?;
    Ok(())
}
