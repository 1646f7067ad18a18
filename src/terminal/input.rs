//! Input Actor: Dedicated thread for polling terminal events.
//!
//! The thread polls crossterm with a short timeout so it can notice a
//! shutdown request, converts what it reads into [`TerminalEvent`]s, and
//! sends them over a bounded channel to whoever owns the driver.

use super::keys::{Key, KeyCode, KeyModifiers};
use super::TerminalEvent;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};

/// Input actor that polls terminal events.
#[derive(Debug)]
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// checking the shutdown flag again.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(sender: Sender<TerminalEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("trellis-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Signal shutdown and wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(sender: &Sender<TerminalEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        debug!("input thread started");
        while !shutdown.load(Ordering::Relaxed) {
            let event = match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => Self::convert_event(event),
                    Err(e) => Some(TerminalEvent::Error(e.to_string())),
                },
                Ok(false) => None,
                Err(e) => Some(TerminalEvent::Error(e.to_string())),
            };

            if let Some(event) = event {
                if let TerminalEvent::Error(message) = &event {
                    warn!(%message, "terminal input error");
                }
                if sender.send(event).is_err() {
                    // Receiver dropped
                    break;
                }
            }
        }
        debug!("input thread stopped");
    }

    /// Convert a crossterm event to a [`TerminalEvent`].
    fn convert_event(event: Event) -> Option<TerminalEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (not release or repeat)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                let code = Self::convert_key_code(key_event.code)?;
                let mut modifiers = Self::convert_modifiers(key_event.modifiers);
                if matches!(code, KeyCode::Char(_) | KeyCode::BackTab) {
                    modifiers.remove(KeyModifiers::SHIFT);
                }
                Some(TerminalEvent::Key(Key::with_modifiers(code, modifiers)))
            }
            Event::Resize(width, height) => Some(TerminalEvent::Resize { width, height }),
            Event::FocusGained => Some(TerminalEvent::FocusGained),
            Event::FocusLost => Some(TerminalEvent::FocusLost),
            Event::Mouse(_) | Event::Paste(_) => None,
        }
    }

    fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
        Some(match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::F(n) => KeyCode::F(n),
            event::KeyCode::Backspace => KeyCode::Backspace,
            event::KeyCode::Enter => KeyCode::Enter,
            event::KeyCode::Left => KeyCode::Left,
            event::KeyCode::Right => KeyCode::Right,
            event::KeyCode::Up => KeyCode::Up,
            event::KeyCode::Down => KeyCode::Down,
            event::KeyCode::Home => KeyCode::Home,
            event::KeyCode::End => KeyCode::End,
            event::KeyCode::PageUp => KeyCode::PageUp,
            event::KeyCode::PageDown => KeyCode::PageDown,
            event::KeyCode::Tab => KeyCode::Tab,
            event::KeyCode::BackTab => KeyCode::BackTab,
            event::KeyCode::Delete => KeyCode::Delete,
            event::KeyCode::Insert => KeyCode::Insert,
            event::KeyCode::Esc => KeyCode::Esc,
            event::KeyCode::Null => KeyCode::Null,
            _ => return None,
        })
    }

    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        let mut modifiers = KeyModifiers::NONE;
        modifiers.set(KeyModifiers::SHIFT, mods.contains(event::KeyModifiers::SHIFT));
        modifiers.set(KeyModifiers::CONTROL, mods.contains(event::KeyModifiers::CONTROL));
        modifiers.set(KeyModifiers::ALT, mods.contains(event::KeyModifiers::ALT));
        modifiers.set(KeyModifiers::SUPER, mods.contains(event::KeyModifiers::SUPER));
        modifiers
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
