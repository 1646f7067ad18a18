//! `CrosstermDriver`: a real terminal via crossterm.
//!
//! Attaching enters raw mode (and by default the alternate screen), hides the
//! cursor and spawns an [`InputActor`]. Cell writes accumulate in an
//! [`OutputBuffer`] and reach stdout once per frame on [`flush`].
//!
//! [`flush`]: TerminalDriver::flush

use super::input::InputActor;
use super::output::OutputBuffer;
use super::{TerminalDriver, TerminalEvent};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    queue,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the [`CrosstermDriver`].
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Whether to use the alternate screen buffer.
    pub alternate_screen: bool,
    /// Whether to ask the terminal for focus in/out reports.
    pub focus_reporting: bool,
    /// How long the input thread waits per poll before checking for shutdown.
    pub input_poll_timeout: Duration,
    /// Capacity of the input event channel.
    pub event_capacity: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            focus_reporting: true,
            input_poll_timeout: Duration::from_millis(10),
            event_capacity: 64,
        }
    }
}

/// Terminal driver backed by crossterm and stdout.
pub struct CrosstermDriver {
    config: DriverConfig,
    output: OutputBuffer,
    stdout: io::Stdout,
    width: u16,
    height: u16,
    attached: bool,
    input: Option<InputActor>,
    events: Option<Receiver<TerminalEvent>>,
}

impl CrosstermDriver {
    /// Create a detached driver with default configuration.
    pub fn new() -> Self {
        Self::with_config(DriverConfig::default())
    }

    /// Create a detached driver with custom configuration.
    ///
    /// The size is read from the terminal now and refreshed on attach and on
    /// every resize event; it falls back to 80x24 when stdout is not a tty.
    pub fn with_config(config: DriverConfig) -> Self {
        let (width, height) = terminal::size().unwrap_or((80, 24));
        Self {
            config,
            output: OutputBuffer::new(),
            stdout: io::stdout(),
            width,
            height,
            attached: false,
            input: None,
            events: None,
        }
    }

    /// The driver configuration.
    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDriver for CrosstermDriver {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn attach(&mut self, title: &str) -> io::Result<()> {
        if self.attached {
            return Ok(());
        }

        (self.width, self.height) = terminal::size()?;
        terminal::enable_raw_mode()?;

        if self.config.alternate_screen {
            queue!(self.stdout, EnterAlternateScreen)?;
        }
        if self.config.focus_reporting {
            queue!(self.stdout, EnableFocusChange)?;
        }
        queue!(self.stdout, SetTitle(title))?;
        self.stdout.flush()?;

        self.output.invalidate_cursor();
        self.output.cursor_hide();
        self.output.flush_to(&mut self.stdout)?;

        let (tx, rx) = bounded::<TerminalEvent>(self.config.event_capacity);
        self.input = Some(InputActor::spawn(tx, self.config.input_poll_timeout)?);
        self.events = Some(rx);
        self.attached = true;

        info!(width = self.width, height = self.height, title, "terminal attached");
        Ok(())
    }

    fn detach(&mut self) -> io::Result<()> {
        if !self.attached {
            return Ok(());
        }
        self.attached = false;

        if let Some(actor) = self.input.take() {
            actor.join();
        }
        self.events = None;

        self.output.reset_attrs();
        self.output.cursor_show();
        self.output.flush_to(&mut self.stdout)?;

        if self.config.focus_reporting {
            queue!(self.stdout, DisableFocusChange)?;
        }
        if self.config.alternate_screen {
            queue!(self.stdout, LeaveAlternateScreen)?;
        }
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;

        info!("terminal detached");
        Ok(())
    }

    fn put(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        if self.attached {
            self.output.put_cell(col, row, text);
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.attached {
            self.output.clear_screen();
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.attached {
            return Ok(());
        }
        self.output.flush_to(&mut self.stdout)
    }

    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<TerminalEvent>> {
        let Some(events) = &self.events else {
            return Ok(None);
        };

        match events.recv_timeout(timeout) {
            Ok(event) => {
                if let TerminalEvent::Resize { width, height } = event {
                    debug!(width, height, "terminal resized");
                    self.width = width;
                    self.height = height;
                }
                Ok(Some(event))
            }
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "input thread disconnected",
            )),
        }
    }
}

impl Drop for CrosstermDriver {
    fn drop(&mut self) {
        let _ = self.detach();
    }
}

impl std::fmt::Debug for CrosstermDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrosstermDriver")
            .field("config", &self.config)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_driver_is_inert() {
        let mut driver = CrosstermDriver::new();
        assert!(!driver.is_attached());
        driver.put(1, 1, "x").unwrap();
        driver.clear().unwrap();
        driver.flush().unwrap();
        assert!(driver.output.is_empty());
        assert_eq!(driver.poll_event(Duration::ZERO).unwrap(), None);
        driver.detach().unwrap();
    }
}
