//! Application: named views, key routing, and the render pipeline.
//!
//! An [`Application`] owns a set of named root elements ("views") and shows
//! one at a time. Keys go first to the application's key observers, then
//! down the focus chain of the active view. Whenever the view reports a
//! change or a focus move, a fresh frame is rendered and diffed onto the
//! terminal.

use crate::buffer::{DiffRenderer, RootBuffer, SharedStyleSheet};
use crate::element::{Element, Signal, Signals};
use crate::error::{AppError, AppResult};
use crate::style::AnsiStyles;
use crate::terminal::{CrosstermDriver, FocusKeys, Key, TerminalDriver, TerminalEvent};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Configuration for the [`Application`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Terminal window title.
    pub title: String,
    /// Keys that move focus between siblings.
    pub focus_keys: FocusKeys,
    /// How long [`Application::run`] waits for input per iteration.
    pub poll_timeout: Duration,
    /// Render frames but never attach to or write to the terminal.
    pub headless: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: String::from("trellis"),
            focus_keys: FocusKeys::default(),
            poll_timeout: Duration::from_millis(50),
            headless: false,
        }
    }
}

/// What a key observer asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Stop the event loop and restore the terminal.
    Quit,
    /// Switch to the named view.
    ShowView(String),
    /// Render a frame now.
    Render,
}

type KeyObserver = Box<dyn FnMut(&Key) -> Option<Command>>;

/// Ties views, a terminal driver and the diff renderer together.
pub struct Application<T: TerminalDriver = CrosstermDriver> {
    config: AppConfig,
    terminal: T,
    renderer: DiffRenderer,
    stylesheet: SharedStyleSheet,
    views: HashMap<String, Box<dyn Element>>,
    current: Option<String>,
    observers: Vec<KeyObserver>,
    running: bool,
    /// Last frame rendered in headless mode.
    last_frame: Option<RootBuffer>,
}

impl<T: TerminalDriver> Application<T> {
    /// Create an application with default configuration.
    pub fn new(terminal: T) -> Self {
        Self::with_config(terminal, AppConfig::default())
    }

    /// Create an application with custom configuration.
    pub fn with_config(terminal: T, config: AppConfig) -> Self {
        Self {
            config,
            terminal,
            renderer: DiffRenderer::default(),
            stylesheet: Arc::new(AnsiStyles),
            views: HashMap::new(),
            current: None,
            observers: Vec::new(),
            running: false,
            last_frame: None,
        }
    }

    /// Builder: resolve style tags with `stylesheet` instead of [`AnsiStyles`].
    #[must_use]
    pub fn with_stylesheet(mut self, stylesheet: SharedStyleSheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// The configuration.
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The terminal driver.
    pub const fn terminal(&self) -> &T {
        &self.terminal
    }

    /// The terminal driver, mutably.
    pub const fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    /// Whether [`start`](Self::start) ran and [`stop`](Self::stop) has not.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Frames diffed onto the terminal so far.
    pub const fn frame_count(&self) -> u64 {
        self.renderer.frame_count()
    }

    /// The last frame rendered in headless mode.
    pub const fn last_frame(&self) -> Option<&RootBuffer> {
        self.last_frame.as_ref()
    }

    /// Register `view` under `name`.
    ///
    /// The view is locked so focus navigation wraps inside it. The first view
    /// registered is shown immediately.
    ///
    /// # Errors
    ///
    /// [`AppError::DuplicateView`] if `name` is taken; otherwise whatever
    /// showing the first view returns.
    pub fn add_view(&mut self, name: impl Into<String>, view: impl Element + 'static) -> AppResult<()> {
        let name = name.into();
        if self.views.contains_key(&name) {
            return Err(AppError::DuplicateView(name));
        }

        let mut view: Box<dyn Element> = Box::new(view);
        view.set_locked(true);
        self.views.insert(name.clone(), view);
        info!(view = %name, "view added");

        if self.current.is_none() {
            self.show_view(&name)?;
        }
        Ok(())
    }

    /// Switch to the view registered as `name`.
    ///
    /// The previous view is blurred; the new one receives focus if it can
    /// take it, and a frame is rendered.
    ///
    /// # Errors
    ///
    /// [`AppError::ViewNotFound`] for an unknown name.
    pub fn show_view(&mut self, name: &str) -> AppResult<()> {
        if !self.views.contains_key(name) {
            return Err(AppError::ViewNotFound(name.to_string()));
        }

        let mut out = Signals::with_keys(self.config.focus_keys);
        if let Some(previous) = self.current.as_deref().and_then(|current| self.views.get_mut(current)) {
            previous.blur(&mut out);
        }

        self.current = Some(name.to_string());
        if let Some(view) = self.views.get_mut(name) {
            if view.is_focussable() {
                view.focus(&mut out)?;
            }
        }
        info!(view = name, "view shown");
        self.render()
    }

    /// Name of the active view.
    pub fn current_view(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The view registered as `name`.
    pub fn view(&self, name: &str) -> Option<&dyn Element> {
        let view = self.views.get(name)?;
        Some(&**view)
    }

    /// The view registered as `name`, mutably.
    ///
    /// Changes made this way are not rendered until the next frame.
    pub fn view_mut(&mut self, name: &str) -> Option<&mut (dyn Element + 'static)> {
        let view = self.views.get_mut(name)?;
        Some(&mut **view)
    }

    /// Observe every key before it reaches the active view.
    ///
    /// Observers run in registration order; each may return a [`Command`].
    pub fn on_key<F>(&mut self, observer: F)
    where
        F: FnMut(&Key) -> Option<Command> + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Run `command` whenever `key` is pressed.
    pub fn bind(&mut self, key: Key, command: Command) {
        self.on_key(move |pressed| (*pressed == key).then(|| command.clone()));
    }

    /// Attach the terminal and draw the first frame.
    ///
    /// The screen is cleared and repainted in full, including after a
    /// previous [`stop`](Self::stop).
    ///
    /// # Errors
    ///
    /// [`AppError::NoViews`] if no view was added, or a terminal error.
    pub fn start(&mut self) -> AppResult<()> {
        if self.current.is_none() {
            return Err(AppError::NoViews);
        }
        if !self.config.headless {
            self.terminal.attach(&self.config.title)?;
        }
        self.renderer = DiffRenderer::default();
        self.running = true;
        info!(title = %self.config.title, headless = self.config.headless, "application started");
        self.render()
    }

    /// Stop the event loop and restore the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if restoring the terminal fails.
    pub fn stop(&mut self) -> AppResult<()> {
        self.running = false;
        if !self.config.headless {
            self.terminal.detach()?;
        }
        info!("application stopped");
        Ok(())
    }

    /// Start, process events until a [`Command::Quit`], then stop.
    ///
    /// The terminal is restored even when an event handler fails.
    ///
    /// # Errors
    ///
    /// The first error raised while starting, handling an event or stopping.
    pub fn run(&mut self) -> AppResult<()> {
        self.start()?;
        let result = self.event_loop();
        let stopped = self.stop();
        result.and(stopped)
    }

    fn event_loop(&mut self) -> AppResult<()> {
        while self.running {
            if let Some(event) = self.terminal.poll_event(self.config.poll_timeout)? {
                self.handle_event(event)?;
            }
        }
        Ok(())
    }

    /// React to one terminal event.
    ///
    /// # Errors
    ///
    /// Focus or buffer contract violations from the active view, or a
    /// terminal error.
    pub fn handle_event(&mut self, event: TerminalEvent) -> AppResult<()> {
        match event {
            TerminalEvent::Key(key) => self.handle_key(key),
            TerminalEvent::Resize { width, height } => {
                debug!(width, height, "resize");
                self.render()
            }
            TerminalEvent::FocusGained => {
                debug!("terminal focus in");
                Ok(())
            }
            TerminalEvent::FocusLost => {
                debug!("terminal focus out");
                Ok(())
            }
            TerminalEvent::Error(message) => {
                warn!(%message, "terminal input error");
                Ok(())
            }
        }
    }

    /// Deliver a key to the observers, then to the active view's focus chain.
    ///
    /// The view only sees the key while it holds focus. Renders once if the
    /// view signalled a change or a focus move. A [`Command::Quit`] from an
    /// observer stops delivery.
    ///
    /// # Errors
    ///
    /// Focus or buffer contract violations from the active view.
    pub fn handle_key(&mut self, key: Key) -> AppResult<()> {
        trace!(%key, "key");

        let commands: Vec<Command> = self.observers.iter_mut().filter_map(|observer| observer(&key)).collect();
        for command in commands {
            let quit = command == Command::Quit;
            self.execute(command)?;
            if quit {
                return Ok(());
            }
        }

        let mut out = Signals::with_keys(self.config.focus_keys);
        let Some(view) = self.current.as_deref().and_then(|name| self.views.get_mut(name)) else {
            return Ok(());
        };
        if !view.is_focused() {
            trace!("active view holds no focus, key dropped");
            return Ok(());
        }
        view.handle_key(&key, &mut out)?;

        if out.contains(Signal::Change) || out.contains(Signal::Focus) {
            self.render()?;
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> AppResult<()> {
        debug!(?command, "command");
        match command {
            Command::Quit => self.stop(),
            Command::ShowView(name) => self.show_view(&name),
            Command::Render => self.render(),
        }
    }

    /// Render the active view into a fresh frame and diff it onto the
    /// terminal.
    ///
    /// # Errors
    ///
    /// Buffer contract violations from the view, or a terminal error.
    pub fn render(&mut self) -> AppResult<()> {
        let Some(view) = self.current.as_deref().and_then(|name| self.views.get(name)) else {
            return Ok(());
        };

        let (width, height) = self.terminal.size();
        let mut frame = RootBuffer::with_stylesheet(width, height, Arc::clone(&self.stylesheet));
        view.render(&mut frame)?;

        if self.config.headless {
            self.last_frame = Some(frame);
            return Ok(());
        }
        self.renderer.render(&mut frame, &mut self.terminal)?;
        Ok(())
    }
}

impl<T: TerminalDriver + std::fmt::Debug> std::fmt::Debug for Application<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("config", &self.config)
            .field("terminal", &self.terminal)
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
