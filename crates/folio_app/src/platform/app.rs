use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use folio_core::{Msg, Scheduler, ViewState, ViewStateController};
use folio_logging::{folio_debug, folio_info, folio_warn};

use super::config::{load_config, AppConfig, CONFIG_FILENAME};
use super::content::load_catalog;
use super::document::TerminalDocument;
use super::logging;
use super::scheduler::TimerScheduler;
use super::ui::input::{parse_command, Command, HELP};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// One line typed by the user.
    Input(String),
    /// A deferred continuation came due.
    Deferred(Msg),
    /// Stdin reached end of file.
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = match load_config(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(config.log, config.level_filter());
    if let Some(err) = config_error {
        folio_warn!("Using default settings: {}", err);
    }

    let catalog =
        load_catalog(config.catalog.as_deref()).context("failed to load content catalog")?;
    folio_info!(
        "Catalog ready: {} posts, {} projects",
        catalog.posts().len(),
        catalog.projects().len()
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let scheduler =
        TimerScheduler::new(event_tx.clone()).context("failed to start timer runtime")?;
    let state = ViewState::with_settings(Arc::new(catalog), config.controller_settings());
    let document = TerminalDocument::new(config.viewport_height);
    let controller = ViewStateController::new(state, document, scheduler);
    let mut host = Host::new(controller, io::stdout().lock());

    spawn_input_reader(event_tx);

    host.start()?;
    for event in event_rx {
        if !host.handle_event(event)? {
            break;
        }
    }
    folio_info!("Session ended");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if event_tx.send(AppEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    folio_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

/// Owns the controller and the output stream. Each event is dispatched, the
/// page is repainted if the state changed, and the viewport is drawn.
struct Host<S, W> {
    controller: ViewStateController<TerminalDocument, S>,
    out: W,
}

impl<S, W> Host<S, W>
where
    S: Scheduler,
    W: Write,
{
    fn new(controller: ViewStateController<TerminalDocument, S>, out: W) -> Self {
        Self { controller, out }
    }

    fn start(&mut self) -> io::Result<()> {
        self.paint();
        self.controller.surface().draw(&mut self.out)?;
        writeln!(self.out, "{HELP}")
    }

    /// Returns false once the session should end.
    fn handle_event(&mut self, event: AppEvent) -> io::Result<bool> {
        match event {
            AppEvent::Input(line) => match parse_command(&line) {
                Ok(None) => return Ok(true),
                Ok(Some(Command::Intent(msg))) => self.controller.dispatch(msg),
                Ok(Some(Command::Help)) => {
                    writeln!(self.out, "{HELP}")?;
                    return Ok(true);
                }
                Ok(Some(Command::Quit)) => return Ok(false),
                Err(err) => {
                    writeln!(self.out, "{err}")?;
                    return Ok(true);
                }
            },
            AppEvent::Deferred(msg) => self.controller.dispatch(msg),
            AppEvent::InputClosed => {
                folio_debug!("Input closed");
                return Ok(false);
            }
        }

        self.render();
        // Scrolls move the viewport without touching state, so always redraw.
        self.controller.surface().draw(&mut self.out)?;
        Ok(true)
    }

    fn render(&mut self) {
        while self.controller.consume_dirty() {
            self.paint();
        }
    }

    fn paint(&mut self) {
        let view = self.controller.view();
        if self.controller.surface_mut().present(&view) {
            self.controller.landing_mounted();
        }
    }
}
