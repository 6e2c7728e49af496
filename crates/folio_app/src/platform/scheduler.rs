use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use folio_core::{Msg, Scheduler};
use folio_logging::{folio_error, folio_trace};
use tokio::runtime::Runtime;

use super::app::AppEvent;

enum TimerCommand {
    Schedule { delay: Duration, msg: Msg },
}

/// Wall-clock scheduler: a tokio runtime on its own thread sleeps for each
/// deferral and posts the message back to the main loop.
pub struct TimerScheduler {
    cmd_tx: mpsc::Sender<TimerCommand>,
}

impl TimerScheduler {
    /// Fails if the timer runtime cannot be started.
    pub fn new(event_tx: mpsc::Sender<AppEvent>) -> io::Result<Self> {
        let runtime = Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx })
    }
}

impl Scheduler for TimerScheduler {
    fn schedule(&mut self, delay: Duration, msg: Msg) {
        if self
            .cmd_tx
            .send(TimerCommand::Schedule { delay, msg })
            .is_err()
        {
            folio_error!("Timer thread is gone; {:?} will never be delivered", msg);
        }
    }
}

async fn handle_command(command: TimerCommand, event_tx: mpsc::Sender<AppEvent>) {
    match command {
        TimerCommand::Schedule { delay, msg } => {
            tokio::time::sleep(delay).await;
            folio_trace!("Timer fired after {:?}: {:?}", delay, msg);
            let _ = event_tx.send(AppEvent::Deferred(msg));
        }
    }
}
