//! Headless mode runner - main event loop over stdin/stdout
//!
//! Commands arrive on a blocking stdin reader thread; deferred picker work
//! arrives on the engine's own channel. Both are multiplexed in one loop and
//! every resulting picker event is written to stdout as NDJSON.

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use timepick_app::{Engine, HostInput, PickerEvent, PickerOptions};
use timepick_core::prelude::*;

use super::{HeadlessCommand, HeadlessEvent, Request};

/// Whether the loop keeps running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One picker plus its event subscription, driven line by line
pub struct HeadlessSession {
    pub engine: Engine,
    events: broadcast::Receiver<PickerEvent>,
}

impl HeadlessSession {
    pub fn new(hosts: &[HostInput], options: PickerOptions) -> Self {
        let engine = Engine::create(hosts, options);
        let events = engine.subscribe();
        Self { engine, events }
    }

    /// Apply one input line, returning replies and picker events in order
    pub fn handle_line(&mut self, line: &str) -> (Flow, Vec<HeadlessEvent>) {
        if line.trim().is_empty() {
            return (Flow::Continue, Vec::new());
        }

        let request = match HeadlessCommand::parse(line).and_then(HeadlessCommand::into_request) {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejected stdin line {:?}: {}", line, e);
                return (
                    Flow::Continue,
                    vec![HeadlessEvent::from_error(&e)],
                );
            }
        };

        let mut out = Vec::new();
        let flow = match request {
            Request::Deliver(msg) => {
                self.engine.process_message(msg);
                Flow::Continue
            }
            Request::Get => {
                out.push(HeadlessEvent::time(self.engine.get_time()));
                Flow::Continue
            }
            Request::Render => {
                out.push(HeadlessEvent::view(self.engine.render()));
                Flow::Continue
            }
            Request::Quit => Flow::Quit,
        };

        let mut events = self.collect_events();
        events.extend(out);
        (flow, events)
    }

    /// Translate every picker event broadcast since the last call
    pub fn collect_events(&mut self) -> Vec<HeadlessEvent> {
        let mut out = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => out.push(HeadlessEvent::from_picker_event(&event)),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    warn!("Headless output lagged, {} events dropped", n);
                }
                Err(_) => break,
            }
        }
        out
    }
}

enum Input {
    Line(Option<String>),
    Deferred(Option<timepick_app::Message>),
}

/// Run in headless mode until `quit` or end of input
pub async fn run_headless(hosts: Vec<HostInput>, options: PickerOptions) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("timepick starting in HEADLESS mode");
    info!("Hosts: {:?}", hosts.iter().map(|h| &h.id).collect::<Vec<_>>());
    info!("═══════════════════════════════════════════════════════");

    let mut session = HeadlessSession::new(&hosts, options);
    if session.engine.is_inert() {
        HeadlessEvent::error(
            "Picker could not be attached; all commands are ignored".to_string(),
            false,
        )
        .emit();
    }

    let (line_tx, mut line_rx) = mpsc::channel::<String>(64);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(line_tx);
    });

    loop {
        let input = tokio::select! {
            line = line_rx.recv() => Input::Line(line),
            msg = session.engine.next_message() => Input::Deferred(msg),
        };

        match input {
            Input::Line(Some(line)) => {
                let (flow, events) = session.handle_line(&line);
                events.iter().for_each(HeadlessEvent::emit);
                if flow == Flow::Quit {
                    info!("Quit requested");
                    break;
                }
            }
            Input::Line(None) => {
                // End of input: let pending closes land before exiting
                session.engine.settle().await;
                session.collect_events().iter().for_each(HeadlessEvent::emit);
                break;
            }
            Input::Deferred(Some(msg)) => {
                session.engine.process_message(msg);
                session.collect_events().iter().for_each(HeadlessEvent::emit);
            }
            Input::Deferred(None) => {
                error!("Message channel closed");
                HeadlessEvent::from_error(&Error::ChannelClosed).emit();
                return Err(Error::ChannelClosed);
            }
        }
    }

    info!("timepick headless mode exiting");
    Ok(())
}

/// Forward stdin lines to the event loop (blocking version)
fn spawn_stdin_reader_blocking(line_tx: mpsc::Sender<String>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use timepick_core::ClockMode;

    fn session() -> HeadlessSession {
        HeadlessSession::new(
            &[HostInput::new("time", "")],
            PickerOptions {
                interval: 30,
                mode: ClockMode::TwelveHour,
                max_time: 18,
                start_time: 9,
                end_time: 21,
                ..Default::default()
            },
        )
    }

    fn types(events: &[HeadlessEvent]) -> Vec<&'static str> {
        events.iter().map(HeadlessEvent::event_type).collect()
    }

    #[tokio::test]
    async fn test_focus_then_key_down() {
        let mut session = session();

        let (_, events) = session.handle_line(r#"{"cmd":"focus"}"#);
        assert_eq!(types(&events), vec!["open"]);

        let (_, events) = session.handle_line(r#"{"cmd":"key","key":"down"}"#);
        assert_eq!(types(&events), vec!["change"]);
        assert_eq!(session.engine.get_time().display_text, "9:00 am");
    }

    #[tokio::test]
    async fn test_get_and_render_replies() {
        let mut session = session();
        session.handle_line(r#"{"cmd":"change","text":"10:30"}"#);

        let (_, events) = session.handle_line(r#"{"cmd":"get"}"#);
        match events.as_slice() {
            [HeadlessEvent::Time { display_text, .. }] => assert_eq!(display_text, "10:30 am"),
            other => panic!("unexpected {:?}", other),
        }

        let (_, events) = session.handle_line(r#"{"cmd":"render"}"#);
        assert_eq!(types(&events), vec!["view"]);
    }

    #[tokio::test]
    async fn test_bad_line_reports_error_and_continues() {
        let mut session = session();

        let (flow, events) = session.handle_line("{nope");

        assert_eq!(flow, Flow::Continue);
        assert_eq!(types(&events), vec!["error"]);
        assert!(matches!(events[0], HeadlessEvent::Error { fatal: false, .. }));
    }

    #[tokio::test]
    async fn test_blank_line_is_ignored() {
        let mut session = session();
        let (flow, events) = session.handle_line("   ");
        assert_eq!(flow, Flow::Continue);
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_quit() {
        let mut session = session();
        let (flow, _) = session.handle_line(r#"{"cmd":"quit"}"#);
        assert_eq!(flow, Flow::Quit);
    }
}
