use crate::application_port::FormView;
use crate::domain_model::NotificationKind;
use crate::form::FormSnapshot;
use parking_lot::Mutex;
use std::io::{self, Write};

#[derive(Debug, Default)]
struct Printed {
    in_flight: bool,
    revision: u64,
    visible: bool,
}

/// Line-oriented renderer for terminals. Prints only what changed since the
/// previous snapshot.
pub struct ConsoleView<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
    printed: Mutex<Printed>,
}

impl ConsoleView {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            printed: Mutex::new(Printed::default()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn lines(&self, snapshot: &FormSnapshot) -> Vec<String> {
        let mut printed = self.printed.lock();
        let mut lines = Vec::new();

        let in_flight = snapshot.phase.is_in_flight();
        if in_flight && !printed.in_flight {
            lines.push(format!("{} {}", snapshot.submit_label(), snapshot.email));
        }
        printed.in_flight = in_flight;

        let notification = &snapshot.notification;
        if notification.visible && snapshot.notification_revision != printed.revision {
            let marker = match notification.kind {
                NotificationKind::Success => "[ok]",
                NotificationKind::Error => "[error]",
            };
            lines.push(format!("{marker} {}: {}", notification.title, notification.message));
        } else if !notification.visible && printed.visible {
            lines.push("(notification dismissed)".to_string());
        }
        printed.revision = snapshot.notification_revision;
        printed.visible = notification.visible;

        lines
    }
}

impl<W: Write + Send> FormView for ConsoleView<W> {
    fn render(&self, snapshot: &FormSnapshot) {
        let lines = self.lines(snapshot);
        if lines.is_empty() {
            return;
        }
        let mut out = self.out.lock();
        for line in lines {
            if let Err(e) = writeln!(out, "{line}") {
                tracing::warn!("console view write failed: {e}");
                return;
            }
        }
        if let Err(e) = out.flush() {
            tracing::warn!("console view flush failed: {e}");
        }
    }
}
