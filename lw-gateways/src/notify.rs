use lw_core::gateways::notify::{Notification, NotificationLevel, Notifier};
use std::io::{self, Write};

use crate::clipboard::ClipboardCommand;

/// Notifier for terminal sessions.
///
/// Notifications end up in the log. Without a configured clipboard
/// program the copied text is written to stdout instead.
#[derive(Debug, Default, Clone)]
pub struct ConsoleNotifier {
    clipboard: Option<ClipboardCommand>,
}

impl ConsoleNotifier {
    pub fn new(clipboard: Option<ClipboardCommand>) -> Self {
        Self { clipboard }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let Notification { level, message } = notification;
        match level {
            NotificationLevel::Info => log::info!("{message}"),
            NotificationLevel::Warning => log::warn!("{message}"),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<()> {
        match &self.clipboard {
            Some(cmd) => cmd.copy(text)?,
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{text}")?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
