use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use od_core::ports::AlertPort;
use tracing::warn;

/// Terminal stand-in for the platform alert dialog.
///
/// Messages are printed to stderr (unless silenced) and kept so commands can
/// report them in their output.
#[derive(Debug, Default)]
pub struct ConsoleAlert {
    silent: bool,
    shown: Mutex<Vec<String>>,
}

impl ConsoleAlert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record alerts without printing them.
    pub fn silent() -> Self {
        Self {
            silent: true,
            ..Self::default()
        }
    }

    /// Takes every alert shown so far.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.shown.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[async_trait]
impl AlertPort for ConsoleAlert {
    async fn alert(&self, message: &str) {
        warn!(message, "alert shown");
        if !self.silent {
            eprintln!("! {message}");
        }
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
