//! Navigation targets the gate can redirect to.

use std::sync::Mutex;

use tokio::sync::oneshot;

use crate::error::NavigationError;

/// Client-side navigation with replace semantics: the current entry is
/// swapped for `route`, so going back skips it.
pub trait Navigator: Send + Sync {
    fn replace(&self, route: &str) -> Result<(), NavigationError>;
}

/// Hands a single redirect to whoever holds the receiver (an HTTP handler).
pub struct OneShotNavigator {
    tx: Mutex<Option<oneshot::Sender<String>>>,
    sent: Mutex<Option<String>>,
}

impl OneShotNavigator {
    pub fn new() -> (Self, oneshot::Receiver<String>) {
        let (tx, rx) = oneshot::channel();
        let navigator = Self {
            tx: Mutex::new(Some(tx)),
            sent: Mutex::new(None),
        };
        (navigator, rx)
    }
}

impl Navigator for OneShotNavigator {
    fn replace(&self, route: &str) -> Result<(), NavigationError> {
        let mut sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = sent.as_ref() {
            return Err(NavigationError::AlreadyNavigated {
                previous: previous.clone(),
                route: route.to_string(),
            });
        }

        let tx = self
            .tx
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
            .ok_or_else(|| NavigationError::Unreachable {
                route: route.to_string(),
                reason: "navigator closed".to_string(),
            })?;

        tx.send(route.to_string())
            .map_err(|route| NavigationError::Unreachable {
                route,
                reason: "nobody is waiting for the redirect".to_string(),
            })?;
        *sent = Some(route.to_string());
        Ok(())
    }
}
