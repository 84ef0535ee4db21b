use crate::{
    errors::AppError,
    logging::logger::log_warn,
    shapes::roster::{Roster, RosterAction},
};
use std::sync::Arc;
use tokio::sync::watch;

/// Holds the current roster snapshot and publishes every accepted change.
///
/// Mutations go through [`RosterStore::dispatch`]; a rejected action leaves
/// the published snapshot as it was.
#[derive(Debug)]
pub struct RosterStore {
    tx: watch::Sender<Arc<Roster>>,
}

impl RosterStore {
    pub fn new(roster: Roster) -> Self {
        let (tx, _) = watch::channel(Arc::new(roster));
        Self { tx }
    }

    pub fn snapshot(&self) -> Arc<Roster> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Roster>> {
        self.tx.subscribe()
    }

    pub fn dispatch(&self, action: RosterAction) -> Result<Arc<Roster>, AppError> {
        let current = self.snapshot();
        match current.apply(action) {
            Ok(next) => {
                let next = Arc::new(next);
                self.tx.send_replace(next.clone());
                Ok(next)
            }
            Err(e) => {
                log_warn(&format!("roster change rejected: {}", e));
                Err(e)
            }
        }
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new(Roster::seeded())
    }
}
