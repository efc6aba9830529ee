//! Client context: routes events through the services in a fixed order.
//!
//! Session reconciliation runs first so the projector always reads an
//! up-to-date game reference, then the projector updates the view. Notices
//! from either end up in the projector's single notice slot.

use goplaygo_shared::{GameMode, GameView};

use crate::application::services::{GameStateProjector, SessionService};
use crate::application::session_store::SessionStore;
use crate::infrastructure::messaging::CommandBus;
use crate::ports::outbound::{ClientEvent, StorageProvider};

pub struct ClientContext<S: StorageProvider> {
    store: SessionStore<S>,
    projector: GameStateProjector,
    commands: CommandBus,
}

impl<S: StorageProvider> ClientContext<S> {
    pub fn new(store: SessionStore<S>, commands: CommandBus) -> Self {
        Self {
            store,
            projector: GameStateProjector::new(),
            commands,
        }
    }

    /// Route one inbound event through the services.
    pub fn handle_event(&mut self, event: &ClientEvent) {
        let notice = SessionService::handle_event(&self.store, event, &self.commands);
        self.projector.handle_event(&self.store, event, &self.commands);
        if let Some(notice) = notice {
            self.projector.set_notice(notice);
        }
    }

    pub fn view(&self) -> Option<&GameView> {
        self.projector.view()
    }

    pub fn notice(&self) -> Option<&str> {
        self.projector.notice()
    }

    pub fn user_id(&self) -> &str {
        self.store.user_id()
    }

    pub fn game(&self) -> Option<(String, GameMode)> {
        self.store.game()
    }

    pub fn commands(&self) -> &CommandBus {
        &self.commands
    }
}
