//! Persistent session identity and game reference.
//!
//! Two facts survive restarts: who this client is (the user id) and which
//! game it was in (game id plus mode). The game reference is a pair with an
//! all-or-nothing contract: both keys present, or both absent. A half-written
//! pair cannot produce a valid rejoin, so it is cleared on read rather than
//! guessed at.

use goplaygo_shared::GameMode;

use crate::ports::outbound::{storage_keys, RandomProvider, StorageProvider};

/// Length of a generated user id.
pub const USER_ID_LEN: usize = 5;

/// Session persistence over a [`StorageProvider`].
#[derive(Clone)]
pub struct SessionStore<S: StorageProvider> {
    storage: S,
    user_id: String,
}

impl<S: StorageProvider> SessionStore<S> {
    /// Open the session, generating and persisting a user id if none exists.
    pub fn new(storage: S, random: &impl RandomProvider) -> Self {
        let user_id = match storage.load(storage_keys::USER_ID) {
            Some(id) if !id.is_empty() => id,
            _ => {
                let id = random.alphanumeric_id(USER_ID_LEN);
                storage.save(storage_keys::USER_ID, &id);
                tracing::info!(user_id = %id, "Generated new user id");
                id
            }
        };
        Self { storage, user_id }
    }

    /// The stable user id for this client installation.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The persisted game reference, if a complete pair exists.
    pub fn game(&self) -> Option<(String, GameMode)> {
        let id = self.storage.load(storage_keys::GAME_ID);
        let mode = self.storage.load(storage_keys::GAME_MODE);
        match (id, mode) {
            (Some(id), Some(mode)) => match mode.parse::<GameMode>() {
                Ok(mode) => Some((id, mode)),
                Err(e) => {
                    tracing::warn!("Clearing unreadable session: {}", e);
                    self.clear_game();
                    None
                }
            },
            (None, None) => None,
            _ => {
                tracing::warn!("Clearing half-written session pair");
                self.clear_game();
                None
            }
        }
    }

    /// Persist the game reference. Writes both keys.
    pub fn set_game(&self, game_id: &str, mode: GameMode) {
        self.storage.save(storage_keys::GAME_ID, game_id);
        self.storage.save(storage_keys::GAME_MODE, mode.as_str());
    }

    /// Remove the game reference. Removes both keys.
    pub fn clear_game(&self) {
        self.storage.remove(storage_keys::GAME_ID);
        self.storage.remove(storage_keys::GAME_MODE);
    }
}
