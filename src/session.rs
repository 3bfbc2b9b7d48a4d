//! Session registry: many concurrent games behind opaque ids.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::games::gomoku::{Board, BoardConfig, ConfigError, Game, GameStatus, MoveError, Player};

/// Opaque identifier for a game session.
///
/// Freshly created sessions get a random 128-bit id rendered as 32 hex
/// characters, so ids are unguessable and clashes are not a practical
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a submitted move did to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// True when the move ended the game.
    pub ended: bool,
    /// The winner, present only when the move won the game.
    pub winner: Option<Player>,
    /// Cell indices of the winning run, empty unless the game was won.
    pub winning_line: Vec<usize>,
}

impl From<&GameStatus> for MoveOutcome {
    fn from(status: &GameStatus) -> Self {
        Self {
            ended: status.is_terminal(),
            winner: status.winner(),
            winning_line: status.winning_line().to_vec(),
        }
    }
}

/// Serializable view of a session's game at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board as it stands.
    pub board: Board,
    /// Player whose turn it is, or the final mover once the game ends.
    pub current_player: Player,
    /// Current status.
    pub status: GameStatus,
    /// Cell indices played so far, oldest first.
    pub history: Vec<usize>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            board: game.board().clone(),
            current_player: game.current_player(),
            status: game.status().clone(),
            history: game.history().to_vec(),
        }
    }
}

/// Error from a registry operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RegistryError {
    /// No session exists under the given id.
    #[display("no session with id {_0}")]
    SessionNotFound(SessionId),
    /// The session exists but the game rejected the move.
    #[display("{_0}")]
    Move(MoveError),
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::SessionNotFound(_) => None,
            RegistryError::Move(source) => Some(source),
        }
    }
}

/// Thread-safe registry of live game sessions.
///
/// Cloning the registry is cheap and every clone shares the same games.
/// The registry map is locked only long enough to look a session up;
/// each game carries its own lock, so moves in different sessions do
/// not contend with each other.
#[derive(Debug, Clone)]
pub struct GameRegistry {
    games: Arc<Mutex<HashMap<SessionId, Arc<Mutex<Game>>>>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a session playing under the given configuration and
    /// returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] without creating a
    /// session when the configuration cannot form a playable board.
    #[instrument(skip(self))]
    pub fn create_game(&self, config: BoardConfig) -> Result<SessionId, ConfigError> {
        let game = Game::new(config)?;
        let id = SessionId::generate();

        let mut games = self.games.lock().unwrap();
        games.insert(id.clone(), Arc::new(Mutex::new(game)));
        info!(session_id = %id, count = games.len(), "Created new game session");
        Ok(id)
    }

    /// Creates a session with the standard 15x15, five-in-a-row game.
    #[instrument(skip(self))]
    pub fn create_default_game(&self) -> SessionId {
        self.create_game(BoardConfig::default())
            .expect("default board configuration is valid")
    }

    /// Applies a move in the given session for the player whose turn it
    /// is.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SessionNotFound`] for an unknown id, or
    /// [`RegistryError::Move`] when the game rejects the move. Either
    /// way no game state changes.
    #[instrument(skip(self), fields(session_id = %id))]
    pub fn submit_move(&self, id: &SessionId, index: usize) -> Result<MoveOutcome, RegistryError> {
        let game = self.find(id)?;
        let mut game = game.lock().unwrap();

        let status = game.apply_move(index).map_err(|source| {
            warn!(index, error = %source, "Move rejected");
            RegistryError::Move(source)
        })?;

        info!(index, status = %status, "Move applied");
        Ok(MoveOutcome::from(&status))
    }

    /// Returns a point-in-time view of a session's game.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SessionNotFound`] for an unknown id.
    #[instrument(skip(self), fields(session_id = %id))]
    pub fn snapshot(&self, id: &SessionId) -> Result<GameSnapshot, RegistryError> {
        let game = self.find(id)?;
        let game = game.lock().unwrap();
        Ok(GameSnapshot::from(&*game))
    }

    /// Lists all live session ids.
    #[instrument(skip(self))]
    pub fn session_ids(&self) -> Vec<SessionId> {
        let games = self.games.lock().unwrap();
        let ids: Vec<_> = games.keys().cloned().collect();
        info!(count = ids.len(), "Listed sessions");
        ids
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.games.lock().unwrap().len()
    }

    /// True when no sessions exist.
    pub fn is_empty(&self) -> bool {
        self.games.lock().unwrap().is_empty()
    }

    /// Removes a session from the registry.
    ///
    /// The registry never evicts sessions on its own; callers decide
    /// when a finished or abandoned game goes away.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SessionNotFound`] for an unknown id.
    #[instrument(skip(self), fields(session_id = %id))]
    pub fn remove_game(&self, id: &SessionId) -> Result<(), RegistryError> {
        let mut games = self.games.lock().unwrap();
        match games.remove(id) {
            Some(_) => {
                info!(count = games.len(), "Removed game session");
                Ok(())
            }
            None => {
                debug!("Session not found");
                Err(RegistryError::SessionNotFound(id.clone()))
            }
        }
    }

    /// Looks a session up, holding the registry lock only for the
    /// lookup itself.
    fn find(&self, id: &SessionId) -> Result<Arc<Mutex<Game>>, RegistryError> {
        let games = self.games.lock().unwrap();
        games.get(id).cloned().ok_or_else(|| {
            debug!(session_id = %id, "Session not found");
            RegistryError::SessionNotFound(id.clone())
        })
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
