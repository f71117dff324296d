//! Status listeners notified by the engine.
//!
//! The engine owns its listeners and calls them synchronously at the end of
//! every successful placement: first `turn_changed`, then `game_over` if the
//! grid just filled up. Failed placements notify nobody.

use crate::core::PlayerColor;

use super::read_only::GameResult;

/// Receiver for engine status changes.
pub trait GameListener: Send {
    /// The turn passed to `current`.
    fn turn_changed(&mut self, current: PlayerColor);

    /// The grid is full and `result` is final.
    fn game_over(&mut self, result: &GameResult);
}

/// Status change as a value, for listeners that queue or forward events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    TurnChanged(PlayerColor),
    GameOver(GameResult),
}

/// Listener that forwards every event to a channel.
///
/// Sending to a closed channel is ignored.
#[derive(Debug)]
pub struct ChannelListener {
    sender: std::sync::mpsc::Sender<StatusEvent>,
}

impl ChannelListener {
    /// Create a listener and the receiving end of its channel.
    #[must_use]
    pub fn new() -> (Self, std::sync::mpsc::Receiver<StatusEvent>) {
        let (sender, receiver) = std::sync::mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl GameListener for ChannelListener {
    fn turn_changed(&mut self, current: PlayerColor) {
        let _ = self.sender.send(StatusEvent::TurnChanged(current));
    }

    fn game_over(&mut self, result: &GameResult) {
        let _ = self.sender.send(StatusEvent::GameOver(*result));
    }
}
