//! Доменная модель матча: стороны, снапшот тика опроса, вид оставшегося времени.

pub mod player;
pub mod snapshot;

pub use player::PlayerSlot;
pub use snapshot::{RemainingTimeView, TimerSnapshot};
