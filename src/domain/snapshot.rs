use serde::{Deserialize, Serialize};

use super::PlayerSlot;

/// Снапшот одного тика опроса.
///
/// Читается из хоста заново каждый кадр и нигде не хранится.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// Момент старта таймера раунда (None — хост ещё не запустил часы).
    pub round_timer_start: Option<f32>,
    /// Лимит времени раунда по мнению хоста (секунды).
    pub round_time_limit: f32,
    /// Текущее время хоста.
    pub now: f32,
    /// Чья сторона сейчас активна.
    pub active_player: PlayerSlot,
}

/// Сколько секунд до форфейта осталось каждой стороне.
///
/// Имеет смысл только при включённом общем лимите; рисует это уже фронт.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingTimeView {
    pub local: i32,
    pub remote: i32,
}
