use serde::{Deserialize, Serialize};

use crate::domain::PlayerSlot;
use crate::time_ctrl::TimerController;

/// DTO состояния таймера для фронта/оверлея.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerStatusDto {
    /// Лимит на ход, если настроен.
    pub turn_timeout_secs: Option<i32>,
    /// Общий бюджет на матч, если включён.
    pub total_timeout_secs: Option<i32>,
    /// Сколько секунд уже потратила каждая сторона (банк + открытый ход).
    pub local_spent_secs: i32,
    pub remote_spent_secs: i32,
    /// Идёт ли сейчас матч.
    pub match_active: bool,
}

/// Собрать DTO по текущему состоянию контроллера.
pub fn build_timer_status(ctrl: &TimerController) -> TimerStatusDto {
    let (local_spent, remote_spent) = match &ctrl.match_state {
        Some(state) => (
            state.ledger.spent_secs(PlayerSlot::Local),
            state.ledger.spent_secs(PlayerSlot::Remote),
        ),
        None => (0, 0),
    };

    TimerStatusDto {
        turn_timeout_secs: ctrl
            .config
            .turn_timeout_enabled()
            .then_some(ctrl.config.turn_timeout_secs),
        total_timeout_secs: ctrl
            .config
            .total_timeout_enabled()
            .then_some(ctrl.config.total_timeout_secs),
        local_spent_secs: local_spent,
        remote_spent_secs: remote_spent,
        match_active: ctrl.match_state.is_some(),
    }
}
