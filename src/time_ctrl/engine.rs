// src/time_ctrl/engine.rs
//! Состояние таймера одного матча и логика тика опроса.

use serde::{Deserialize, Serialize};

use crate::api::{HostEffect, TickOutcome};
use crate::domain::{PlayerSlot, RemainingTimeView, TimerSnapshot};

use super::{TimeLedger, TimerConfig};

/// Состояние таймера в рамках одного матча.
///
/// Создаётся на старте матча, выбрасывается по его окончании;
/// между матчами ничего не переносится.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchTimerState {
    pub ledger: TimeLedger,
    /// Последняя увиденная активная сторона (None — ещё не знаем).
    pub active_player: Option<PlayerSlot>,
    /// Латч "ход уже завершён": EndTurn срабатывает максимум раз за ход,
    /// сколько бы тиков ни пришло при remaining == 0.
    pub turn_ended: bool,
}

impl MatchTimerState {
    pub fn new() -> Self {
        Self {
            ledger: TimeLedger::new(),
            active_player: None,
            turn_ended: false,
        }
    }

    /// Один тик опроса от хоста.
    ///
    /// Пока оба лимита дефолтные — полный no-op: хостовый таймер живёт сам.
    pub fn on_poll_tick(&mut self, config: &TimerConfig, snapshot: &TimerSnapshot) -> TickOutcome {
        if !config.turn_timeout_enabled() && !config.total_timeout_enabled() {
            return TickOutcome::noop();
        }

        let elapsed = elapsed_since_round_start(snapshot);
        // +1: видимый "0" держится один лишний тик, и только потом ход завершается.
        let remaining = ((snapshot.round_time_limit + 1.0 - elapsed as f32).floor() as i32).max(0);
        let limit_secs = (snapshot.round_time_limit.floor() as i32).max(0);

        let active = snapshot.active_player;
        let player_changed = self.active_player != Some(active);
        self.active_player = Some(active);

        self.ledger.set_open_turn(active, elapsed.min(limit_secs));
        if player_changed {
            // Ход противоположной стороны только что закрылся — фиксируем его в банке.
            self.ledger.bank_turn(active.opponent());
        }

        let mut effects = Vec::new();

        match active {
            PlayerSlot::Local => {
                if remaining == 0 && !self.turn_ended {
                    self.turn_ended = true;
                    effects.push(HostEffect::EndTurn);
                    effects.push(HostEffect::ShowEndTurnBanner { manual: false });
                }

                if config.total_timeout_enabled()
                    && config.total_timeout_secs - self.ledger.spent_secs(PlayerSlot::Local) < 0
                {
                    // Не латчится: повторные запросы после конца матча
                    // хост игнорирует сам.
                    effects.push(HostEffect::ForfeitMatch);
                }
            }
            PlayerSlot::Remote => {
                // Начался чужой ход — перевзводим триггер конца хода.
                self.turn_ended = false;
            }
        }

        TickOutcome {
            effects,
            view: self.remaining_view(config),
        }
    }

    /// Сколько секунд до форфейта осталось каждой стороне.
    fn remaining_view(&self, config: &TimerConfig) -> RemainingTimeView {
        if !config.total_timeout_enabled() {
            return RemainingTimeView::default();
        }
        RemainingTimeView {
            local: (config.total_timeout_secs - self.ledger.spent_secs(PlayerSlot::Local)).max(0),
            remote: (config.total_timeout_secs - self.ledger.spent_secs(PlayerSlot::Remote)).max(0),
        }
    }
}

impl Default for MatchTimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Сколько целых секунд прошло с начала раунда.
///
/// Если хост ещё не запустил часы раунда — времени не прошло.
fn elapsed_since_round_start(snapshot: &TimerSnapshot) -> i32 {
    match snapshot.round_timer_start {
        Some(start) => ((snapshot.now - start).floor() as i32).max(0),
        None => 0,
    }
}
