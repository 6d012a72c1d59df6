// src/time_ctrl/mod.rs
//! Контроль времени матча (таймер хода + общий лимит).
//!
//! Здесь собираем:
//! - конфигурацию лимитов (`TimerConfig`);
//! - учёт секунд по сторонам (`TimeLedger`);
//! - состояние матча и логику тика (`MatchTimerState`);
//! - фасад `TimerController`, который удобно дергать из глю-кода хоста.

pub mod config;
pub mod engine;
pub mod ledger;

pub use config::{TimerConfig, TOTAL_TIMEOUT_DISABLED, TURN_TIMEOUT_DEFAULT};
pub use engine::MatchTimerState;
pub use ledger::TimeLedger;

use crate::api::{HostEffect, TickOutcome};
use crate::chat::{apply_chat_message, ChatOutcome};
use crate::domain::TimerSnapshot;

/// Высокоуровневый контроллер: конфиг + состояние текущего матча.
///
/// Конфиг живёт между матчами, состояние — только внутри одного матча.
#[derive(Clone, Debug, Default)]
pub struct TimerController {
    pub config: TimerConfig,
    /// None — матч сейчас не идёт.
    pub match_state: Option<MatchTimerState>,
}

impl TimerController {
    /// Создать контроллер с дефолтным (полностью выключенным) конфигом.
    pub fn new() -> Self {
        Self {
            config: TimerConfig::new(),
            match_state: None,
        }
    }

    /// Старт матча (эквивалент GameInfo-нотификации хоста).
    ///
    /// Если настроен укороченный таймер хода — просим хост показать
    /// обратный отсчёт и выставить свой лимит раунда. Если конфиг
    /// дефолтный, хостовый таймер не трогаем вообще.
    pub fn on_match_start(&mut self) -> Vec<HostEffect> {
        self.match_state = Some(MatchTimerState::new());

        let mut effects = Vec::new();
        if self.config.turn_timeout_enabled() {
            effects.push(HostEffect::EnableVisibleCountdown);
            effects.push(HostEffect::SetRoundTimeLimit(self.config.turn_timeout_secs));
        }
        effects
    }

    /// Матч закончился — состояние матча не переживает сам матч.
    pub fn on_match_end(&mut self) {
        self.match_state = None;
    }

    /// Один тик опроса. До on_match_start ничего не делаем.
    pub fn on_poll_tick(&mut self, snapshot: &TimerSnapshot) -> TickOutcome {
        match self.match_state.as_mut() {
            Some(state) => state.on_poll_tick(&self.config, snapshot),
            None => TickOutcome::noop(),
        }
    }

    /// Входящее чат-сообщение.
    ///
    /// Если это команда локального игрока — конфиг уже обновлён (или сброшен),
    /// а возвращённый эффект несёт фидбек для локального чата.
    pub fn on_chat_message(
        &mut self,
        text: &str,
        author: &str,
        local_player_name: &str,
    ) -> Option<HostEffect> {
        match apply_chat_message(text, author, local_player_name, &mut self.config) {
            ChatOutcome::NotApplicable => None,
            ChatOutcome::Applied { feedback } | ChatOutcome::Rejected { feedback } => {
                Some(HostEffect::SendLocalChatFeedback(feedback))
            }
        }
    }
}
