// src/time_ctrl/config.rs
//! Конфигурация лимитов времени. Меняется только через чат-команды.

use serde::{Deserialize, Serialize};

/// Сентинел "таймаут хода не настроен": хостовый таймер не трогаем.
pub const TURN_TIMEOUT_DEFAULT: i32 = 91;

/// Сентинел "общий лимит на матч выключен".
pub const TOTAL_TIMEOUT_DISABLED: i32 = -1;

/// Текущие настройки таймаутов.
///
/// Инвариант: выключенное значение никогда не участвует в сравнениях триггеров.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Лимит на один ход (секунды, 1..=90), либо `TURN_TIMEOUT_DEFAULT`.
    pub turn_timeout_secs: i32,
    /// Общий бюджет на все ходы (секунды, >= 1), либо `TOTAL_TIMEOUT_DISABLED`.
    pub total_timeout_secs: i32,
}

impl TimerConfig {
    /// Дефолтный конфиг: оба лимита выключены, движок — no-op.
    pub const fn new() -> Self {
        Self {
            turn_timeout_secs: TURN_TIMEOUT_DEFAULT,
            total_timeout_secs: TOTAL_TIMEOUT_DISABLED,
        }
    }

    /// Сбросить оба лимита в значения по умолчанию.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::new();
    }

    /// Настроен ли укороченный таймер хода.
    pub fn turn_timeout_enabled(&self) -> bool {
        self.turn_timeout_secs < TURN_TIMEOUT_DEFAULT
    }

    /// Включён ли общий лимит на матч.
    pub fn total_timeout_enabled(&self) -> bool {
        self.total_timeout_secs > 0
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new()
    }
}
