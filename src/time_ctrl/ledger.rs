// src/time_ctrl/ledger.rs
//! Учёт секунд по сторонам: открытый ход + "банк" уже закрытых ходов.

use serde::{Deserialize, Serialize};

use crate::domain::PlayerSlot;

/// Секунды одной стороны.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SlotUsage {
    /// Секунды текущего, ещё открытого хода.
    pub turn_secs_used: i32,
    /// Секунды всех уже закрытых ходов. Только растёт, и только в момент
    /// закрытия хода этой стороны.
    pub total_secs_banked: i32,
}

/// Учёт времени обеих сторон матча.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct TimeLedger {
    local: SlotUsage,
    remote: SlotUsage,
}

impl TimeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, slot: PlayerSlot) -> &SlotUsage {
        match slot {
            PlayerSlot::Local => &self.local,
            PlayerSlot::Remote => &self.remote,
        }
    }

    fn slot_mut(&mut self, slot: PlayerSlot) -> &mut SlotUsage {
        match slot {
            PlayerSlot::Local => &mut self.local,
            PlayerSlot::Remote => &mut self.remote,
        }
    }

    /// Выставить секунды открытого хода стороны (отрицательное — это 0).
    pub fn set_open_turn(&mut self, slot: PlayerSlot, secs: i32) {
        self.slot_mut(slot).turn_secs_used = secs.max(0);
    }

    /// Закрыть ход стороны: перенести секунды открытого хода в банк.
    pub fn bank_turn(&mut self, slot: PlayerSlot) {
        let usage = self.slot_mut(slot);
        usage.total_secs_banked += usage.turn_secs_used;
        usage.turn_secs_used = 0;
    }

    /// Секунды текущего открытого хода стороны.
    pub fn open_turn_secs(&self, slot: PlayerSlot) -> i32 {
        self.slot(slot).turn_secs_used
    }

    /// Банк закрытых ходов стороны.
    pub fn banked_secs(&self, slot: PlayerSlot) -> i32 {
        self.slot(slot).total_secs_banked
    }

    /// Сколько всего потрачено стороной (банк + открытый ход).
    pub fn spent_secs(&self, slot: PlayerSlot) -> i32 {
        let usage = self.slot(slot);
        usage.total_secs_banked + usage.turn_secs_used
    }
}
