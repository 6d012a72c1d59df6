use serde::{Deserialize, Serialize};

use crate::domain::RemainingTimeView;

/// Запрос движка к хосту.
///
/// Fire-and-forget: движок не ждёт подтверждения, дедупликация повторных
/// запросов — на стороне хоста.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEffect {
    /// Показать нативный обратный отсчёт хоста.
    EnableVisibleCountdown,
    /// Выставить хостовый лимит времени раунда (секунды).
    SetRoundTimeLimit(i32),
    /// Завершить текущий ход.
    EndTurn,
    /// Показать баннер конца хода. manual = false — ход завершён таймером.
    ShowEndTurnBanner { manual: bool },
    /// Сдать матч за локального игрока.
    ForfeitMatch,
    /// Отправить локальное сообщение в чат (фидбек по команде).
    SendLocalChatFeedback(String),
}

/// Результат одного тика опроса: эффекты для хоста + данные для отрисовки.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub effects: Vec<HostEffect>,
    pub view: RemainingTimeView,
}

impl TickOutcome {
    /// Тик, в котором движку нечего делать.
    pub fn noop() -> Self {
        Self::default()
    }
}
