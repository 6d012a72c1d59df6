use serde::{Deserialize, Serialize};

/// Успешно распознанная команда смены таймера.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerChangeCommand {
    /// Новый лимит на ход (секунды, 1..=90).
    pub turn_secs: i32,
    /// Новый общий бюджет (секунды), если задан третьим токеном.
    /// None — двухтокенная форма, общий лимит выключается.
    pub total_secs: Option<i32>,
}

/// Итог обработки чат-сообщения.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatOutcome {
    /// Не наша команда (или чужой автор) — конфиг не трогали.
    NotApplicable,
    /// Команда применена, конфиг обновлён.
    Applied { feedback: String },
    /// Команда не прошла валидацию, конфиг сброшен к дефолтам.
    Rejected { feedback: String },
}
