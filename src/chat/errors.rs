use thiserror::Error;

/// Ошибки разбора команды таймера.
///
/// Все они восстанавливаются локально (откат конфига + строка фидбека),
/// наружу из парсера ничего не пролетает. Чужой автор — не ошибка,
/// а `ChatOutcome::NotApplicable`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("токен «{0}» не является числом")]
    Parse(String),

    #[error("значение {0} вне допустимого диапазона")]
    Range(i32),

    #[error("неверное количество токенов: {0}")]
    Arity(usize),
}
