// src/chat/parser.rs
//! Разбор и применение команд /timerchange и /tc.

use crate::time_ctrl::config::{TimerConfig, TOTAL_TIMEOUT_DISABLED, TURN_TIMEOUT_DEFAULT};

use super::{ChatOutcome, CommandError, TimerChangeCommand};

/// Текст фидбека при любой невалидной команде.
const REJECTED_FEEDBACK: &str =
    "Invalid command. Turn timeout set to default. Total timeout disabled.";

/// Разделители пары "минуты:секунды" в третьем токене.
const PAIR_SEPARATORS: [char; 3] = [':', '.', ','];

/// Является ли сообщение нашей командой (первый токен, без учёта регистра).
pub fn is_timer_change_command(text: &str) -> bool {
    match text.split_whitespace().next() {
        Some(first) => {
            let first = first.to_ascii_lowercase();
            first == "/timerchange" || first == "/tc"
        }
        None => false,
    }
}

/// Обработать входящее чат-сообщение и применить его к конфигу.
///
/// Реагируем только на эхо собственных команд локального игрока:
/// это локальная настройка клиента, а не сетевой протокол.
pub fn apply_chat_message(
    text: &str,
    author: &str,
    local_player_name: &str,
    config: &mut TimerConfig,
) -> ChatOutcome {
    if !is_timer_change_command(text) {
        return ChatOutcome::NotApplicable;
    }
    if author != local_player_name {
        return ChatOutcome::NotApplicable;
    }

    match parse_timer_change(text) {
        Ok(cmd) => {
            config.turn_timeout_secs = cmd.turn_secs;
            config.total_timeout_secs = cmd.total_secs.unwrap_or(TOTAL_TIMEOUT_DISABLED);
            ChatOutcome::Applied {
                feedback: applied_feedback(config),
            }
        }
        Err(_) => {
            // Любая ошибка — полный откат, наполовину применённых команд не бывает.
            config.reset_to_defaults();
            ChatOutcome::Rejected {
                feedback: REJECTED_FEEDBACK.to_string(),
            }
        }
    }
}

/// Разобрать текст команды (фильтр по автору — забота `apply_chat_message`).
pub fn parse_timer_change(text: &str) -> Result<TimerChangeCommand, CommandError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.len() {
        2 => Ok(TimerChangeCommand {
            turn_secs: parse_turn_secs(tokens[1])?,
            total_secs: None,
        }),
        3 => Ok(TimerChangeCommand {
            turn_secs: parse_turn_secs(tokens[1])?,
            total_secs: Some(parse_total_budget(tokens[2])?),
        }),
        n => Err(CommandError::Arity(n)),
    }
}

/// Второй токен: секунды на ход, строго 0 < n < 91.
fn parse_turn_secs(token: &str) -> Result<i32, CommandError> {
    let secs: i32 = token
        .parse()
        .map_err(|_| CommandError::Parse(token.to_string()))?;
    if secs > 0 && secs < TURN_TIMEOUT_DEFAULT {
        Ok(secs)
    } else {
        Err(CommandError::Range(secs))
    }
}

/// Третий токен: либо целые секунды, либо пара "минуты<sep>секунды"
/// (например "2:30" -> 150). Итог обязан быть > 0.
fn parse_total_budget(token: &str) -> Result<i32, CommandError> {
    let total = match token.find(&PAIR_SEPARATORS[..]) {
        Some(pos) => {
            let minutes: i32 = token[..pos]
                .parse()
                .map_err(|_| CommandError::Parse(token.to_string()))?;
            let seconds: i32 = token[pos + 1..]
                .parse()
                .map_err(|_| CommandError::Parse(token.to_string()))?;
            minutes * 60 + seconds
        }
        None => token
            .parse()
            .map_err(|_| CommandError::Parse(token.to_string()))?,
    };

    if total > 0 {
        Ok(total)
    } else {
        Err(CommandError::Range(total))
    }
}

/// Человекочитаемое подтверждение новых настроек.
fn applied_feedback(config: &TimerConfig) -> String {
    if config.total_timeout_enabled() {
        format!(
            "Turn timeout set to {} seconds. Total timeout set to {} seconds.",
            config.turn_timeout_secs, config.total_timeout_secs
        )
    } else {
        format!(
            "Turn timeout set to {} seconds. Total timeout disabled.",
            config.turn_timeout_secs
        )
    }
}
