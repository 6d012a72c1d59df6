// src/chat/mod.rs
//! Чат-команды /timerchange и /tc.
//!
//! Парсер строгий: любая ошибка откатывает оба лимита к значениям по
//! умолчанию, чтобы не оставлять конфигурацию наполовину применённой.

pub mod command;
pub mod errors;
pub mod parser;

pub use command::{ChatOutcome, TimerChangeCommand};
pub use errors::CommandError;
pub use parser::{apply_chat_message, is_timer_change_command, parse_timer_change};
