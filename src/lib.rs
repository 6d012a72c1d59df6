//! Клиентский контроллер таймера хода для матча 1 на 1.
//!
//! Хост (игровой клиент) дергает контроллер каждый кадр опроса и на каждое
//! чат-сообщение; сам движок ничего не рисует и никуда не ходит по сети —
//! он только считает секунды и возвращает эффекты, которые хост применяет.
//!
//! Модули:
//! - domain — стороны матча и снапшот тика;
//! - time_ctrl — конфигурация, учёт секунд, логика тика и фасад;
//! - chat — парсер команд /timerchange и /tc;
//! - api — эффекты для хоста и DTO для фронта.

pub mod api;
pub mod chat;
pub mod domain;
pub mod time_ctrl;

pub use time_ctrl::TimerController;

/// Имя мода, как его видит лоадер хоста.
pub const MOD_NAME: &str = "TimerChange";

/// Версия мода (итерация с общим лимитом и чат-командами).
pub const MOD_VERSION: u32 = 2;
