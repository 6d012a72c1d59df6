//! Внешняя поверхность движка.
//!
//! Здесь описываются:
//! - эффекты (effects.rs) — всё, что движок просит сделать у хоста;
//! - DTO (dto.rs) — удобные структуры для фронта/оверлея.

pub mod dto;
pub mod effects;

pub use dto::*;
pub use effects::*;
