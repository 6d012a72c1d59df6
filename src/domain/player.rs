use serde::{Deserialize, Serialize};

/// Одна из двух сторон матча.
///
/// Движку не нужно знать больше: либо это "наш" игрок, либо оппонент.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    Local,
    Remote,
}

impl PlayerSlot {
    /// Противоположная сторона.
    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::Local => PlayerSlot::Remote,
            PlayerSlot::Remote => PlayerSlot::Local,
        }
    }

    /// Определить активную сторону по "цвету" из хоста.
    ///
    /// Конкретный хостовый тип цвета нам не важен — достаточно сравнения
    /// активного цвета с цветом локального игрока.
    pub fn from_active_color<C: PartialEq>(active: &C, local: &C) -> Self {
        if active == local {
            PlayerSlot::Local
        } else {
            PlayerSlot::Remote
        }
    }
}
