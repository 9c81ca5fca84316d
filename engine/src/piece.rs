//! 棋子定义

use serde::{Deserialize, Serialize};

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 红方（位于 1-4 行一侧，后手）
    Red,
    /// 蓝方（位于 7-10 行一侧，先手）
    Blue,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// 阵营名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Red => "red",
            Side::Blue => "blue",
        }
    }
}

/// 棋子种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// 卒/兵
    Soldier,
    /// 包
    Cannon,
    /// 車
    Chariot,
    /// 馬
    Horse,
    /// 象
    Elephant,
    /// 士
    Guard,
    /// 將/漢
    General,
}

impl PieceKind {
    /// 棋子名称
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Soldier => "Soldier",
            PieceKind::Cannon => "Cannon",
            PieceKind::Chariot => "Chariot",
            PieceKind::Horse => "Horse",
            PieceKind::Elephant => "Elephant",
            PieceKind::Guard => "Guard",
            PieceKind::General => "General",
        }
    }

    /// 单步走法允许的最大步距（列距加行距）
    ///
    /// 滑行类取棋盘上限 10，跳跃类取整段跳跃的总步距。
    pub fn max_steps(&self) -> u8 {
        match self {
            PieceKind::Soldier | PieceKind::Guard | PieceKind::General => 1,
            PieceKind::Horse => 3,
            PieceKind::Elephant => 5,
            PieceKind::Chariot | PieceKind::Cannon => 10,
        }
    }

    /// 跳跃类棋子的长腿步距（馬 2，象 3），其余棋子为 None
    pub fn leap(&self) -> Option<u8> {
        match self {
            PieceKind::Horse => Some(2),
            PieceKind::Elephant => Some(3),
            _ => None,
        }
    }
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    /// 创建新棋子
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Red.opponent(), Side::Blue);
        assert_eq!(Side::Blue.opponent(), Side::Red);
    }

    #[test]
    fn test_max_steps() {
        assert_eq!(PieceKind::Soldier.max_steps(), 1);
        assert_eq!(PieceKind::Guard.max_steps(), 1);
        assert_eq!(PieceKind::General.max_steps(), 1);
        assert_eq!(PieceKind::Horse.max_steps(), 3);
        assert_eq!(PieceKind::Elephant.max_steps(), 5);
        assert_eq!(PieceKind::Chariot.max_steps(), 10);
        assert_eq!(PieceKind::Cannon.max_steps(), 10);
    }

    #[test]
    fn test_leap() {
        assert_eq!(PieceKind::Horse.leap(), Some(2));
        assert_eq!(PieceKind::Elephant.leap(), Some(3));
        assert_eq!(PieceKind::Chariot.leap(), None);
        assert_eq!(PieceKind::General.leap(), None);
    }
}
