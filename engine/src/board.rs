//! 棋盘状态
//!
//! 纯存储层：格子读写、落子与回退、宫与斜线禁用对的判定。
//! 走法合法性不在这里裁定。

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};
use crate::coord::Coord;
use crate::piece::{Piece, PieceKind, Side};

/// 宫内看似 45 度却不在斜线上的格子对（两个方向都禁止）
const FORBIDDEN_DIAGONALS: [(Coord, Coord); 8] = [
    // 红方宫：e1/e3 与 d2/f2 之间
    (Coord::new_unchecked(4, 0), Coord::new_unchecked(3, 1)),
    (Coord::new_unchecked(4, 0), Coord::new_unchecked(5, 1)),
    (Coord::new_unchecked(4, 2), Coord::new_unchecked(3, 1)),
    (Coord::new_unchecked(4, 2), Coord::new_unchecked(5, 1)),
    // 蓝方宫：e8/e10 与 d9/f9 之间
    (Coord::new_unchecked(4, 7), Coord::new_unchecked(3, 8)),
    (Coord::new_unchecked(4, 7), Coord::new_unchecked(5, 8)),
    (Coord::new_unchecked(4, 9), Coord::new_unchecked(3, 8)),
    (Coord::new_unchecked(4, 9), Coord::new_unchecked(5, 8)),
];

/// 一次落子的完整记录，足以原样回退
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Coord,
    pub to: Coord,
    /// 被移动的棋子
    pub moved: Option<Piece>,
    /// 目标格上原有的棋子（被吃方）
    pub captured: Option<Piece>,
}

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 9x10 棋盘，索引为 row * 9 + col，使用 Vec 以支持 serde
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![None; BOARD_CELLS],
        }
    }

    /// 创建初始棋盘
    pub fn initial() -> Self {
        let mut board = Self::empty();

        // 红方（1-4 行）
        // 底线：車象馬士 漢 士象馬車
        board.set(Coord::new_unchecked(0, 0), Some(Piece::new(PieceKind::Chariot, Side::Red)));
        board.set(Coord::new_unchecked(1, 0), Some(Piece::new(PieceKind::Elephant, Side::Red)));
        board.set(Coord::new_unchecked(2, 0), Some(Piece::new(PieceKind::Horse, Side::Red)));
        board.set(Coord::new_unchecked(3, 0), Some(Piece::new(PieceKind::Guard, Side::Red)));
        board.set(Coord::new_unchecked(5, 0), Some(Piece::new(PieceKind::Guard, Side::Red)));
        board.set(Coord::new_unchecked(6, 0), Some(Piece::new(PieceKind::Elephant, Side::Red)));
        board.set(Coord::new_unchecked(7, 0), Some(Piece::new(PieceKind::Horse, Side::Red)));
        board.set(Coord::new_unchecked(8, 0), Some(Piece::new(PieceKind::Chariot, Side::Red)));

        // 漢居宫心前一格 e2
        board.set(Coord::new_unchecked(4, 1), Some(Piece::new(PieceKind::General, Side::Red)));

        // 红方包
        board.set(Coord::new_unchecked(1, 2), Some(Piece::new(PieceKind::Cannon, Side::Red)));
        board.set(Coord::new_unchecked(7, 2), Some(Piece::new(PieceKind::Cannon, Side::Red)));

        // 红方兵
        for col in (0..BOARD_WIDTH as u8).step_by(2) {
            board.set(Coord::new_unchecked(col, 3), Some(Piece::new(PieceKind::Soldier, Side::Red)));
        }

        // 蓝方（7-10 行，镜像布局）
        board.set(Coord::new_unchecked(0, 9), Some(Piece::new(PieceKind::Chariot, Side::Blue)));
        board.set(Coord::new_unchecked(1, 9), Some(Piece::new(PieceKind::Elephant, Side::Blue)));
        board.set(Coord::new_unchecked(2, 9), Some(Piece::new(PieceKind::Horse, Side::Blue)));
        board.set(Coord::new_unchecked(3, 9), Some(Piece::new(PieceKind::Guard, Side::Blue)));
        board.set(Coord::new_unchecked(5, 9), Some(Piece::new(PieceKind::Guard, Side::Blue)));
        board.set(Coord::new_unchecked(6, 9), Some(Piece::new(PieceKind::Elephant, Side::Blue)));
        board.set(Coord::new_unchecked(7, 9), Some(Piece::new(PieceKind::Horse, Side::Blue)));
        board.set(Coord::new_unchecked(8, 9), Some(Piece::new(PieceKind::Chariot, Side::Blue)));

        board.set(Coord::new_unchecked(4, 8), Some(Piece::new(PieceKind::General, Side::Blue)));

        board.set(Coord::new_unchecked(1, 7), Some(Piece::new(PieceKind::Cannon, Side::Blue)));
        board.set(Coord::new_unchecked(7, 7), Some(Piece::new(PieceKind::Cannon, Side::Blue)));

        for col in (0..BOARD_WIDTH as u8).step_by(2) {
            board.set(Coord::new_unchecked(col, 6), Some(Piece::new(PieceKind::Soldier, Side::Blue)));
        }

        board
    }

    /// 获取指定位置的棋子
    pub fn get(&self, at: Coord) -> Option<Piece> {
        self.squares[at.to_index()]
    }

    /// 设置指定位置的棋子
    pub fn set(&mut self, at: Coord, piece: Option<Piece>) {
        self.squares[at.to_index()] = piece;
    }

    /// 落子（不检查规则），返回可用于回退的记录
    pub fn apply(&mut self, from: Coord, to: Coord) -> MoveRecord {
        let moved = self.get(from);
        let captured = self.get(to);
        self.set(from, None);
        self.set(to, moved);
        MoveRecord {
            from,
            to,
            moved,
            captured,
        }
    }

    /// 按记录原样恢复两个格子
    pub fn undo(&mut self, record: &MoveRecord) {
        self.set(record.from, record.moved);
        self.set(record.to, record.captured);
    }

    /// 两格之间是否为禁用的宫内斜线对
    pub fn is_forbidden_diagonal(a: Coord, b: Coord) -> bool {
        FORBIDDEN_DIAGONALS
            .iter()
            .any(|&(p, q)| (a == p && b == q) || (a == q && b == p))
    }

    /// 查找指定阵营的将
    pub fn find_general(&self, side: Side) -> Option<Coord> {
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let at = Coord::new_unchecked(col as u8, row as u8);
                if let Some(piece) = self.get(at) {
                    if piece.kind == PieceKind::General && piece.side == side {
                        return Some(at);
                    }
                }
            }
        }
        None
    }

    /// 获取指定阵营的所有棋子位置
    pub fn pieces(&self, side: Side) -> Vec<(Coord, Piece)> {
        self.all_pieces()
            .into_iter()
            .filter(|(_, piece)| piece.side == side)
            .collect()
    }

    /// 获取所有棋子
    pub fn all_pieces(&self) -> Vec<(Coord, Piece)> {
        let mut result = Vec::new();
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let at = Coord::new_unchecked(col as u8, row as u8);
                if let Some(piece) = self.get(at) {
                    result.push((at, piece));
                }
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> Coord {
        text.parse().unwrap()
    }

    #[test]
    fn test_initial_board() {
        let board = Board::initial();

        // 两将
        assert_eq!(board.get(at("e2")), Some(Piece::new(PieceKind::General, Side::Red)));
        assert_eq!(board.get(at("e9")), Some(Piece::new(PieceKind::General, Side::Blue)));

        // 包
        assert_eq!(board.get(at("b3")), Some(Piece::new(PieceKind::Cannon, Side::Red)));
        assert_eq!(board.get(at("h8")), Some(Piece::new(PieceKind::Cannon, Side::Blue)));

        // 角上的車
        assert_eq!(board.get(at("a1")), Some(Piece::new(PieceKind::Chariot, Side::Red)));
        assert_eq!(board.get(at("i10")), Some(Piece::new(PieceKind::Chariot, Side::Blue)));

        // 卒列
        for col in ["a", "c", "e", "g", "i"] {
            assert_eq!(
                board.get(at(&format!("{}7", col))),
                Some(Piece::new(PieceKind::Soldier, Side::Blue))
            );
        }

        // 宫心是空的
        assert!(board.get(at("e1")).is_none());
        assert!(board.get(at("e10")).is_none());

        // 每方 16 子
        assert_eq!(board.pieces(Side::Red).len(), 16);
        assert_eq!(board.pieces(Side::Blue).len(), 16);
    }

    #[test]
    fn test_apply_and_undo() {
        let mut board = Board::initial();
        let before = board.clone();

        let record = board.apply(at("c7"), at("c6"));
        assert_eq!(record.moved, Some(Piece::new(PieceKind::Soldier, Side::Blue)));
        assert!(record.captured.is_none());
        assert!(board.get(at("c7")).is_none());
        assert_eq!(board.get(at("c6")), Some(Piece::new(PieceKind::Soldier, Side::Blue)));

        board.undo(&record);
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_capture_and_undo() {
        let mut board = Board::empty();
        board.set(at("d4"), Some(Piece::new(PieceKind::Chariot, Side::Red)));
        board.set(at("d8"), Some(Piece::new(PieceKind::Soldier, Side::Blue)));
        let before = board.clone();

        let record = board.apply(at("d4"), at("d8"));
        assert_eq!(record.captured, Some(Piece::new(PieceKind::Soldier, Side::Blue)));
        assert_eq!(board.get(at("d8")), Some(Piece::new(PieceKind::Chariot, Side::Red)));

        board.undo(&record);
        assert_eq!(board, before);
    }

    #[test]
    fn test_forbidden_diagonals() {
        // 两个方向都禁止
        assert!(Board::is_forbidden_diagonal(at("e1"), at("d2")));
        assert!(Board::is_forbidden_diagonal(at("d2"), at("e1")));
        assert!(Board::is_forbidden_diagonal(at("e3"), at("f2")));
        assert!(Board::is_forbidden_diagonal(at("f9"), at("e10")));

        // 画了斜线的格子对不受限
        assert!(!Board::is_forbidden_diagonal(at("d1"), at("e2")));
        assert!(!Board::is_forbidden_diagonal(at("e2"), at("f3")));
        assert!(!Board::is_forbidden_diagonal(at("d10"), at("e9")));
    }

    #[test]
    fn test_find_general() {
        let board = Board::initial();
        assert_eq!(board.find_general(Side::Red), Some(at("e2")));
        assert_eq!(board.find_general(Side::Blue), Some(at("e9")));

        let empty = Board::empty();
        assert_eq!(empty.find_general(Side::Red), None);
    }
}
