//! 只读棋盘快照
//!
//! 显示层与引擎的边界：格子到可选 {阵营, 种类} 的映射，
//! 附带回合与步数摘要。快照不反向影响对局状态。

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};
use crate::coord::Coord;
use crate::game::{Game, GameResult, MoveCounts};
use crate::piece::{PieceKind, Side};

/// 单格内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub side: Side,
    pub kind: PieceKind,
}

/// 棋盘快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// 按 row * 9 + col 排列的 90 格
    pub cells: Vec<Option<CellView>>,
    /// 当前走子方
    pub current_turn: Side,
    /// 双方已走步数
    pub move_counts: MoveCounts,
    /// 对局结果
    pub result: GameResult,
}

impl BoardSnapshot {
    /// 采集当前对局的快照
    pub fn capture(game: &Game) -> Self {
        let mut cells = Vec::with_capacity(BOARD_CELLS);
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let at = Coord::new_unchecked(col as u8, row as u8);
                cells.push(game.board().get(at).map(|piece| CellView {
                    side: piece.side,
                    kind: piece.kind,
                }));
            }
        }
        Self {
            cells,
            current_turn: game.current_turn(),
            move_counts: game.move_counts(),
            result: game.game_result(),
        }
    }

    /// 读取某格内容
    pub fn cell(&self, at: Coord) -> Option<CellView> {
        self.cells[at.to_index()]
    }
}
