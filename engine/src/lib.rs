//! 韩国将棋（Janggi）规则引擎
//!
//! 包含:
//! - 坐标、棋子、棋盘等核心数据结构
//! - 七类棋子的走法合法性判定（滑行、跳跃、单步与宫内斜线）
//! - 将军检测与连续被将的胜负裁定
//! - 对局状态机（走法受理、试走回退、让手、开局换象马）
//! - 只读快照与控制台渲染

mod board;
mod constants;
mod coord;
mod display;
mod error;
mod game;
mod piece;
mod rules;
mod snapshot;

pub use board::{Board, MoveRecord};
pub use constants::*;
pub use coord::Coord;
pub use display::render;
pub use error::{EngineError, Result};
pub use game::{Game, GameResult, MoveCounts, TurnSummary};
pub use piece::{Piece, PieceKind, Side};
pub use rules::MoveValidator;
pub use snapshot::{BoardSnapshot, CellView};
