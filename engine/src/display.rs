//! 棋盘的控制台渲染
//!
//! 每格五个字符：阵营首字母、点、名称前三个字母（如 `R.Cha`）。
//! 宫的两条底边用斜线标出。纯函数，不做任何 I/O。

use crate::board::Board;
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::coord::Coord;
use crate::piece::{Piece, Side};

/// 格子宽度（字符数）
const CELL_WIDTH: usize = 5;

/// 渲染整张棋盘为多行文本
pub fn render(board: &Board) -> String {
    let plain_divider = divider_line();
    let palace_top = palace_line('\\', '/');
    let palace_bottom = palace_line('/', '\\');

    let mut out = String::new();
    out.push_str(&plain_divider);
    out.push('\n');

    // 列标题
    out.push_str("  | ");
    for col in 0..BOARD_WIDTH as u8 {
        out.push((b'a' + col) as char);
        out.push_str("    |");
    }
    out.push('\n');
    out.push_str(&plain_divider);
    out.push('\n');

    for row in 0..BOARD_HEIGHT as u8 {
        let rank = row + 1;
        if rank < 10 {
            out.push('_');
        }
        out.push_str(&rank.to_string());
        out.push_str("| ");

        for col in 0..BOARD_WIDTH as u8 {
            let at = Coord::new_unchecked(col, row);
            match board.get(at) {
                Some(piece) => out.push_str(&piece_label(piece)),
                None => out.push_str("     "),
            }
            out.push('|');
        }
        out.push('\n');

        // 宫的上下边缘用斜线分隔
        match rank {
            1 | 8 => out.push_str(&palace_top),
            2 | 9 => out.push_str(&palace_bottom),
            _ => out.push_str(&plain_divider),
        }
        out.push('\n');
    }

    out
}

/// 单格标签，如 `R.Cha`、`B.Sol`
fn piece_label(piece: Piece) -> String {
    let side = match piece.side {
        Side::Red => 'R',
        Side::Blue => 'B',
    };
    format!("{}.{}", side, &piece.kind.name()[..3])
}

fn divider_line() -> String {
    "-".repeat((CELL_WIDTH + 1) * BOARD_WIDTH + 4)
}

fn palace_line(left: char, right: char) -> String {
    // 斜线落在 d-f 列的格子边缘上
    let lead = 4 + (CELL_WIDTH + 1) * 3 + 5;
    let tail = (CELL_WIDTH + 1) * BOARD_WIDTH + 4 - lead - 7;
    format!(
        "{}{}-----{}{}",
        "-".repeat(lead),
        left,
        right,
        "-".repeat(tail)
    )
}
