//! 走法合法性判定
//!
//! 每类棋子一套规则，统一经过位移分析后分派：
//! - 单步类：卒、士、将（宫内斜线另有限制）
//! - 滑行类：車、包（路径逐格检查，包需要且仅需要一个炮架）
//! - 跳跃类：馬、象（先直后斜，拐点不能有子）
//!
//! 送将裁定不在这里，由状态机的试走流程统一处理。

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{PieceKind, Side};

/// 行进方向（以走子方视角）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advance {
    Forward,
    Backward,
    Stay,
}

/// 位移分析结果，各类规则共用
#[derive(Debug, Clone, Copy)]
struct Displacement {
    /// 带符号列差（目标减起点）
    dc: i8,
    /// 带符号行差
    dr: i8,
    /// 列向距离
    cols: u8,
    /// 行向距离
    rows: u8,
    /// 前进、后退还是原行
    advance: Advance,
    /// 列行皆有位移即视为斜向
    diagonal: bool,
}

impl Displacement {
    fn analyze(from: Coord, to: Coord, mover: Side) -> Self {
        let dc = to.col as i8 - from.col as i8;
        let dr = to.row as i8 - from.row as i8;
        // 红方朝行号增大的方向前进，蓝方相反
        let advance = match (mover, dr.signum()) {
            (_, 0) => Advance::Stay,
            (Side::Red, 1) | (Side::Blue, -1) => Advance::Forward,
            _ => Advance::Backward,
        };
        Self {
            dc,
            dr,
            cols: dc.unsigned_abs(),
            rows: dr.unsigned_abs(),
            advance,
            diagonal: dc != 0 && dr != 0,
        }
    }
}

/// 走法合法性判定器
pub struct MoveValidator;

impl MoveValidator {
    /// 判定一步走法是否合法
    ///
    /// 包含起点归属与目标格不吃己方的检查，因此将军探测可以直接复用：
    /// 攻击方任一棋子对对方将的坐标调用本函数即为攻击判定。
    /// `first_move` 表示走子方是否还未走过任何一步（包的首回合限制）。
    pub fn is_legal(board: &Board, from: Coord, to: Coord, mover: Side, first_move: bool) -> bool {
        let piece = match board.get(from) {
            Some(p) => p,
            None => return false,
        };
        if piece.side != mover {
            return false;
        }
        if let Some(target) = board.get(to) {
            if target.side == mover {
                return false;
            }
        }

        let disp = Displacement::analyze(from, to, mover);
        match piece.kind {
            PieceKind::Soldier => Self::soldier_move(board, &disp, from, to),
            // 将的行棋范围与士相同，送将裁定在状态机
            PieceKind::Guard | PieceKind::General => Self::guard_move(board, &disp, from, to),
            PieceKind::Chariot => Self::chariot_move(board, &disp, from, to),
            PieceKind::Cannon => Self::cannon_move(board, &disp, from, to, first_move),
            PieceKind::Horse | PieceKind::Elephant => {
                Self::beast_move(board, piece.kind, &disp, from, to)
            }
        }
    }

    /// 单步类共用的步距校验：一步直行，或宫内斜线上的一步斜行
    fn step_rule(disp: &Displacement, from: Coord, to: Coord) -> bool {
        let span = disp.cols + disp.rows;
        if span <= 1 {
            return true;
        }
        span == 2
            && disp.diagonal
            && from.is_palace()
            && to.is_palace()
            && !Board::is_forbidden_diagonal(from, to)
    }

    /// 卒：单步，不得后退
    fn soldier_move(_board: &Board, disp: &Displacement, from: Coord, to: Coord) -> bool {
        Self::step_rule(disp, from, to) && disp.advance != Advance::Backward
    }

    /// 士：单步，进退自由，但不得离宫
    fn guard_move(_board: &Board, disp: &Displacement, from: Coord, to: Coord) -> bool {
        Self::step_rule(disp, from, to) && from.is_palace() && to.is_palace()
    }

    /// 車：直线滑行，或宫内斜线滑行，路径上不得有子
    fn chariot_move(board: &Board, disp: &Displacement, from: Coord, to: Coord) -> bool {
        matches!(Self::slide_path(board, disp, from, to), Some((0, _)))
    }

    /// 包：滑行路径上需要且仅需要一个非包的炮架，不得吃包，首回合不得动
    fn cannon_move(
        board: &Board,
        disp: &Displacement,
        from: Coord,
        to: Coord,
        first_move: bool,
    ) -> bool {
        if first_move {
            return false;
        }
        if let Some(target) = board.get(to) {
            if target.kind == PieceKind::Cannon {
                return false;
            }
        }
        matches!(Self::slide_path(board, disp, from, to), Some((1, false)))
    }

    /// 車/包共用的滑行几何校验与路径扫描
    ///
    /// 返回路径（不含两端）上的阻挡数和其中是否有包，
    /// 几何上不成立（非直线、斜线不在宫内等）返回 None。
    fn slide_path(
        board: &Board,
        disp: &Displacement,
        from: Coord,
        to: Coord,
    ) -> Option<(u8, bool)> {
        if disp.diagonal {
            // 斜行限宫内 45 度，且不走禁用的斜线对
            if disp.cols != disp.rows {
                return None;
            }
            if !from.is_palace() || !to.is_palace() {
                return None;
            }
            if Board::is_forbidden_diagonal(from, to) {
                return None;
            }
        }
        Some(Self::scan_path(board, from, to, disp.dc.signum(), disp.dr.signum()))
    }

    /// 沿给定方向逐格走到目标，统计中途的阻挡
    fn scan_path(board: &Board, from: Coord, to: Coord, dc: i8, dr: i8) -> (u8, bool) {
        let mut blockers = 0u8;
        let mut cannon_blocker = false;
        let mut current = from;
        while let Some(next) = current.offset(dc, dr) {
            if next == to {
                break;
            }
            if let Some(piece) = board.get(next) {
                blockers += 1;
                if piece.kind == PieceKind::Cannon {
                    cannon_blocker = true;
                }
            }
            current = next;
        }
        (blockers, cannon_blocker)
    }

    /// 馬/象：位移特征匹配后检查拐点
    ///
    /// 总步距须为定值（馬 3、象 5）且长腿等于跳跃步距（馬 2、象 3）。
    /// 第一段直行腿的落点不得出界或有子；象还要求第二段斜行腿的落点为空。
    fn beast_move(
        board: &Board,
        kind: PieceKind,
        disp: &Displacement,
        from: Coord,
        _to: Coord,
    ) -> bool {
        let leap = match kind.leap() {
            Some(n) => n,
            None => return false,
        };
        if disp.cols + disp.rows != kind.max_steps() {
            return false;
        }
        if disp.cols != leap && disp.rows != leap {
            return false;
        }

        // 四个正方向全部受阻（出界或有子）直接拒绝
        let all_blocked = [(-1i8, 0i8), (1, 0), (0, -1), (0, 1)]
            .iter()
            .all(|&(dc, dr)| match from.offset(dc, dr) {
                Some(cell) => board.get(cell).is_some(),
                None => true,
            });
        if all_blocked {
            return false;
        }

        // 列距更长先横走，行距更长先纵走
        let wide = disp.cols > disp.rows;
        let first_leg = if wide {
            from.offset(disp.dc.signum(), 0)
        } else {
            from.offset(0, disp.dr.signum())
        };
        match first_leg {
            Some(cell) if board.get(cell).is_none() => {}
            _ => return false,
        }

        if kind == PieceKind::Elephant {
            let second_leg = if wide {
                from.offset(disp.dc.signum() * 2, disp.dr.signum())
            } else {
                from.offset(disp.dc.signum(), disp.dr.signum() * 2)
            };
            match second_leg {
                Some(cell) if board.get(cell).is_none() => {}
                _ => return false,
            }
        }

        true
    }
}
