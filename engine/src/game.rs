//! 对局状态机
//!
//! 驱动回合交替、走法受理、试走与回退、将军计数和胜负裁定。
//! 局面衍生数据（棋子位置缓存、将的坐标、受攻标记）在每次
//! 棋盘变动后整体重建，保证与棋盘内容始终一致。

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::constants::WIN_CHECK_COUNT;
use crate::coord::Coord;
use crate::piece::{PieceKind, Side};
use crate::rules::MoveValidator;

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// 对局进行中
    Unfinished,
    /// 红方胜
    RedWon,
    /// 蓝方胜
    BlueWon,
}

impl GameResult {
    /// 某方获胜对应的结果
    pub fn win_for(side: Side) -> GameResult {
        match side {
            Side::Red => GameResult::RedWon,
            Side::Blue => GameResult::BlueWon,
        }
    }
}

/// 双方已走步数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCounts {
    pub red: u32,
    pub blue: u32,
}

/// 回合摘要，供界面提示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnSummary {
    /// 当前走子方
    pub current: Side,
    /// 对方
    pub opponent: Side,
    /// 当前方的第几手（从 1 起）
    pub move_number: u32,
}

/// 单方的局面记录：棋子位置缓存与将的受攻状态
#[derive(Debug, Clone, Default)]
struct SideRecord {
    /// 本方所有棋子的坐标
    pieces: Vec<Coord>,
    /// 本方将的坐标，没有将时视为未被攻击
    general: Option<Coord>,
    /// 将当前是否被攻击
    in_check: bool,
    /// 连续被将军计数，累计到 2 判负
    check_count: u32,
}

/// 对局
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Side,
    result: GameResult,
    red: SideRecord,
    blue: SideRecord,
    moves: MoveCounts,
}

impl Game {
    /// 以初始布局开局，蓝方先行
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Side::Blue)
    }

    /// 从任意局面开局
    pub fn from_board(board: Board, turn: Side) -> Self {
        let mut game = Self {
            board,
            turn,
            result: GameResult::Unfinished,
            red: SideRecord::default(),
            blue: SideRecord::default(),
            moves: MoveCounts::default(),
        };
        game.refresh();
        game
    }

    /// 回到初始局面
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 提交一步走法，返回是否接受
    ///
    /// 起点与终点相同视为主动让出本手。任何被拒绝的走法都不会
    /// 留下棋盘变动；试走后发现送将（走的不是将本身）会整体回退。
    pub fn submit_move(&mut self, from: Coord, to: Coord) -> bool {
        if self.result != GameResult::Unfinished {
            debug!(%from, %to, "对局已有胜负,拒绝走子");
            return false;
        }
        self.refresh();

        let mover = self.turn;
        let piece = match self.board.get(from) {
            Some(p) => p,
            None => {
                debug!(%from, "起点无子");
                return false;
            }
        };
        if piece.side != mover {
            debug!(%from, side = piece.side.as_str(), "不能动对方的棋子");
            return false;
        }

        let pass = from == to;
        if !pass && !MoveValidator::is_legal(&self.board, from, to, mover, self.is_first_move(mover))
        {
            debug!(%from, %to, kind = piece.kind.name(), "走法不合规");
            return false;
        }

        // 试走并校验送将。将自己走入受攻格是唯一的例外，
        // 视为主动认输性质的一手。
        let kept = self.speculate(from, to, |game| {
            !game.record(mover).in_check || piece.kind == PieceKind::General
        });
        if !kept {
            debug!(%from, %to, "走子后己方被将军,已回退");
            return false;
        }

        self.update_check_counters();
        self.evaluate_result();
        self.finish_turn();
        true
    }

    /// 文本坐标入口，格式非法一律按拒绝处理
    pub fn submit_move_text(&mut self, from: &str, to: &str) -> bool {
        match (from.parse::<Coord>(), to.parse::<Coord>()) {
            (Ok(f), Ok(t)) => self.submit_move(f, t),
            _ => {
                debug!(from, to, "坐标文本非法");
                false
            }
        }
    }

    /// 查询某方的将当前是否被攻击
    pub fn is_in_check(&mut self, side: Side) -> bool {
        self.refresh();
        self.record(side).in_check
    }

    /// 开局换象马
    ///
    /// 仅限走子方第一步之前；两子须同属走子方且都是象或馬，
    /// 并同在 b/c 列或同在 g/h 列。失败时静默不变。
    pub fn swap_pieces(&mut self, a: Coord, b: Coord) {
        if self.result != GameResult::Unfinished {
            return;
        }
        if !self.is_first_move(self.turn) {
            return;
        }
        let (pa, pb) = match (self.board.get(a), self.board.get(b)) {
            (Some(x), Some(y)) => (x, y),
            _ => return,
        };
        if pa.side != self.turn || pb.side != self.turn {
            return;
        }
        let swappable = |kind: PieceKind| matches!(kind, PieceKind::Elephant | PieceKind::Horse);
        if !swappable(pa.kind) || !swappable(pb.kind) {
            return;
        }
        let left_band = |c: Coord| c.col == 1 || c.col == 2;
        let right_band = |c: Coord| c.col == 6 || c.col == 7;
        if !(left_band(a) && left_band(b) || right_band(a) && right_band(b)) {
            return;
        }

        self.board.set(a, Some(pb));
        self.board.set(b, Some(pa));
        self.refresh();
        debug!(%a, %b, side = self.turn.as_str(), "开局换象马");
    }

    /// 对局结果
    pub fn game_result(&self) -> GameResult {
        self.result
    }

    /// 当前走子方
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    /// 双方已走步数
    pub fn move_counts(&self) -> MoveCounts {
        self.moves
    }

    /// 回合摘要
    pub fn turn_summary(&self) -> TurnSummary {
        TurnSummary {
            current: self.turn,
            opponent: self.turn.opponent(),
            move_number: self.move_count(self.turn) + 1,
        }
    }

    /// 只读棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    fn record(&self, side: Side) -> &SideRecord {
        match side {
            Side::Red => &self.red,
            Side::Blue => &self.blue,
        }
    }

    fn record_mut(&mut self, side: Side) -> &mut SideRecord {
        match side {
            Side::Red => &mut self.red,
            Side::Blue => &mut self.blue,
        }
    }

    fn move_count(&self, side: Side) -> u32 {
        match side {
            Side::Red => self.moves.red,
            Side::Blue => self.moves.blue,
        }
    }

    fn is_first_move(&self, side: Side) -> bool {
        self.move_count(side) == 0
    }

    /// 重建棋子位置缓存并刷新两将的受攻标记
    fn refresh(&mut self) {
        self.gather_pieces();
        self.refresh_check();
    }

    fn gather_pieces(&mut self) {
        self.red.pieces.clear();
        self.red.general = None;
        self.blue.pieces.clear();
        self.blue.general = None;

        for (coord, piece) in self.board.all_pieces() {
            let record = self.record_mut(piece.side);
            record.pieces.push(coord);
            if piece.kind == PieceKind::General {
                record.general = Some(coord);
            }
        }
    }

    /// 攻击扫描：双方逐子探测能否走到对方将的坐标
    ///
    /// 探测直接复用走法判定，保证将军检测与走法合法性完全一致。
    fn refresh_check(&mut self) {
        for attacker in [Side::Red, Side::Blue] {
            let defender = attacker.opponent();
            let checked = match self.record(defender).general {
                Some(general) => {
                    let first_move = self.is_first_move(attacker);
                    self.record(attacker).pieces.iter().any(|&from| {
                        MoveValidator::is_legal(&self.board, from, general, attacker, first_move)
                    })
                }
                None => false,
            };
            self.record_mut(defender).in_check = checked;
        }
    }

    /// 试走：先落子并刷新衍生状态，不满足保留条件则整体回退
    fn speculate<F>(&mut self, from: Coord, to: Coord, keep: F) -> bool
    where
        F: FnOnce(&Game) -> bool,
    {
        let record = self.board.apply(from, to);
        self.refresh();
        if keep(self) {
            return true;
        }
        self.board.undo(&record);
        self.refresh();
        false
    }

    /// 双将的连续被将计数：受攻 +1，否则 -1 并保底为零
    fn update_check_counters(&mut self) {
        for side in [Side::Red, Side::Blue] {
            let record = self.record_mut(side);
            if record.in_check {
                record.check_count += 1;
            } else {
                record.check_count = record.check_count.saturating_sub(1);
            }
        }
    }

    /// 连续两手未解将即判负
    fn evaluate_result(&mut self) {
        let mover = self.turn;
        let opponent = mover.opponent();
        if self.record(mover).check_count >= WIN_CHECK_COUNT {
            self.result = GameResult::win_for(opponent);
        } else if self.record(opponent).check_count >= WIN_CHECK_COUNT {
            self.result = GameResult::win_for(mover);
        }
        if self.result != GameResult::Unfinished {
            info!(result = ?self.result, "对局结束");
        }
    }

    fn finish_turn(&mut self) {
        match self.turn {
            Side::Red => self.moves.red += 1,
            Side::Blue => self.moves.blue += 1,
        }
        self.turn = self.turn.opponent();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
