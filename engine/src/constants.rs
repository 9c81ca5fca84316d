//! 棋盘常量定义

/// 棋盘宽度（列数）
pub const BOARD_WIDTH: usize = 9;

/// 棋盘高度（行数）
pub const BOARD_HEIGHT: usize = 10;

/// 格子总数
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// 宫的列范围（d 到 f）
pub const PALACE_COL_MIN: u8 = 3;
pub const PALACE_COL_MAX: u8 = 5;

/// 红方宫的行范围（1 到 3 行）
pub const RED_PALACE_ROW_MIN: u8 = 0;
pub const RED_PALACE_ROW_MAX: u8 = 2;

/// 蓝方宫的行范围（8 到 10 行）
pub const BLUE_PALACE_ROW_MIN: u8 = 7;
pub const BLUE_PALACE_ROW_MAX: u8 = 9;

/// 连续被将军多少次判负
pub const WIN_CHECK_COUNT: u32 = 2;
