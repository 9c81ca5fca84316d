//! 棋盘坐标
//!
//! 对外的文本形式为一个小写列字母加行号，如 `a1`、`e9`、`i10`。
//! 列 a-i 对应 0-8，行 1-10 对应 0-9。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BLUE_PALACE_ROW_MAX, BLUE_PALACE_ROW_MIN, BOARD_HEIGHT, BOARD_WIDTH, PALACE_COL_MAX,
    PALACE_COL_MIN, RED_PALACE_ROW_MAX, RED_PALACE_ROW_MIN,
};
use crate::error::EngineError;

/// 棋盘坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// 列 (0-8)
    pub col: u8,
    /// 行 (0-9)
    pub row: u8,
}

impl Coord {
    /// 创建新坐标
    pub fn new(col: u8, row: u8) -> Option<Self> {
        if (col as usize) < BOARD_WIDTH && (row as usize) < BOARD_HEIGHT {
            Some(Self { col, row })
        } else {
            None
        }
    }

    /// 创建新坐标（不检查边界，内部使用）
    pub const fn new_unchecked(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// 获取偏移后的坐标，出界返回 None
    pub fn offset(&self, dc: i8, dr: i8) -> Option<Coord> {
        let col = self.col as i8 + dc;
        let row = self.row as i8 + dr;
        if col >= 0 && (col as usize) < BOARD_WIDTH && row >= 0 && (row as usize) < BOARD_HEIGHT {
            Some(Coord {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_WIDTH + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_WIDTH * BOARD_HEIGHT {
            Some(Coord {
                col: (index % BOARD_WIDTH) as u8,
                row: (index / BOARD_WIDTH) as u8,
            })
        } else {
            None
        }
    }

    /// 是否位于任意一方的宫内
    pub fn is_palace(&self) -> bool {
        let in_col = (PALACE_COL_MIN..=PALACE_COL_MAX).contains(&self.col);
        let in_row = (RED_PALACE_ROW_MIN..=RED_PALACE_ROW_MAX).contains(&self.row)
            || (BLUE_PALACE_ROW_MIN..=BLUE_PALACE_ROW_MAX).contains(&self.row);
        in_col && in_row
    }

    /// 列字母（a-i）
    pub fn file_char(&self) -> char {
        (b'a' + self.col) as char
    }

    /// 行号（1-10）
    pub fn rank(&self) -> u8 {
        self.row + 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl FromStr for Coord {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || EngineError::InvalidCoordinate {
            input: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() < 2 || bytes.len() > 3 {
            return Err(err());
        }
        let col = match bytes[0] {
            b'a'..=b'i' => bytes[0] - b'a',
            _ => return Err(err()),
        };
        // 行号必须全为数字，禁止前导零和符号
        let digits = &s[1..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0') {
            return Err(err());
        }
        let rank: u8 = digits.parse().map_err(|_| err())?;
        if !(1..=BOARD_HEIGHT as u8).contains(&rank) {
            return Err(err());
        }
        Ok(Coord { col, row: rank - 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(8, 9).is_some());
        assert!(Coord::new(9, 0).is_none());
        assert!(Coord::new(0, 10).is_none());
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("a1".parse::<Coord>().unwrap(), Coord::new_unchecked(0, 0));
        assert_eq!("e9".parse::<Coord>().unwrap(), Coord::new_unchecked(4, 8));
        assert_eq!("i10".parse::<Coord>().unwrap(), Coord::new_unchecked(8, 9));
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "a", "a0", "a11", "j5", "a05", "A1", "e-1", "e+1", "1a", "e 1"] {
            assert!(input.parse::<Coord>().is_err(), "应当拒绝 {:?}", input);
        }
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["a1", "d3", "e2", "h8", "i10"] {
            let coord: Coord = text.parse().unwrap();
            assert_eq!(coord.to_string(), text);
        }
    }

    #[test]
    fn test_palace() {
        // 红方宫
        assert!(Coord::new_unchecked(4, 1).is_palace()); // e2
        assert!(Coord::new_unchecked(3, 0).is_palace()); // d1
        assert!(!Coord::new_unchecked(4, 3).is_palace()); // e4
        assert!(!Coord::new_unchecked(2, 1).is_palace()); // c2

        // 蓝方宫
        assert!(Coord::new_unchecked(4, 8).is_palace()); // e9
        assert!(Coord::new_unchecked(5, 9).is_palace()); // f10
        assert!(!Coord::new_unchecked(4, 6).is_palace()); // e7
    }

    #[test]
    fn test_offset() {
        let c = Coord::new_unchecked(0, 0);
        assert_eq!(c.offset(1, 1), Some(Coord::new_unchecked(1, 1)));
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(c.offset(0, -1), None);
        assert_eq!(Coord::new_unchecked(8, 9).offset(1, 0), None);
    }

    #[test]
    fn test_index_round_trip() {
        let c = Coord::new_unchecked(4, 8);
        assert_eq!(Coord::from_index(c.to_index()), Some(c));
        assert_eq!(Coord::from_index(90), None);
    }
}
