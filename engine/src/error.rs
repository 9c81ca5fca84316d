//! 错误类型定义

use thiserror::Error;

/// 规则引擎错误
///
/// 规则层面的拒绝（非法走法、路径受阻等）统一以布尔值报告，
/// 不进入错误通道；这里只覆盖边界输入本身的失败形态。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 坐标文本格式错误（合法形式：a1 到 i10，无前导零）
    #[error("invalid coordinate text: {input:?}")]
    InvalidCoordinate { input: String },
}

/// 引擎操作结果类型
pub type Result<T> = std::result::Result<T, EngineError>;
