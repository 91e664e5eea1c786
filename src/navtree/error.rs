use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NavError>;

/// 导航树数据处理相关的错误类型
#[derive(Error, Debug)]
pub enum NavError {
    #[error("IO错误: {0}")]
    Io(#[from] io::Error),

    #[error("JS字面量解析错误 (第{line}行第{column}列): {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("缺少变量定义: {0}")]
    MissingVariable(String),

    #[error("无效的导航树结构: {0}")]
    InvalidNavTree(String),

    #[error("无效的索引表: {0}")]
    InvalidIndex(String),

    #[error("配置文件错误: {0}")]
    ConfigError(String),
}

impl NavError {
    /// 在指定位置构造解析错误
    pub fn parse_at(line: usize, column: usize, message: impl Into<String>) -> Self {
        NavError::Parse {
            line,
            column,
            message: message.into(),
        }
    }
}
