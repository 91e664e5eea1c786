//! 面板同步提示消息模块
//!
//! navtreedata.js中的SYNCONMSG和SYNCOFFMSG两个字符串，
//! 供查看器的导航面板同步开关显示提示文字。

use once_cell::sync::Lazy;

/// 同步开启时的默认提示（点击后禁用同步）
const DEFAULT_ON_MESSAGE: &str = "click to disable panel synchronisation";

/// 同步关闭时的默认提示（点击后启用同步）
const DEFAULT_OFF_MESSAGE: &str = "click to enable panel synchronisation";

/// 文档生成器使用的默认提示消息
static DEFAULT_MESSAGES: Lazy<SyncMessages> = Lazy::new(|| SyncMessages {
    on_message: DEFAULT_ON_MESSAGE.to_string(),
    off_message: DEFAULT_OFF_MESSAGE.to_string(),
});

/// 面板同步提示消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncMessages {
    /// 同步开启时显示的提示（SYNCONMSG）
    pub on_message: String,
    /// 同步关闭时显示的提示（SYNCOFFMSG）
    pub off_message: String,
}

impl SyncMessages {
    /// 创建新的提示消息
    pub fn new(on_message: impl Into<String>, off_message: impl Into<String>) -> Self {
        Self {
            on_message: on_message.into(),
            off_message: off_message.into(),
        }
    }

    /// 判断是否为生成器的默认提示
    pub fn is_default(&self) -> bool {
        *self == *DEFAULT_MESSAGES
    }
}

impl Default for SyncMessages {
    fn default() -> Self {
        DEFAULT_MESSAGES.clone()
    }
}

/// 面板同步状态
///
/// 查看器中同步开关的两种状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// 同步已开启
    #[default]
    On,
    /// 同步已关闭
    Off,
}

impl SyncState {
    /// 切换同步状态
    pub fn toggle(self) -> Self {
        match self {
            SyncState::On => SyncState::Off,
            SyncState::Off => SyncState::On,
        }
    }

    /// 获取当前状态对应的提示文字
    pub fn tooltip<'a>(&self, messages: &'a SyncMessages) -> &'a str {
        match self {
            SyncState::On => &messages.on_message,
            SyncState::Off => &messages.off_message,
        }
    }
}
