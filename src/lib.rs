pub mod navtree;

// === 核心API重新导出 ===

/// 导航脚本（主要接口）
pub use navtree::NavScript;

/// 错误处理
pub use navtree::{NavError, Result};

// === 数据结构 ===

/// 导航树和节点
pub use navtree::{NavChildren, NavNode, NavTarget, NavTree};

/// 索引表
pub use navtree::NavIndex;

/// 同步提示消息
pub use navtree::{SyncMessages, SyncState};

// === 底层组件（高级用法） ===

/// 脚本解析组件
pub use navtree::{JsValue, ScriptSource};

/// 大纲展示组件
pub use navtree::{
    create_outline_from_tree,
    Outline,
    OutlineNode,
    OutlineStatistics,
    OutlineStyle,
};

/// 序列化组件
pub use navtree::{write_script, EmitConfig, LICENSE_BANNER};

// === 库信息 ===

/// NavForge库的版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// NavForge库的描述
pub const DESCRIPTION: &str = "一个现代化的Doxygen导航树数据处理库";

/// 库的主页
pub const HOMEPAGE: &str = "https://github.com/FWW321/navforge";

// === 类型别名（便于使用） ===

/// 导航脚本的类型别名
pub type NavData = NavScript;

// === 便捷函数 ===

/// 快速打开navtreedata.js文件
///
/// 这是 `NavScript::from_path` 的便捷包装函数。
///
/// # 参数
/// * `path` - navtreedata.js文件路径
///
/// # 返回值
/// * `Result<NavScript>` - 导航脚本实例
///
/// # 示例
///
/// ```rust,no_run
/// use navforge;
///
/// let script = navforge::open("html/navtreedata.js")?;
/// println!("节点总数: {}", script.statistics().total_nodes);
/// # Ok::<(), navforge::NavError>(())
/// ```
pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<NavScript> {
    NavScript::from_path(path)
}
