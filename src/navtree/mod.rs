pub mod error;
pub mod config;
pub mod index;
pub mod script;
pub mod sync;
pub mod tree;
pub mod writer;

// 重新导出错误处理
pub use error::{NavError, Result};

// 重新导出导航脚本和输出配置
pub use script::NavScript;
pub use config::EmitConfig;

// 重新导出导航树相关
pub use tree::{
    JsValue,
    NavChildren,
    NavNode,
    NavTarget,
    NavTree,
    Outline,
    OutlineNode,
    OutlineStatistics,
    OutlineStyle,
    ScriptSource,
    create_outline_from_tree,
};

// 重新导出索引表和同步提示
pub use index::NavIndex;
pub use sync::{SyncMessages, SyncState};

// 重新导出序列化相关
pub use writer::{write_script, LICENSE_BANNER};
