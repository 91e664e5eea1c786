//! 导航树（NAVTREE）模块
//!
//! 此模块提供navtreedata.js文件中NAVTREE字面量的数据模型、解析和展示功能。
//! NAVTREE定义了文档站点的目录结构和导航信息。

pub mod node;
pub mod outline;
pub mod parser;

// 重新导出公共类型以保持API兼容性
pub use node::{NavChildren, NavNode, NavTarget, NavTree};
pub use parser::{JsValue, ScriptSource};
pub use outline::*;
