//! 导航脚本模块
//!
//! 表示一个完整的navtreedata.js文件：导航树、索引表和两条同步提示。

use std::fs;
use std::path::Path;

use crate::navtree::config::EmitConfig;
use crate::navtree::error::Result;
use crate::navtree::index::NavIndex;
use crate::navtree::sync::SyncMessages;
use crate::navtree::tree::outline::{create_outline_from_tree, Outline, OutlineStatistics};
use crate::navtree::tree::parser::ScriptSource;
use crate::navtree::tree::NavTree;
use crate::navtree::writer;

/// 一个完整的导航脚本文件
#[derive(Debug, Clone, PartialEq)]
pub struct NavScript {
    /// 导航树（NAVTREE）
    pub tree: NavTree,
    /// 索引表（NAVTREEINDEX）
    pub index: NavIndex,
    /// 同步提示消息（SYNCONMSG / SYNCOFFMSG）
    pub sync: SyncMessages,
}

impl NavScript {
    /// 从文件路径加载导航脚本
    ///
    /// # 参数
    /// * `path` - navtreedata.js文件路径
    ///
    /// # 返回值
    /// * `Result<NavScript>` - 成功返回脚本实例，失败返回错误
    ///
    /// # 示例
    ///
    /// ```rust,no_run
    /// use navforge::NavScript;
    ///
    /// let script = NavScript::from_path("html/navtreedata.js")?;
    /// println!("根节点数: {}", script.tree.len());
    /// # Ok::<(), navforge::NavError>(())
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<NavScript> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// 从文本内容解析导航脚本（使用标准变量名）
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &str) -> Result<NavScript> {
        Self::from_str_with_config(source, &EmitConfig::default_config())
    }

    /// 从文本内容解析导航脚本，变量名取自配置
    ///
    /// 导航树和索引表变量必须存在；两条同步提示变量缺失时
    /// 回退到生成器的默认消息。
    pub fn from_str_with_config(source: &str, config: &EmitConfig) -> Result<NavScript> {
        let script_source = ScriptSource::parse(source)?;

        let tree = script_source.nav_tree(&config.tree_variable)?;
        let index = NavIndex::from_entries(script_source.string_list(&config.index_variable)?);

        let defaults = SyncMessages::default();
        let on_message = script_source
            .string(&config.sync_on_variable)?
            .unwrap_or(defaults.on_message);
        let off_message = script_source
            .string(&config.sync_off_variable)?
            .unwrap_or(defaults.off_message);

        Ok(NavScript {
            tree,
            index,
            sync: SyncMessages::new(on_message, off_message),
        })
    }

    /// 序列化为JS文本
    ///
    /// # 参数
    /// * `config` - 输出配置
    pub fn to_js(&self, config: &EmitConfig) -> String {
        writer::write_script(self, config)
    }

    /// 使用默认配置序列化为JS文本
    pub fn to_js_default(&self) -> String {
        self.to_js(&EmitConfig::default_config())
    }

    /// 序列化并写入指定文件
    ///
    /// # 参数
    /// * `path` - 目标文件路径
    /// * `config` - 输出配置
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P, config: &EmitConfig) -> Result<()> {
        fs::write(path, self.to_js(config))?;
        Ok(())
    }

    /// 创建导航树的大纲视图
    pub fn outline(&self) -> Outline {
        create_outline_from_tree(&self.tree)
    }

    /// 获取导航树的统计信息
    pub fn statistics(&self) -> OutlineStatistics {
        self.outline().statistics()
    }

    /// 校验脚本数据的一致性（目前为索引表的顺序校验）
    pub fn validate(&self) -> Result<()> {
        self.index.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 与生成器排版一致的最小样例
    const SAMPLE: &str = "var NAVTREE =\n\
[\n\
\x20\x20[ \"Y.A.R.S.\", \"index.html\", [\n\
\x20\x20\x20\x20[ \"Overview\", \"index.html#Overview\", null ],\n\
\x20\x20\x20\x20[ \"Leveling\", \"index.html#section_Leveling\", [\n\
\x20\x20\x20\x20\x20\x20[ \"Character Evolution\", \"index.html#section_LevelingCharacter\", null ]\n\
\x20\x20\x20\x20] ],\n\
\x20\x20\x20\x20[ \"Modules\", \"modules.html\", \"modules\" ]\n\
\x20\x20] ]\n\
];\n\
\n\
var NAVTREEINDEX =\n\
[\n\
\".html\",\n\
\"group__group__Item.html#ga0da9630bc75be701ff70dd6a6f951ca9\"\n\
];\n\
\n\
var SYNCONMSG = 'click to disable panel synchronisation';\n\
var SYNCOFFMSG = 'click to enable panel synchronisation';";

    #[test]
    fn test_from_str_parses_all_sections() {
        let script = NavScript::from_str(SAMPLE).unwrap();
        assert_eq!(script.tree.len(), 1);
        assert_eq!(script.tree.depth(), 3);
        assert_eq!(script.index.len(), 2);
        assert!(script.sync.is_default());
        assert!(script.validate().is_ok());
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        let script = NavScript::from_str(SAMPLE).unwrap();

        let mut config = EmitConfig::default_config();
        config.include_license = false;
        assert_eq!(script.to_js(&config), SAMPLE);
    }

    #[test]
    fn test_round_trip_with_license_banner() {
        let with_banner = format!("{}{}", crate::navtree::writer::LICENSE_BANNER, SAMPLE);
        let script = NavScript::from_str(&with_banner).unwrap();
        assert_eq!(script.to_js_default(), with_banner);
    }

    #[test]
    fn test_emit_then_parse_preserves_data() {
        let script = NavScript::from_str(SAMPLE).unwrap();
        let emitted = script.to_js_default();
        let reparsed = NavScript::from_str(&emitted).unwrap();
        assert_eq!(reparsed, script);
    }

    #[test]
    fn test_missing_sync_messages_fall_back_to_defaults() {
        let source = "var NAVTREE =\n[\n];\n\nvar NAVTREEINDEX =\n[\n];";
        let script = NavScript::from_str(source).unwrap();
        assert!(script.sync.is_default());
    }

    #[test]
    fn test_statistics() {
        let script = NavScript::from_str(SAMPLE).unwrap();
        let stats = script.statistics();
        assert_eq!(stats.total_nodes, 5);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.external_count, 1);
        assert_eq!(stats.root_count, 1);
    }

    #[test]
    fn test_write_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navtreedata.js");

        let script = NavScript::from_str(SAMPLE).unwrap();
        script
            .write_to_path(&path, &EmitConfig::default_config())
            .unwrap();

        let reloaded = NavScript::from_path(&path).unwrap();
        assert_eq!(reloaded, script);
    }
}
