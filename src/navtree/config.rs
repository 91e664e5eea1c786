//! 输出配置模块
//!
//! 提供导航树脚本序列化时的配置管理功能，支持从YAML文件加载配置。

use crate::navtree::error::{NavError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 默认配置文件路径
const DEFAULT_CONFIG_PATH: &str = "navforge.yaml";

/// 导航树脚本输出配置
///
/// 定义序列化navtreedata.js时使用的变量名和排版选项。
/// 默认值与文档生成器的产出完全一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmitConfig {
    /// 导航树变量名
    pub tree_variable: String,
    /// 索引表变量名
    pub index_variable: String,
    /// 同步开启提示变量名
    pub sync_on_variable: String,
    /// 同步关闭提示变量名
    pub sync_off_variable: String,
    /// 是否输出文件头部的许可证注释
    pub include_license: bool,
    /// 每层嵌套的缩进宽度
    pub indent_width: usize,
}

impl EmitConfig {
    /// 从默认配置文件中加载输出配置
    ///
    /// 配置文件默认为当前目录下的 `navforge.yaml`
    ///
    /// # 返回值
    ///
    /// * `Result<Self>` - 加载成功返回配置实例，失败返回错误
    pub fn from_file() -> Result<Self> {
        Self::from_path(DEFAULT_CONFIG_PATH)
    }

    /// 从指定路径加载输出配置
    ///
    /// # 参数
    /// * `path` - YAML配置文件路径
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| NavError::ConfigError(format!("无法读取配置文件: {}", e)))?;

        serde_yml::from_str(&content)
            .map_err(|e| NavError::ConfigError(format!("配置文件格式错误: {}", e)))
    }

    /// 生成默认配置文件到当前目录
    ///
    /// 配置文件将生成为当前目录下的 `navforge.yaml`
    pub fn generate_default_config() -> Result<()> {
        Self::generate_config_at(DEFAULT_CONFIG_PATH)
    }

    /// 生成默认配置文件到指定路径
    ///
    /// # 参数
    /// * `path` - 目标文件路径
    pub fn generate_config_at<P: AsRef<Path>>(path: P) -> Result<()> {
        let default_config = Self::default_config();
        let yaml_content = serde_yml::to_string(&default_config)
            .map_err(|e| NavError::ConfigError(format!("序列化配置失败: {}", e)))?;

        // 在YAML内容前添加注释说明
        let content_with_header = format!(
            "# 导航树脚本输出配置文件\n# 定义序列化navtreedata.js时使用的变量名和排版选项\n# 默认值与文档生成器的产出一致，修改后将失去字节级往返一致性\n\n{}",
            yaml_content
        );

        fs::write(path, content_with_header)
            .map_err(|e| NavError::ConfigError(format!("写入配置文件失败: {}", e)))?;

        Ok(())
    }

    /// 获取默认配置
    pub fn default_config() -> Self {
        Self {
            tree_variable: "NAVTREE".to_string(),
            index_variable: "NAVTREEINDEX".to_string(),
            sync_on_variable: "SYNCONMSG".to_string(),
            sync_off_variable: "SYNCOFFMSG".to_string(),
            include_license: true,
            indent_width: 2,
        }
    }

    /// 尝试从默认配置文件加载，如果文件不存在则先生成配置文件再加载
    ///
    /// 配置文件为当前目录下的 `navforge.yaml`
    pub fn new() -> Self {
        match Self::from_file() {
            Ok(config) => config,
            Err(_) => {
                let _ = Self::generate_default_config();
                Self::default_config()
            }
        }
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = EmitConfig::default();
        assert_eq!(config.tree_variable, "NAVTREE");
        assert_eq!(config.index_variable, "NAVTREEINDEX");
        assert_eq!(config.sync_on_variable, "SYNCONMSG");
        assert_eq!(config.sync_off_variable, "SYNCOFFMSG");
        assert!(config.include_license);
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn test_generate_and_reload_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navforge.yaml");

        EmitConfig::generate_config_at(&path).unwrap();
        let loaded = EmitConfig::from_path(&path).unwrap();
        assert_eq!(loaded, EmitConfig::default_config());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = EmitConfig::from_path("不存在的配置.yaml").unwrap_err();
        assert!(matches!(err, NavError::ConfigError(_)));
    }
}
