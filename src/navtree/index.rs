//! 导航索引表（NAVTREEINDEX）模块
//!
//! NAVTREEINDEX是一个有序的URL后缀数组，每个条目标记一个
//! `navtreeindexN.js`分块文件所覆盖的第一个页面。
//! 查看器通过该表把页面URL定位到对应的分块。

use crate::navtree::error::{NavError, Result};

/// 导航索引表
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavIndex {
    /// URL后缀条目（按字典序非递减排列）
    entries: Vec<String>,
}

impl NavIndex {
    /// 创建新的空索引表
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 从条目列表创建索引表
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// 添加条目
    pub fn add_entry(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// 获取所有条目
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// 获取条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 判断索引表是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 校验条目是否按字典序非递减排列
    pub fn validate(&self) -> Result<()> {
        for window in self.entries.windows(2) {
            if window[0] > window[1] {
                return Err(NavError::InvalidIndex(format!(
                    "索引条目未按字典序排列: '{}' 出现在 '{}' 之后",
                    window[1], window[0]
                )));
            }
        }
        Ok(())
    }

    /// 查找指定URL所属的分块编号
    ///
    /// 使用查看器的查找规则：字典序中最后一个不大于该URL的条目。
    /// URL小于第一个条目时返回None。
    ///
    /// # 参数
    /// * `url` - 页面URL（可带锚点）
    pub fn chunk_for(&self, url: &str) -> Option<usize> {
        let position = self
            .entries
            .partition_point(|entry| entry.as_str() <= url);
        position.checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> NavIndex {
        NavIndex::from_entries(vec![
            ".html".to_string(),
            "group__group__Item.html#ga0da9630bc75be701ff70dd6a6f951ca9".to_string(),
        ])
    }

    #[test]
    fn test_validate_ordered() {
        assert!(sample_index().validate().is_ok());
        assert!(NavIndex::new().validate().is_ok());
    }

    #[test]
    fn test_validate_unordered() {
        let index = NavIndex::from_entries(vec!["b.html".to_string(), "a.html".to_string()]);
        assert!(matches!(index.validate(), Err(NavError::InvalidIndex(_))));
    }

    #[test]
    fn test_chunk_for_lookup() {
        let index = sample_index();

        // 位于两个条目之间的URL归属第一个分块
        assert_eq!(index.chunk_for("annotated.html"), Some(0));
        // 恰好等于条目本身
        assert_eq!(index.chunk_for(".html"), Some(0));
        assert_eq!(
            index.chunk_for("group__group__Item.html#ga0da9630bc75be701ff70dd6a6f951ca9"),
            Some(1)
        );
        // 大于最后一个条目的URL归属最后一个分块
        assert_eq!(index.chunk_for("todo.html"), Some(1));
        // 小于第一个条目
        assert_eq!(index.chunk_for(""), None);
    }

    #[test]
    fn test_chunk_for_empty_index() {
        assert_eq!(NavIndex::new().chunk_for("index.html"), None);
    }
}
