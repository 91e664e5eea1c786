//! 导航树数据结构定义
//!
//! 定义NAVTREE字面量对应的各种导航元素，包括导航节点、链接目标、子树引用等。

use std::fmt::{Display, Formatter, Result as FmtResult};

/// 导航链接目标
///
/// 对应导航节点的href字段，由页面URL和可选的锚点两部分组成，
/// 例如 `index.html#Overview`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget {
    /// 页面URL（相对于文档根目录）
    pub page: String,
    /// 页面内锚点（`#`之后的部分）
    pub anchor: Option<String>,
}

impl NavTarget {
    /// 创建指向整个页面的链接目标
    pub fn page(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            anchor: None,
        }
    }

    /// 创建带锚点的链接目标
    pub fn anchored(page: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            anchor: Some(anchor.into()),
        }
    }

    /// 解析href字符串
    ///
    /// `#`之前的部分作为页面URL，之后的部分作为锚点。
    /// 没有`#`时整个字符串作为页面URL。
    pub fn parse(href: &str) -> Self {
        match href.split_once('#') {
            Some((page, anchor)) => Self {
                page: page.to_string(),
                anchor: Some(anchor.to_string()),
            },
            None => Self {
                page: href.to_string(),
                anchor: None,
            },
        }
    }

    /// 判断是否为指定页面内的锚点链接
    pub fn is_anchor_of(&self, page: &str) -> bool {
        self.anchor.is_some() && self.page == page
    }
}

impl Display for NavTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.anchor {
            Some(anchor) => write!(f, "{}#{}", self.page, anchor),
            None => write!(f, "{}", self.page),
        }
    }
}

/// 导航节点的子节点字段
///
/// NAVTREE字面量中每个节点的第三个元素有三种形态：
/// - `null` 表示叶子节点
/// - 字符串表示子树被拆分到外部脚本文件（如 `"modules"` 对应 `modules.js`）
/// - 数组表示内联的子节点列表
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavChildren {
    /// 叶子节点（JS中的null）
    #[default]
    None,
    /// 外部子树脚本的基础名
    External(String),
    /// 内联子节点列表
    Inline(Vec<NavNode>),
}

impl NavChildren {
    /// 判断是否为叶子节点
    pub fn is_none(&self) -> bool {
        matches!(self, NavChildren::None)
    }

    /// 获取内联子节点的切片，叶子节点和外部子树返回空切片
    pub fn as_slice(&self) -> &[NavNode] {
        match self {
            NavChildren::Inline(nodes) => nodes,
            _ => &[],
        }
    }
}

/// 导航节点
///
/// NAVTREE字面量中的 `[ "标签", "链接", 子节点 ]` 三元组。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
    /// 显示标签
    pub label: String,
    /// 链接目标
    pub target: NavTarget,
    /// 子节点
    pub children: NavChildren,
}

impl NavNode {
    /// 创建新的叶子节点
    pub fn new(label: impl Into<String>, target: NavTarget) -> Self {
        Self {
            label: label.into(),
            target,
            children: NavChildren::None,
        }
    }

    /// 创建带子节点列表的节点
    pub fn with_children(
        label: impl Into<String>,
        target: NavTarget,
        children: Vec<NavNode>,
    ) -> Self {
        Self {
            label: label.into(),
            target,
            children: NavChildren::Inline(children),
        }
    }

    /// 创建引用外部子树脚本的节点
    pub fn with_external(
        label: impl Into<String>,
        target: NavTarget,
        base_name: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            target,
            children: NavChildren::External(base_name.into()),
        }
    }

    /// 追加内联子节点
    ///
    /// 叶子节点会被转换为带内联子节点列表的节点；
    /// 引用外部子树的节点同样会被转换（外部引用被丢弃）。
    pub fn add_child(&mut self, child: NavNode) {
        match &mut self.children {
            NavChildren::Inline(nodes) => nodes.push(child),
            _ => {
                self.children = NavChildren::Inline(vec![child]);
            }
        }
    }

    /// 获取节点的最大深度（叶子节点为1）
    pub fn depth(&self) -> u32 {
        1 + self
            .children
            .as_slice()
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// 获取节点及其所有子节点的平铺列表（先序遍历）
    pub fn flatten(&self) -> Vec<&NavNode> {
        let mut nodes = vec![self];
        for child in self.children.as_slice() {
            nodes.extend(child.flatten());
        }
        nodes
    }

    /// 根据显示标签查找节点
    pub fn find_by_label(&self, label: &str) -> Option<&NavNode> {
        if self.label == label {
            return Some(self);
        }
        for child in self.children.as_slice() {
            if let Some(found) = child.find_by_label(label) {
                return Some(found);
            }
        }
        None
    }

    /// 根据完整href查找节点
    pub fn find_by_href(&self, href: &str) -> Option<&NavNode> {
        if self.target.to_string() == href {
            return Some(self);
        }
        for child in self.children.as_slice() {
            if let Some(found) = child.find_by_href(href) {
                return Some(found);
            }
        }
        None
    }

    /// 根据路径数组获取子节点
    ///
    /// 路径数组表示从当前节点开始的索引路径，例如：
    /// - `[0]` 表示第一个子节点
    /// - `[0, 1]` 表示第一个子节点的第二个子节点
    /// - `[]` 表示当前节点本身
    pub fn node_at_path(&self, path: &[usize]) -> Option<&NavNode> {
        if path.is_empty() {
            return Some(self);
        }

        let children = self.children.as_slice();
        let first_index = path[0];
        if first_index >= children.len() {
            return None;
        }

        let child = &children[first_index];
        if path.len() == 1 {
            Some(child)
        } else {
            child.node_at_path(&path[1..])
        }
    }
}

/// 导航树
///
/// NAVTREE字面量的顶层数组，由若干根节点组成。
/// 解析器构造后即视为只读，可变辅助方法仅用于程序化构建。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavTree {
    /// 根节点列表
    pub roots: Vec<NavNode>,
}

impl NavTree {
    /// 创建新的空导航树
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// 添加根节点
    pub fn add_root(&mut self, node: NavNode) {
        self.roots.push(node);
    }

    /// 获取根节点数量
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// 判断导航树是否为空
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// 获取导航深度
    pub fn depth(&self) -> u32 {
        self.roots.iter().map(|root| root.depth()).max().unwrap_or(0)
    }

    /// 获取所有节点的平铺列表（先序遍历）
    pub fn flatten(&self) -> Vec<&NavNode> {
        let mut nodes = Vec::new();
        for root in &self.roots {
            nodes.extend(root.flatten());
        }
        nodes
    }

    /// 根据显示标签查找节点
    pub fn find_by_label(&self, label: &str) -> Option<&NavNode> {
        for root in &self.roots {
            if let Some(found) = root.find_by_label(label) {
                return Some(found);
            }
        }
        None
    }

    /// 根据完整href查找节点
    pub fn find_by_href(&self, href: &str) -> Option<&NavNode> {
        for root in &self.roots {
            if let Some(found) = root.find_by_href(href) {
                return Some(found);
            }
        }
        None
    }

    /// 根据路径数组获取节点
    ///
    /// 路径数组表示从根节点开始的索引路径，例如：
    /// - `[0]` 表示第一个根节点
    /// - `[0, 1]` 表示第一个根节点的第二个子节点
    pub fn node_at_path(&self, path: &[usize]) -> Option<&NavNode> {
        if path.is_empty() {
            return None;
        }

        let root_index = path[0];
        if root_index >= self.roots.len() {
            return None;
        }

        let root = &self.roots[root_index];
        if path.len() == 1 {
            Some(root)
        } else {
            root.node_at_path(&path[1..])
        }
    }

    /// 获取去重后的页面URL列表（保持遍历顺序）
    ///
    /// 同一页面内的多个锚点链接只计一次。
    pub fn page_urls(&self) -> Vec<String> {
        let mut pages = Vec::new();
        for node in self.flatten() {
            if !pages.iter().any(|p| p == &node.target.page) {
                pages.push(node.target.page.clone());
            }
        }
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> NavTree {
        let mut root = NavNode::with_children(
            "主页",
            NavTarget::page("index.html"),
            vec![
                NavNode::new("概述", NavTarget::anchored("index.html", "Overview")),
                NavNode::with_children(
                    "升级",
                    NavTarget::anchored("index.html", "section_Leveling"),
                    vec![NavNode::new(
                        "角色演化",
                        NavTarget::anchored("index.html", "section_LevelingCharacter"),
                    )],
                ),
            ],
        );
        root.add_child(NavNode::with_external(
            "模块",
            NavTarget::page("modules.html"),
            "modules",
        ));

        let mut tree = NavTree::new();
        tree.add_root(root);
        tree
    }

    #[test]
    fn test_target_parse_and_display() {
        let target = NavTarget::parse("index.html#Overview");
        assert_eq!(target.page, "index.html");
        assert_eq!(target.anchor.as_deref(), Some("Overview"));
        assert!(target.is_anchor_of("index.html"));
        assert_eq!(target.to_string(), "index.html#Overview");

        let plain = NavTarget::parse("modules.html");
        assert_eq!(plain.page, "modules.html");
        assert!(plain.anchor.is_none());
        assert_eq!(plain.to_string(), "modules.html");
    }

    #[test]
    fn test_tree_depth_and_flatten() {
        let tree = sample_tree();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.flatten().len(), 5);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_find_and_path_queries() {
        let tree = sample_tree();

        let node = tree.find_by_label("角色演化").unwrap();
        assert_eq!(
            node.target.to_string(),
            "index.html#section_LevelingCharacter"
        );

        let by_href = tree.find_by_href("index.html#Overview").unwrap();
        assert_eq!(by_href.label, "概述");

        assert_eq!(tree.node_at_path(&[0]).unwrap().label, "主页");
        assert_eq!(tree.node_at_path(&[0, 1, 0]).unwrap().label, "角色演化");
        assert!(tree.node_at_path(&[0, 9]).is_none());
        assert!(tree.node_at_path(&[]).is_none());
    }

    #[test]
    fn test_page_urls_deduplicated() {
        let tree = sample_tree();
        assert_eq!(tree.page_urls(), vec!["index.html", "modules.html"]);
    }

    #[test]
    fn test_add_child_converts_leaf() {
        let mut node = NavNode::new("页面", NavTarget::page("page.html"));
        assert!(node.children.is_none());

        node.add_child(NavNode::new("小节", NavTarget::anchored("page.html", "s1")));
        assert_eq!(node.children.as_slice().len(), 1);
        assert_eq!(node.depth(), 2);
    }
}
