//! 导航大纲（Navigation Outline）模块
//!
//! 提供导航树的树形展示和统计功能。

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::navtree::tree::node::{NavChildren, NavNode, NavTree};

/// 大纲显示样式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineStyle {
    /// 使用树状符号（├── └──）
    TreeSymbols,
    /// 使用缩进和符号（• ）
    Indented,
}

/// 大纲节点
#[derive(Debug, Clone)]
pub struct OutlineNode {
    /// 显示标签
    pub label: String,
    /// 链接目标（完整href）
    pub href: String,
    /// 外部子树脚本的基础名（子树被拆分到单独文件时）
    pub external: Option<String>,
    /// 子节点
    pub children: Vec<OutlineNode>,
    /// 节点深度
    pub depth: u32,
}

impl OutlineNode {
    /// 创建新的大纲节点
    pub fn new(label: String, href: String, depth: u32) -> Self {
        Self {
            label,
            href,
            external: None,
            children: Vec::new(),
            depth,
        }
    }

    /// 添加子节点
    pub fn add_child(&mut self, child: OutlineNode) {
        self.children.push(child);
    }

    /// 获取节点的最大深度
    pub fn max_depth(&self) -> u32 {
        let mut max_depth = self.depth;
        for child in &self.children {
            max_depth = max_depth.max(child.max_depth());
        }
        max_depth
    }

    /// 获取节点及其所有子节点的数量
    pub fn total_nodes(&self) -> usize {
        let mut count = 1;
        for child in &self.children {
            count += child.total_nodes();
        }
        count
    }

    /// 收集所有叶子节点（没有子节点的节点）
    pub fn collect_leaf_nodes(&self) -> Vec<&OutlineNode> {
        if self.children.is_empty() {
            vec![self]
        } else {
            let mut leaves = Vec::new();
            for child in &self.children {
                leaves.extend(child.collect_leaf_nodes());
            }
            leaves
        }
    }

    /// 统计引用外部子树脚本的节点数量
    pub fn count_external(&self) -> usize {
        let mut count = usize::from(self.external.is_some());
        for child in &self.children {
            count += child.count_external();
        }
        count
    }

    /// 根据路径数组获取子节点
    ///
    /// 路径数组表示从当前节点开始的索引路径，`[]`表示当前节点本身。
    pub fn node_at_path(&self, path: &[usize]) -> Option<&OutlineNode> {
        if path.is_empty() {
            return Some(self);
        }

        let first_index = path[0];
        if first_index >= self.children.len() {
            return None;
        }

        let child = &self.children[first_index];
        if path.len() == 1 {
            Some(child)
        } else {
            child.node_at_path(&path[1..])
        }
    }
}

/// 导航大纲结构
#[derive(Debug, Clone)]
pub struct Outline {
    /// 文档标题（通常取第一个根节点的标签）
    pub title: Option<String>,
    /// 根节点列表
    pub roots: Vec<OutlineNode>,
    /// 显示样式
    pub style: OutlineStyle,
    /// 是否显示链接目标
    pub show_targets: bool,
    /// 最大显示深度（None表示显示所有）
    pub max_depth: Option<u32>,
}

impl Outline {
    /// 创建新的空大纲
    pub fn new() -> Self {
        Self {
            title: None,
            roots: Vec::new(),
            style: OutlineStyle::TreeSymbols,
            show_targets: true,
            max_depth: None,
        }
    }

    /// 设置文档标题
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// 设置显示样式
    pub fn with_style(mut self, style: OutlineStyle) -> Self {
        self.style = style;
        self
    }

    /// 设置是否显示链接目标
    pub fn with_show_targets(mut self, show_targets: bool) -> Self {
        self.show_targets = show_targets;
        self
    }

    /// 设置最大显示深度
    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 添加根节点
    pub fn add_root(&mut self, node: OutlineNode) {
        self.roots.push(node);
    }

    /// 获取大纲的统计信息
    pub fn statistics(&self) -> OutlineStatistics {
        let mut total_nodes = 0;
        let mut max_depth = 0;
        let mut leaf_count = 0;
        let mut external_count = 0;

        for root in &self.roots {
            total_nodes += root.total_nodes();
            max_depth = max_depth.max(root.max_depth() + 1);
            leaf_count += root.collect_leaf_nodes().len();
            external_count += root.count_external();
        }

        OutlineStatistics {
            total_nodes,
            max_depth,
            leaf_count,
            root_count: self.roots.len(),
            external_count,
        }
    }

    /// 获取所有节点的显示标签
    pub fn all_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        for root in &self.roots {
            Self::collect_labels(root, &mut labels);
        }
        labels
    }

    /// 递归收集标签
    fn collect_labels(node: &OutlineNode, labels: &mut Vec<String>) {
        labels.push(node.label.clone());
        for child in &node.children {
            Self::collect_labels(child, labels);
        }
    }

    /// 获取所有节点的链接目标
    pub fn all_hrefs(&self) -> Vec<String> {
        let mut hrefs = Vec::new();
        for root in &self.roots {
            Self::collect_hrefs(root, &mut hrefs);
        }
        hrefs
    }

    /// 递归收集链接目标
    fn collect_hrefs(node: &OutlineNode, hrefs: &mut Vec<String>) {
        hrefs.push(node.href.clone());
        for child in &node.children {
            Self::collect_hrefs(child, hrefs);
        }
    }

    /// 根据路径数组获取节点
    ///
    /// 路径数组表示从根节点开始的索引路径，例如：
    /// - `[0]` 表示第一个根节点
    /// - `[0, 1]` 表示第一个根节点的第二个子节点
    pub fn node_at_path(&self, path: &[usize]) -> Option<&OutlineNode> {
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

    /// 获取节点的下一个兄弟节点
    /// 如果是最后一个节点或者没有找到节点，返回 None
    pub fn next_sibling(&self, current_path: &[usize]) -> Option<&OutlineNode> {
        if current_path.is_empty() {
            return None;
        }

        let mut next_path = current_path.to_vec();
        let last_index = next_path.len() - 1;
        next_path[last_index] += 1;

        self.node_at_path(&next_path)
    }

    /// 获取节点的上一个兄弟节点
    /// 如果是第一个节点或者没有找到节点，返回 None
    pub fn prev_sibling(&self, current_path: &[usize]) -> Option<&OutlineNode> {
        if current_path.is_empty() {
            return None;
        }

        let mut prev_path = current_path.to_vec();
        let last_index = prev_path.len() - 1;

        if prev_path[last_index] == 0 {
            return None;
        }

        prev_path[last_index] -= 1;
        self.node_at_path(&prev_path)
    }

    /// 渲染单个节点
    fn render_node(
        &self,
        node: &OutlineNode,
        current_depth: u32,
        is_last: bool,
        prefix: &str,
        result: &mut String,
    ) {
        if let Some(max_depth) = self.max_depth {
            if current_depth >= max_depth {
                return;
            }
        }

        match self.style {
            OutlineStyle::TreeSymbols => {
                self.render_tree_style(node, current_depth, is_last, prefix, result);
            }
            OutlineStyle::Indented => {
                self.render_indent_style(node, current_depth, result);
            }
        }
    }

    /// 格式化节点内容
    fn format_node(&self, node: &OutlineNode) -> String {
        let mut content = if self.show_targets {
            format!("{} → {}", node.label, node.href)
        } else {
            node.label.clone()
        };
        if let Some(external) = &node.external {
            content.push_str(&format!(" [外部子树: {}.js]", external));
        }
        content
    }

    /// 渲染树状符号风格
    fn render_tree_style(
        &self,
        node: &OutlineNode,
        current_depth: u32,
        is_last: bool,
        prefix: &str,
        result: &mut String,
    ) {
        let current_prefix = if is_last { "└── " } else { "├── " };
        result.push_str(&format!(
            "{}{}{}\n",
            prefix,
            current_prefix,
            self.format_node(node)
        ));

        if let Some(max_depth) = self.max_depth {
            if current_depth + 1 >= max_depth {
                return;
            }
        }

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        for (index, child) in node.children.iter().enumerate() {
            let is_child_last = index == node.children.len() - 1;
            self.render_node(child, current_depth + 1, is_child_last, &child_prefix, result);
        }
    }

    /// 渲染缩进风格
    fn render_indent_style(&self, node: &OutlineNode, current_depth: u32, result: &mut String) {
        let indent = "  ".repeat(current_depth as usize);
        result.push_str(&format!("{}• {}\n", indent, self.format_node(node)));

        if let Some(max_depth) = self.max_depth {
            if current_depth + 1 >= max_depth {
                return;
            }
        }

        for child in &node.children {
            self.render_indent_style(child, current_depth + 1, result);
        }
    }
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Outline {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut result = String::new();

        if let Some(ref title) = self.title {
            let depth_info = if let Some(max_depth) = self.max_depth {
                format!(" (深度限制: {})", max_depth)
            } else {
                String::new()
            };
            result.push_str(&format!("📖 {}{}\n", title, depth_info));
            result.push_str("═══════════════════════════════════════\n\n");
        }

        for (index, root) in self.roots.iter().enumerate() {
            let is_last = index == self.roots.len() - 1;
            self.render_node(root, 0, is_last, "", &mut result);
        }

        write!(f, "{}", result)
    }
}

/// 大纲统计信息
#[derive(Debug, Clone)]
pub struct OutlineStatistics {
    /// 总节点数
    pub total_nodes: usize,
    /// 最大深度
    pub max_depth: u32,
    /// 叶子节点数
    pub leaf_count: usize,
    /// 根节点数
    pub root_count: usize,
    /// 引用外部子树脚本的节点数
    pub external_count: usize,
}

impl Display for OutlineStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "大纲统计: {} 个节点, {} 个根节点, {} 个叶子节点, {} 个外部子树, 最大深度: {}",
            self.total_nodes, self.root_count, self.leaf_count, self.external_count, self.max_depth
        )
    }
}

/// 从导航树创建大纲
pub fn create_outline_from_tree(tree: &NavTree) -> Outline {
    let mut outline = Outline::new();

    // 文档标题取第一个根节点的标签
    outline.title = tree.roots.first().map(|root| root.label.clone());

    for node in &tree.roots {
        let outline_node = convert_nav_node(node, 0);
        outline.add_root(outline_node);
    }

    outline
}

/// 递归转换导航节点为大纲节点
fn convert_nav_node(node: &NavNode, depth: u32) -> OutlineNode {
    let mut outline_node = OutlineNode::new(node.label.clone(), node.target.to_string(), depth);

    match &node.children {
        NavChildren::None => {}
        NavChildren::External(base_name) => {
            outline_node.external = Some(base_name.clone());
        }
        NavChildren::Inline(children) => {
            for child in children {
                outline_node.add_child(convert_nav_node(child, depth + 1));
            }
        }
    }

    outline_node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navtree::tree::node::{NavNode, NavTarget};

    fn sample_outline() -> Outline {
        let mut tree = NavTree::new();
        tree.add_root(NavNode::with_children(
            "主页",
            NavTarget::page("index.html"),
            vec![
                NavNode::new("概述", NavTarget::anchored("index.html", "Overview")),
                NavNode::with_external("模块", NavTarget::page("modules.html"), "modules"),
            ],
        ));
        create_outline_from_tree(&tree)
    }

    #[test]
    fn test_statistics() {
        let outline = sample_outline();
        let stats = outline.statistics();
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.root_count, 1);
        assert_eq!(stats.leaf_count, 2);
        assert_eq!(stats.external_count, 1);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn test_title_from_first_root() {
        let outline = sample_outline();
        assert_eq!(outline.title.as_deref(), Some("主页"));
    }

    #[test]
    fn test_render_tree_style() {
        let outline = sample_outline().with_title(None).with_show_targets(false);
        let rendered = outline.to_string();
        assert_eq!(
            rendered,
            "└── 主页\n    ├── 概述\n    └── 模块 [外部子树: modules.js]\n"
        );
    }

    #[test]
    fn test_render_indent_style_with_targets() {
        let outline = sample_outline()
            .with_title(None)
            .with_style(OutlineStyle::Indented);
        let rendered = outline.to_string();
        assert!(rendered.starts_with("• 主页 → index.html\n"));
        assert!(rendered.contains("  • 概述 → index.html#Overview\n"));
    }

    #[test]
    fn test_max_depth_limits_rendering() {
        let outline = sample_outline()
            .with_title(None)
            .with_show_targets(false)
            .with_max_depth(Some(1));
        assert_eq!(outline.to_string(), "└── 主页\n");
    }

    #[test]
    fn test_path_and_sibling_queries() {
        let outline = sample_outline();
        assert_eq!(outline.node_at_path(&[0, 0]).unwrap().label, "概述");
        assert_eq!(outline.next_sibling(&[0, 0]).unwrap().label, "模块");
        assert!(outline.prev_sibling(&[0, 0]).is_none());
        assert_eq!(outline.prev_sibling(&[0, 1]).unwrap().label, "概述");
    }

    #[test]
    fn test_label_and_href_listings() {
        let outline = sample_outline();
        assert_eq!(outline.all_labels(), vec!["主页", "概述", "模块"]);
        assert_eq!(
            outline.all_hrefs(),
            vec!["index.html", "index.html#Overview", "modules.html"]
        );
    }
}
