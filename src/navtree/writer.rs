//! 导航树脚本序列化模块
//!
//! 按文档生成器的固定排版把导航数据写回navtreedata.js文本。
//! 对生成器产出的文件，解析后再序列化可得到字节级一致的结果。

use crate::navtree::config::EmitConfig;
use crate::navtree::index::NavIndex;
use crate::navtree::script::NavScript;
use crate::navtree::sync::SyncMessages;
use crate::navtree::tree::node::{NavChildren, NavNode, NavTree};

/// 文件头部的许可证注释（与生成器产出逐字一致）
pub const LICENSE_BANNER: &str = "/*\n\
@licstart  The following is the entire license notice for the\n\
JavaScript code in this file.\n\
\n\
Copyright (C) 1997-2019 by Dimitri van Heesch\n\
\n\
This program is free software; you can redistribute it and/or modify\n\
it under the terms of version 2 of the GNU General Public License as published by\n\
the Free Software Foundation\n\
\n\
This program is distributed in the hope that it will be useful,\n\
but WITHOUT ANY WARRANTY; without even the implied warranty of\n\
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the\n\
GNU General Public License for more details.\n\
\n\
You should have received a copy of the GNU General Public License along\n\
with this program; if not, write to the Free Software Foundation, Inc.,\n\
51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.\n\
\n\
@licend  The above is the entire license notice\n\
for the JavaScript code in this file\n\
*/\n";

/// 将完整的导航脚本序列化为JS文本
///
/// # 参数
/// * `script` - 导航脚本数据
/// * `config` - 输出配置
///
/// # 返回值
/// * `String` - navtreedata.js文本（结尾无换行符，与生成器产出一致）
pub fn write_script(script: &NavScript, config: &EmitConfig) -> String {
    let mut out = String::new();

    if config.include_license {
        out.push_str(LICENSE_BANNER);
    }

    write_tree(&mut out, &script.tree, config);
    out.push('\n');
    write_index(&mut out, &script.index, config);
    out.push('\n');
    write_sync(&mut out, &script.sync, config);

    out
}

/// 写出导航树变量定义
fn write_tree(out: &mut String, tree: &NavTree, config: &EmitConfig) {
    out.push_str(&format!("var {} =\n[\n", config.tree_variable));

    for (index, root) in tree.roots.iter().enumerate() {
        write_node(out, root, 0, config.indent_width);
        if index + 1 < tree.roots.len() {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("];\n");
}

/// 递归写出单个导航节点
///
/// 节点形如 `[ "标签", "链接", 子节点 ]`，内联子节点列表在同一行
/// 以`[`开启，并在节点缩进处以`] ]`收尾。
fn write_node(out: &mut String, node: &NavNode, depth: usize, indent_width: usize) {
    let indent = " ".repeat(indent_width * (depth + 1));

    out.push_str(&indent);
    out.push_str("[ \"");
    out.push_str(&escape_double_quoted(&node.label));
    out.push_str("\", \"");
    out.push_str(&escape_double_quoted(&node.target.to_string()));
    out.push_str("\", ");

    match &node.children {
        NavChildren::None => {
            out.push_str("null ]");
        }
        NavChildren::External(base_name) => {
            out.push('"');
            out.push_str(&escape_double_quoted(base_name));
            out.push_str("\" ]");
        }
        NavChildren::Inline(children) => {
            out.push_str("[\n");
            for (index, child) in children.iter().enumerate() {
                write_node(out, child, depth + 1, indent_width);
                if index + 1 < children.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&indent);
            out.push_str("] ]");
        }
    }
}

/// 写出索引表变量定义（条目不缩进，每行一个）
fn write_index(out: &mut String, index: &NavIndex, config: &EmitConfig) {
    out.push_str(&format!("var {} =\n[\n", config.index_variable));

    let entries = index.entries();
    for (position, entry) in entries.iter().enumerate() {
        out.push('"');
        out.push_str(&escape_double_quoted(entry));
        out.push('"');
        if position + 1 < entries.len() {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("];\n");
}

/// 写出两条同步提示变量定义（单引号字符串，结尾无换行）
fn write_sync(out: &mut String, sync: &SyncMessages, config: &EmitConfig) {
    out.push_str(&format!(
        "var {} = '{}';\n",
        config.sync_on_variable,
        escape_single_quoted(&sync.on_message)
    ));
    out.push_str(&format!(
        "var {} = '{}';",
        config.sync_off_variable,
        escape_single_quoted(&sync.off_message)
    ));
}

/// 转义双引号字符串内容
fn escape_double_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            ch => escaped.push(ch),
        }
    }
    escaped
}

/// 转义单引号字符串内容
fn escape_single_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            ch => escaped.push(ch),
        }
    }
    escaped
}
