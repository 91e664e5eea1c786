//! 导航树脚本解析器模块
//!
//! 提供navtreedata.js文件所使用的JS字面量子集的解析功能。
//! 该子集由文档生成器固定产出：块注释、`var 名称 = 值;`形式的变量定义，
//! 值为数组、字符串或`null`。

use crate::navtree::error::{NavError, Result};
use crate::navtree::tree::node::{NavChildren, NavNode, NavTarget, NavTree};

/// JS字面量值
///
/// 脚本中单个变量的取值形态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsValue {
    /// `null`字面量
    Null,
    /// 字符串字面量（已解除转义）
    Str(String),
    /// 数组字面量
    Array(Vec<JsValue>),
}

/// 词法单元
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Equals,
    Null,
    Var,
    Ident(String),
    Str(String),
    Eof,
}

impl Token {
    /// 用于错误信息的描述
    fn describe(&self) -> String {
        match self {
            Token::LBracket => "'['".to_string(),
            Token::RBracket => "']'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Semicolon => "';'".to_string(),
            Token::Equals => "'='".to_string(),
            Token::Null => "null".to_string(),
            Token::Var => "var".to_string(),
            Token::Ident(name) => format!("标识符 '{}'", name),
            Token::Str(_) => "字符串".to_string(),
            Token::Eof => "文件结尾".to_string(),
        }
    }
}

/// 词法分析器
///
/// 逐字符扫描脚本源码，跳过空白和注释，记录行列位置用于错误报告。
struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// 消费一个字符并更新位置
    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// 跳过空白字符和注释
    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match self.chars.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('/') => {
                    let (line, column) = (self.line, self.column);
                    self.advance();
                    match self.chars.peek() {
                        Some('*') => {
                            self.advance();
                            self.skip_block_comment(line, column)?;
                        }
                        Some('/') => {
                            self.advance();
                            while let Some(&ch) = self.chars.peek() {
                                if ch == '\n' {
                                    break;
                                }
                                self.advance();
                            }
                        }
                        _ => {
                            return Err(NavError::parse_at(line, column, "孤立的'/'字符"));
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// 跳过块注释，`line`/`column`为注释起始位置
    fn skip_block_comment(&mut self, line: usize, column: usize) -> Result<()> {
        let mut prev_star = false;
        while let Some(ch) = self.advance() {
            if prev_star && ch == '/' {
                return Ok(());
            }
            prev_star = ch == '*';
        }
        Err(NavError::parse_at(line, column, "未闭合的块注释"))
    }

    /// 读取下一个词法单元
    fn next_token(&mut self) -> Result<Token> {
        self.skip_trivia()?;

        let (line, column) = (self.line, self.column);
        let ch = match self.chars.peek() {
            Some(&ch) => ch,
            None => return Ok(Token::Eof),
        };

        match ch {
            '[' => {
                self.advance();
                Ok(Token::LBracket)
            }
            ']' => {
                self.advance();
                Ok(Token::RBracket)
            }
            ',' => {
                self.advance();
                Ok(Token::Comma)
            }
            ';' => {
                self.advance();
                Ok(Token::Semicolon)
            }
            '=' => {
                self.advance();
                Ok(Token::Equals)
            }
            '"' | '\'' => self.read_string(),
            ch if ch.is_ascii_alphabetic() || ch == '_' || ch == '$' => {
                let mut ident = String::new();
                while let Some(&ch) = self.chars.peek() {
                    if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
                        ident.push(ch);
                        self.advance();
                    } else {
                        break;
                    }
                }
                match ident.as_str() {
                    "null" => Ok(Token::Null),
                    "var" => Ok(Token::Var),
                    _ => Ok(Token::Ident(ident)),
                }
            }
            ch => Err(NavError::parse_at(
                line,
                column,
                format!("意外的字符 '{}'", ch),
            )),
        }
    }

    /// 读取字符串字面量（单引号或双引号）
    fn read_string(&mut self) -> Result<Token> {
        let (line, column) = (self.line, self.column);
        let quote = self.advance().unwrap_or('"');
        let mut value = String::new();

        loop {
            let ch = match self.advance() {
                Some(ch) => ch,
                None => return Err(NavError::parse_at(line, column, "未终止的字符串")),
            };

            if ch == quote {
                return Ok(Token::Str(value));
            }

            if ch == '\\' {
                let (esc_line, esc_column) = (self.line, self.column);
                let escaped = match self.advance() {
                    Some(ch) => ch,
                    None => return Err(NavError::parse_at(line, column, "未终止的字符串")),
                };
                match escaped {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    '\\' => value.push('\\'),
                    '/' => value.push('/'),
                    '\'' => value.push('\''),
                    '"' => value.push('"'),
                    'u' => {
                        let mut code = 0u32;
                        for _ in 0..4 {
                            let digit = self
                                .advance()
                                .and_then(|c| c.to_digit(16))
                                .ok_or_else(|| {
                                    NavError::parse_at(
                                        esc_line,
                                        esc_column,
                                        "无效的\\u转义序列",
                                    )
                                })?;
                            code = code * 16 + digit;
                        }
                        let decoded = char::from_u32(code).ok_or_else(|| {
                            NavError::parse_at(esc_line, esc_column, "无效的Unicode码点")
                        })?;
                        value.push(decoded);
                    }
                    other => {
                        return Err(NavError::parse_at(
                            esc_line,
                            esc_column,
                            format!("不支持的转义字符 '\\{}'", other),
                        ));
                    }
                }
            } else {
                value.push(ch);
            }
        }
    }
}

/// 脚本解析结果
///
/// 按定义顺序保存脚本中的所有变量，并提供到导航树领域类型的转换。
#[derive(Debug, Clone)]
pub struct ScriptSource {
    variables: Vec<(String, JsValue)>,
}

impl ScriptSource {
    /// 解析脚本源码
    ///
    /// # 参数
    /// * `source` - navtreedata.js文件的文本内容
    ///
    /// # 返回值
    /// * `Result<ScriptSource, NavError>` - 解析后的变量集合
    pub fn parse(source: &str) -> Result<ScriptSource> {
        let mut lexer = Lexer::new(source);
        let mut variables = Vec::new();

        loop {
            let token = lexer.next_token()?;
            match token {
                Token::Eof => break,
                Token::Var => {
                    let name = match lexer.next_token()? {
                        Token::Ident(name) => name,
                        other => {
                            return Err(NavError::parse_at(
                                lexer.line,
                                lexer.column,
                                format!("var后应为变量名，实际为{}", other.describe()),
                            ));
                        }
                    };
                    Self::expect(&mut lexer, Token::Equals)?;
                    let value = Self::parse_value(&mut lexer)?;
                    Self::expect(&mut lexer, Token::Semicolon)?;
                    variables.push((name, value));
                }
                other => {
                    return Err(NavError::parse_at(
                        lexer.line,
                        lexer.column,
                        format!("应为var声明，实际为{}", other.describe()),
                    ));
                }
            }
        }

        Ok(ScriptSource { variables })
    }

    /// 消费一个词法单元并校验其类型
    fn expect(lexer: &mut Lexer, expected: Token) -> Result<()> {
        let token = lexer.next_token()?;
        if token == expected {
            Ok(())
        } else {
            Err(NavError::parse_at(
                lexer.line,
                lexer.column,
                format!("应为{}，实际为{}", expected.describe(), token.describe()),
            ))
        }
    }

    /// 解析单个JS值（数组、字符串或null）
    fn parse_value(lexer: &mut Lexer) -> Result<JsValue> {
        let token = lexer.next_token()?;
        match token {
            Token::Null => Ok(JsValue::Null),
            Token::Str(value) => Ok(JsValue::Str(value)),
            Token::LBracket => Self::parse_array_rest(lexer),
            other => Err(NavError::parse_at(
                lexer.line,
                lexer.column,
                format!("应为值，实际为{}", other.describe()),
            )),
        }
    }

    /// 解析已消费开括号的数组剩余部分
    fn parse_array_rest(lexer: &mut Lexer) -> Result<JsValue> {
        let mut elements = Vec::new();
        loop {
            let token = lexer.next_token()?;
            match token {
                Token::RBracket => break,
                Token::Null => elements.push(JsValue::Null),
                Token::Str(value) => elements.push(JsValue::Str(value)),
                Token::LBracket => {
                    elements.push(Self::parse_array_rest(lexer)?);
                }
                other => {
                    return Err(NavError::parse_at(
                        lexer.line,
                        lexer.column,
                        format!("数组中出现意外的{}", other.describe()),
                    ));
                }
            }

            match lexer.next_token()? {
                Token::Comma => continue,
                Token::RBracket => break,
                other => {
                    return Err(NavError::parse_at(
                        lexer.line,
                        lexer.column,
                        format!("数组元素后应为','或']'，实际为{}", other.describe()),
                    ));
                }
            }
        }
        Ok(JsValue::Array(elements))
    }

    /// 根据名称获取变量值
    pub fn get(&self, name: &str) -> Option<&JsValue> {
        self.variables
            .iter()
            .find(|(var_name, _)| var_name == name)
            .map(|(_, value)| value)
    }

    /// 获取所有变量名（按定义顺序）
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// 将指定变量转换为导航树
    ///
    /// # 参数
    /// * `name` - 变量名（通常为`NAVTREE`）
    pub fn nav_tree(&self, name: &str) -> Result<NavTree> {
        let value = self
            .get(name)
            .ok_or_else(|| NavError::MissingVariable(name.to_string()))?;

        let elements = match value {
            JsValue::Array(elements) => elements,
            _ => {
                return Err(NavError::InvalidNavTree(format!(
                    "变量{}应为数组",
                    name
                )));
            }
        };

        let mut tree = NavTree::new();
        for element in elements {
            tree.add_root(Self::value_to_node(element)?);
        }
        Ok(tree)
    }

    /// 将指定变量转换为字符串列表（用于NAVTREEINDEX）
    pub fn string_list(&self, name: &str) -> Result<Vec<String>> {
        let value = self
            .get(name)
            .ok_or_else(|| NavError::MissingVariable(name.to_string()))?;

        let elements = match value {
            JsValue::Array(elements) => elements,
            _ => {
                return Err(NavError::InvalidIndex(format!("变量{}应为数组", name)));
            }
        };

        elements
            .iter()
            .map(|element| match element {
                JsValue::Str(value) => Ok(value.clone()),
                _ => Err(NavError::InvalidIndex(format!(
                    "变量{}的元素应为字符串",
                    name
                ))),
            })
            .collect()
    }

    /// 将指定变量转换为字符串，变量不存在时返回None
    pub fn string(&self, name: &str) -> Result<Option<String>> {
        match self.get(name) {
            None => Ok(None),
            Some(JsValue::Str(value)) => Ok(Some(value.clone())),
            Some(_) => Err(NavError::InvalidNavTree(format!(
                "变量{}应为字符串",
                name
            ))),
        }
    }

    /// 将JS值转换为导航节点
    ///
    /// 每个节点必须为恰好3个元素的数组：标签字符串、href字符串、
    /// 子节点（null、字符串或数组）。
    fn value_to_node(value: &JsValue) -> Result<NavNode> {
        let elements = match value {
            JsValue::Array(elements) => elements,
            _ => {
                return Err(NavError::InvalidNavTree(
                    "导航节点应为数组".to_string(),
                ));
            }
        };

        if elements.len() != 3 {
            return Err(NavError::InvalidNavTree(format!(
                "导航节点应恰好包含3个元素，实际为{}个",
                elements.len()
            )));
        }

        let label = match &elements[0] {
            JsValue::Str(label) => label.clone(),
            _ => {
                return Err(NavError::InvalidNavTree(
                    "导航节点的第1个元素（标签）应为字符串".to_string(),
                ));
            }
        };

        let href = match &elements[1] {
            JsValue::Str(href) => href,
            _ => {
                return Err(NavError::InvalidNavTree(format!(
                    "导航节点 '{}' 的第2个元素（链接）应为字符串",
                    label
                )));
            }
        };

        let children = match &elements[2] {
            JsValue::Null => NavChildren::None,
            JsValue::Str(base_name) => NavChildren::External(base_name.clone()),
            JsValue::Array(child_values) => {
                let mut children = Vec::with_capacity(child_values.len());
                for child_value in child_values {
                    children.push(Self::value_to_node(child_value)?);
                }
                NavChildren::Inline(children)
            }
        };

        Ok(NavNode {
            label,
            target: NavTarget::parse(href),
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_script() {
        let source = r#"
var NAVTREE =
[
  [ "主页", "index.html", [
    [ "概述", "index.html#Overview", null ],
    [ "模块", "modules.html", "modules" ]
  ] ]
];

var NAVTREEINDEX =
[
".html",
"modules.html"
];

var SYNCONMSG = 'click to disable panel synchronisation';
var SYNCOFFMSG = 'click to enable panel synchronisation';
"#;

        let script = ScriptSource::parse(source).unwrap();
        assert_eq!(
            script.variable_names(),
            vec!["NAVTREE", "NAVTREEINDEX", "SYNCONMSG", "SYNCOFFMSG"]
        );

        let tree = script.nav_tree("NAVTREE").unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.roots[0].label, "主页");
        assert_eq!(tree.roots[0].children.as_slice().len(), 2);
        assert_eq!(
            tree.roots[0].children.as_slice()[1].children,
            NavChildren::External("modules".to_string())
        );

        let index = script.string_list("NAVTREEINDEX").unwrap();
        assert_eq!(index, vec![".html", "modules.html"]);

        assert_eq!(
            script.string("SYNCONMSG").unwrap().as_deref(),
            Some("click to disable panel synchronisation")
        );
    }

    #[test]
    fn test_parse_skips_license_comment() {
        let source = "/*\n@licstart 版权声明\n@licend\n*/\nvar NAVTREE =\n[\n];";
        let script = ScriptSource::parse(source).unwrap();
        let tree = script.nav_tree("NAVTREE").unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_parse_escaped_quotes_in_label() {
        let source = r#"var NAVTREE = [ [ "代码中的 \"// {{{\" 是什么？", "faq.html", null ] ];"#;
        let script = ScriptSource::parse(source).unwrap();
        let tree = script.nav_tree("NAVTREE").unwrap();
        assert_eq!(tree.roots[0].label, "代码中的 \"// {{{\" 是什么？");
    }

    #[test]
    fn test_parse_unicode_escape() {
        let source = "var NAVTREE = [ [ \"\\u4e3b\\u9875\", \"index.html\", null ] ];";
        let script = ScriptSource::parse(source).unwrap();
        let tree = script.nav_tree("NAVTREE").unwrap();
        assert_eq!(tree.roots[0].label, "主页");
    }

    #[test]
    fn test_missing_variable() {
        let script = ScriptSource::parse("var OTHER = null;").unwrap();
        let err = script.nav_tree("NAVTREE").unwrap_err();
        assert!(matches!(err, NavError::MissingVariable(name) if name == "NAVTREE"));
    }

    #[test]
    fn test_invalid_node_arity() {
        let source = r#"var NAVTREE = [ [ "主页", "index.html" ] ];"#;
        let script = ScriptSource::parse(source).unwrap();
        let err = script.nav_tree("NAVTREE").unwrap_err();
        assert!(matches!(err, NavError::InvalidNavTree(_)));
    }

    #[test]
    fn test_unterminated_string_reports_position() {
        let err = ScriptSource::parse("var X = \"oops;").unwrap_err();
        match err {
            NavError::Parse { line, column, .. } => {
                assert_eq!(line, 1);
                assert_eq!(column, 9);
            }
            other => panic!("应为Parse错误，实际为: {:?}", other),
        }
    }

    #[test]
    fn test_missing_sync_message_is_none() {
        let script = ScriptSource::parse("var NAVTREE = [];").unwrap();
        assert!(script.string("SYNCONMSG").unwrap().is_none());
    }
}
