use navforge::{EmitConfig, NavScript, OutlineStyle, Result, SyncState};
use clap::Parser;

/// 🧭 NavForge - Doxygen导航树数据处理工具
#[derive(Parser)]
#[command(name = "navforge")]
#[command(about = "一个用于处理Doxygen导航树数据文件的Rust工具")]
#[command(version)]
struct Args {
    /// navtreedata.js文件路径
    #[arg(help = "要处理的navtreedata.js文件路径")]
    nav_file: String,

    /// 详细输出模式
    #[arg(short, long, help = "显示详细信息")]
    verbose: bool,

    /// 显示导航大纲
    #[arg(short, long, help = "显示导航树大纲结构")]
    tree: bool,

    /// 显示索引表
    #[arg(short, long, help = "显示NAVTREEINDEX索引表信息")]
    index: bool,

    /// 显示同步提示消息
    #[arg(short, long, help = "显示面板同步开关的提示消息")]
    sync: bool,

    /// 往返一致性检查
    #[arg(short, long, help = "重新序列化并与原文件逐字节比较")]
    check: bool,

    /// 大纲显示样式
    #[arg(long, value_enum, default_value = "tree-symbols", help = "大纲的显示样式")]
    style: OutlineFormat,

    /// 大纲最大显示深度
    #[arg(long, help = "大纲最大显示深度（不指定则显示所有层级）")]
    max_depth: Option<u32>,
}

/// 大纲显示样式
#[derive(clap::ValueEnum, Clone, Debug)]
enum OutlineFormat {
    /// 树状符号风格（├── └──）
    TreeSymbols,
    /// 缩进符号风格（• ）
    Indented,
}

fn main() {
    let args = Args::parse();

    println!("🧭 NavForge - 导航树数据处理工具");

    if args.verbose {
        println!("🔍 详细模式已启用");
    }

    println!("正在检查导航数据文件: {}", args.nav_file);

    match process_nav_file(&args) {
        Ok(_) => println!("🎉 导航数据文件处理完成！"),
        Err(e) => eprintln!("❌ 错误: {}", e),
    }
}

fn process_nav_file(args: &Args) -> Result<()> {
    let source = std::fs::read_to_string(&args.nav_file)?;
    let script = NavScript::from_str(&source)?;

    // 基本信息
    let stats = script.statistics();
    println!("\n📊 导航树信息:");
    println!("  📖 {}", stats);
    match script.index.validate() {
        Ok(_) => println!("  ✅ 索引表顺序校验通过 ({} 个条目)", script.index.len()),
        Err(e) => println!("  ⚠️  索引表校验失败: {}", e),
    }

    if args.tree {
        display_outline(&script, args);
    }

    if args.index {
        display_index(&script, args.verbose);
    }

    if args.sync {
        display_sync(&script);
    }

    if args.check {
        check_round_trip(&script, &source);
    }

    Ok(())
}

/// 显示导航大纲
fn display_outline(script: &NavScript, args: &Args) {
    println!("\n🌳 导航大纲:");

    let style = match args.style {
        OutlineFormat::TreeSymbols => OutlineStyle::TreeSymbols,
        OutlineFormat::Indented => OutlineStyle::Indented,
    };

    let mut outline = script.outline().with_style(style);

    if args.verbose {
        // 详细模式：显示链接目标
        outline = outline.with_show_targets(true).with_max_depth(args.max_depth);
    } else {
        // 简洁模式：不显示链接目标，默认限制深度为3
        outline = outline
            .with_show_targets(false)
            .with_max_depth(args.max_depth.or(Some(3)));
    }

    println!("\n{}", outline);

    if args.verbose {
        let labels = outline.all_labels();
        if !labels.is_empty() {
            println!("  📚 节点标签列表:");
            for (i, label) in labels.iter().enumerate() {
                println!("    {}. {}", i + 1, label);
            }
        }
    }
}

/// 显示索引表信息
fn display_index(script: &NavScript, verbose: bool) {
    println!("\n🗂️  索引表:");
    println!("  条目总数: {}", script.index.len());

    if verbose {
        for (i, entry) in script.index.entries().iter().enumerate() {
            println!("    {}. \"{}\"", i + 1, entry);
        }

        // 演示查找规则：页面列表中每个页面所属的分块
        let pages = script.tree.page_urls();
        if !pages.is_empty() {
            println!("  📄 页面分块归属:");
            for page in pages {
                match script.index.chunk_for(&page) {
                    Some(chunk) => println!("    {} -> navtreeindex{}.js", page, chunk),
                    None => println!("    {} -> 无归属分块", page),
                }
            }
        }
    }
}

/// 显示同步提示消息
fn display_sync(script: &NavScript) {
    println!("\n🔄 面板同步提示:");
    let state = SyncState::On;
    println!("  同步开启时: {}", state.tooltip(&script.sync));
    println!("  同步关闭时: {}", state.toggle().tooltip(&script.sync));
    if script.sync.is_default() {
        println!("  （与生成器默认消息一致）");
    }
}

/// 往返一致性检查：重新序列化并与原始文本比较
fn check_round_trip(script: &NavScript, source: &str) {
    println!("\n🔁 往返一致性检查:");

    let mut config = EmitConfig::default_config();
    config.include_license = source.trim_start().starts_with("/*");

    let emitted = script.to_js(&config);
    if emitted == source {
        println!("  ✅ 重新序列化结果与原文件逐字节一致");
    } else {
        println!("  ⚠️  重新序列化结果与原文件不一致");
        println!("    原文件: {} 字节, 序列化结果: {} 字节", source.len(), emitted.len());

        // 定位第一处差异，便于排查手工编辑过的文件
        if let Some(position) = source
            .bytes()
            .zip(emitted.bytes())
            .position(|(a, b)| a != b)
        {
            let line = source[..position].bytes().filter(|&b| b == b'\n').count() + 1;
            println!("    第一处差异位于第 {} 行（字节偏移 {}）", line, position);
        }
    }
}
