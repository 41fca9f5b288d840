use std::path::PathBuf;

use crate::document::LabelLayout;
use crate::symbol::SymbolOptions;
use shared::models::product::{HISTORY_DISPLAY_LIMIT, MAX_PRINT_QUANTITY};

/// 服务器配置 - 标签站的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/label-station | 工作目录 (数据库, 打印队列) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | LABEL_LAYOUT | thermal | 打印布局: thermal (38x25mm) \| page (A4) |
/// | PRINT_COMMAND | (无) | 主机打印命令, 如 `lp`; 不设置则只写入队列目录 |
/// | PRINT_DELAY_MS | 250 | 调用打印命令前的固定延迟 |
/// | MAX_PRINT_QUANTITY | 100 | 每个打印任务的最大份数 |
/// | HISTORY_DISPLAY_LIMIT | 10 | 历史记录显示条数 (存储不限) |
/// | SYMBOL_MODULE_WIDTH | 2 | 条码模块宽度 (px) |
/// | SYMBOL_HEIGHT | 80 | 条码高度 (px) |
/// | SYMBOL_FONT_SIZE | 12 | 人眼可读数值字号 |
/// | SYMBOL_MARGIN | 5 | 条码四周留白 (px) |
/// | SYMBOL_DISPLAY_VALUE | true | 是否显示人眼可读数值 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/labels HTTP_PORT=8080 PRINT_COMMAND=lp cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和打印队列
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 打印文档布局
    pub layout: LabelLayout,
    /// 主机打印命令 (None = 只写入队列目录)
    pub print_command: Option<String>,
    /// 调用打印命令前的固定延迟 (毫秒)
    pub print_delay_ms: u64,
    /// 每个打印任务的最大份数
    pub max_print_quantity: u32,
    /// 历史记录显示条数
    pub history_display_limit: usize,
    /// 条码符号渲染参数
    pub symbol: SymbolOptions,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let defaults = SymbolOptions::default();
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/label-station".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            layout: std::env::var("LABEL_LAYOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            print_command: std::env::var("PRINT_COMMAND").ok().filter(|c| !c.is_empty()),
            print_delay_ms: std::env::var("PRINT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(250),
            max_print_quantity: std::env::var("MAX_PRINT_QUANTITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(MAX_PRINT_QUANTITY),
            history_display_limit: std::env::var("HISTORY_DISPLAY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(HISTORY_DISPLAY_LIMIT),
            symbol: SymbolOptions {
                module_width: env_or("SYMBOL_MODULE_WIDTH", defaults.module_width),
                height: env_or("SYMBOL_HEIGHT", defaults.height),
                font_size: env_or("SYMBOL_FONT_SIZE", defaults.font_size),
                margin: env_or("SYMBOL_MARGIN", defaults.margin),
                display_value: env_or("SYMBOL_DISPLAY_VALUE", defaults.display_value),
                ..defaults
            },
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Path of the redb database file
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("labels.redb")
    }

    /// Directory print documents are spooled to
    pub fn spool_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("spool")
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
