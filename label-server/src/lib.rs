//! Label Station server - sequential barcode label generation
//!
//! # Overview
//!
//! A small self-hosted service behind a browser form: it assigns sequential
//! numeric barcodes to manually entered products, keeps a persistent history
//! of everything generated, and produces printable barcode-label documents.
//!
//! # Module structure
//!
//! ```text
//! label-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── store/         # Counter & history store (redb)
//! ├── symbol/        # Code 128 symbol rendering (SVG)
//! ├── document/      # Printable label document builder
//! ├── printing/      # Print dispatch (spool + host print command)
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # Logging, price formatting
//! ```

pub mod api;
pub mod core;
pub mod document;
pub mod printing;
pub mod store;
pub mod symbol;
pub mod utils;

// Re-export 公共类型
pub use core::{AppState, Config, Server};
pub use document::{DocumentBuilder, LabelLayout, LabelPreview};
pub use printing::PrintDispatcher;
pub use store::LabelStore;
pub use symbol::{Code128Renderer, SymbolOptions};

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
///
/// `LOG_LEVEL` picks the level (default `info`), `LOG_DIR` enables
/// daily-rolling file output when it points at an existing directory.
pub fn setup_environment() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    let level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(level.as_deref(), None, log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __          __         __
   / /   ____ _/ /_  ___  / /
  / /   / __ `/ __ \/ _ \/ /
 / /___/ /_/ / /_/ /  __/ /
/_____/\__,_/_.___/\___/_/
   _____ __        __  _
  / ___// /_____ _/ /_(_)___  ____
  \__ \/ __/ __ `/ __/ / __ \/ __ \
 ___/ / /_/ /_/ / /_/ / /_/ / / / /
/____/\__/\__,_/\__/_/\____/_/ /_/
    "#
    );
}
