//! levelog - 面向级别的日志库
//!
//! 每个日志级别独立配置输出模式、标准流、输出器、颜色、前缀和时间戳，
//! 级别配置可在运行时并发修改，输出路径在修改时预先计算，日志输出不需要加锁。
//!
//! ## 模块
//!
//! - **level / registry**: 内置级别与自定义级别的标识和注册表
//! - **logger**: 核心日志器，按级别分发输出
//! - **formatter**: 文本与 JSON 渲染、缓冲池
//! - **appender**: 标准流、文件、内存输出器
//! - **global**: 全局 Logger 单例及便捷函数
//! - **http**: tower 请求日志中间件
//!
//! ## 示例
//!
//! ```ignore
//! use levelog::{info, infof, Logger, Mode};
//!
//! let logger = Logger::new();
//! info!(logger, "server", "started")?;
//!
//! let audit = logger.add_level("AUDIT", Mode::Both, false);
//! logger.custom_logf("AUDIT", "user {} deleted {}", &["alice".into(), 42.into()])?;
//! ```

pub mod appender;
pub mod color;
pub mod config;
pub mod error;
pub mod formatter;
pub mod global;
pub mod http;
pub mod level;
pub mod level_config;
pub mod log_bridge;
pub mod log_value;
pub mod logger;
mod macros;
pub mod mode;
pub mod registry;

// 重新导出主要的公共 API
pub use appender::{file_writer, FileAppender, LogAppender, MemoryAppender, StdStream};
pub use color::ColorFn;
pub use config::{LevelOptions, LoggerConfig};
pub use error::{LogError, Result};
pub use formatter::{raw_string, JsonRecord};
pub use http::{http_logger, HttpLogLayer, HttpLogService};
pub use level::LevelId;
pub use level_config::LevelConfig;
pub use log_bridge::{init_log_bridge, LogBridge};
pub use log_value::LogValue;
pub use logger::Logger;
pub use mode::{Mode, WriteMode};
