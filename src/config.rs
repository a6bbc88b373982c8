use crate::appender::{FileAppender, StdStream};
use crate::error::{LogError, Result};
use crate::formatter::DEFAULT_POOL_SIZE;
use crate::level::LevelId;
use crate::logger::Logger;
use crate::mode::Mode;
use serde::Deserialize;
use smart_default::SmartDefault;

/// Logger 配置
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LoggerConfig {
    /// 所有级别的输出模式
    pub mode: Mode,

    /// 标准流输出是否着色
    #[default = true]
    pub color: bool,

    /// 是否输出 JSON
    pub json: bool,

    /// 是否输出时间戳
    #[default = true]
    pub timestamp: bool,

    /// 输出阈值，内置级别名称或缩写，例如 "info"、"W"
    pub level: Option<String>,

    /// 缓冲池大小
    #[default(DEFAULT_POOL_SIZE)]
    pub pool_buffer: usize,

    /// 所有级别共享的日志文件
    pub file: Option<String>,

    /// 级别配置，标签未注册时自动注册为自定义级别
    pub levels: Vec<LevelOptions>,
}

/// 单个级别的配置，未设置的字段保持原值
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LevelOptions {
    pub tag: String,
    pub mode: Option<Mode>,
    pub color: Option<bool>,
    /// 输出到标准错误
    pub stderr: Option<bool>,
    pub prefix: Option<String>,
    pub timestamp: Option<bool>,
    /// 该级别独占的日志文件
    pub file: Option<String>,
}

impl Logger {
    /// 从配置创建 Logger
    ///
    /// 应用顺序：全局开关、共享文件、阈值、级别配置，后者覆盖前者
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        let logger = Logger::with_pool_size(config.pool_buffer);
        logger.set_mode(config.mode);
        if !config.color {
            logger.disable_color();
        }
        if config.json {
            logger.enable_json();
        }
        if !config.timestamp {
            logger.disable_timestamp();
        }

        if let Some(file) = &config.file {
            logger.add_writer(FileAppender::open(file)?);
        }

        if let Some(level) = &config.level {
            logger.set_level_by_name(level)?;
        }

        for options in &config.levels {
            logger.apply_level_options(options)?;
        }
        Ok(logger)
    }

    fn apply_level_options(&self, options: &LevelOptions) -> Result<()> {
        if options.tag.is_empty() {
            return Err(LogError::Config("level tag is empty".to_string()));
        }

        let id = match self.atol(&options.tag) {
            LevelId::UNKNOWN if options.stderr == Some(true) => {
                self.add_err_level(&options.tag, Mode::Std, false)
            }
            LevelId::UNKNOWN => self.add_level(&options.tag, Mode::Std, false),
            id => id,
        };

        let writer = options.file.as_ref().map(FileAppender::open).transpose()?;
        self.registry().update(id, |level| {
            if let Some(mode) = options.mode {
                level.set_mode(mode);
            }
            if let Some(color) = options.color {
                level.set_color(color);
            }
            if let Some(stderr) = options.stderr {
                level.set_std(if stderr { StdStream::Stderr } else { StdStream::Stdout });
            }
            if let Some(prefix) = &options.prefix {
                level.set_prefix(prefix.as_str());
            }
            if let Some(timestamp) = options.timestamp {
                level.set_timestamp(timestamp);
            }
        });
        if let Some(writer) = writer {
            self.add_level_writer(id, writer);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() -> Result<()> {
        let config = LoggerConfig::default();
        assert_eq!(config.mode, Mode::Std);
        assert!(config.color);
        assert!(!config.json);
        assert!(config.timestamp);
        assert_eq!(config.pool_buffer, DEFAULT_POOL_SIZE);
        assert!(config.levels.is_empty());

        let logger = Logger::from_config(config)?;
        assert_eq!(logger.get_current_mode(LevelId::INFO), Mode::Std);
        assert!(logger.load(LevelId::INFO).unwrap().color());
        Ok(())
    }

    #[test]
    fn test_parse_json5_config() -> Result<()> {
        let config: LoggerConfig = json5::from_str(
            r#"
            {
                mode: "both",
                color: false,
                json: true,
                level: "warn",
                pool_buffer: 16,
                levels: [
                    { tag: "INFO", mode: "writer", prefix: "svc" },
                    { tag: "AUDIT", stderr: true, timestamp: false },
                ]
            }
            "#,
        )?;

        assert_eq!(config.mode, Mode::Both);
        assert!(!config.color);
        assert!(config.json);
        assert!(config.timestamp);
        assert_eq!(config.level.as_deref(), Some("warn"));
        assert_eq!(config.pool_buffer, 16);
        assert_eq!(config.levels.len(), 2);
        assert_eq!(config.levels[0].mode, Some(Mode::Writer));
        assert_eq!(config.levels[1].stderr, Some(true));
        assert_eq!(config.levels[1].mode, None);
        Ok(())
    }

    #[test]
    fn test_from_config() -> Result<()> {
        let config: LoggerConfig = json5::from_str(
            r#"
            {
                color: false,
                json: true,
                timestamp: false,
                level: "W",
                pool_buffer: 8,
                levels: [
                    { tag: "INFO", mode: "writer", prefix: "svc" },
                    { tag: "AUDIT", stderr: true, timestamp: false },
                ]
            }
            "#,
        )?;
        let logger = Logger::from_config(config)?;

        assert!(logger.is_json());
        assert!(!logger.is_timestamp());
        assert_eq!(logger.pool().capacity(), 8);
        assert!(!logger.load(LevelId::WARN).unwrap().color());
        assert_eq!(logger.get_current_mode(LevelId::DEBG), Mode::None);

        // 级别配置覆盖阈值
        let info = logger.load(LevelId::INFO).unwrap();
        assert_eq!(info.mode(), Mode::Writer);
        assert_eq!(info.prefix(), Some("svc"));

        let audit = logger.load(logger.tag_to_level("AUDIT")).unwrap();
        assert_eq!(audit.std(), StdStream::Stderr);
        assert_eq!(audit.mode(), Mode::Std);
        assert!(!audit.timestamp());
        Ok(())
    }

    #[test]
    fn test_from_config_files() -> Result<()> {
        let dir = tempdir()?;
        let shared = dir.path().join("all.log");
        let errors = dir.path().join("nested/error.log");

        let config = LoggerConfig {
            mode: Mode::Writer,
            timestamp: false,
            file: Some(shared.to_string_lossy().into_owned()),
            levels: vec![LevelOptions {
                tag: "error".to_string(),
                file: Some(errors.to_string_lossy().into_owned()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let logger = Logger::from_config(config)?;

        logger.info(&["to shared".into()])?;
        logger.error(&["to both".into()])?;

        let shared_contents = std::fs::read_to_string(&shared)?;
        assert_eq!(shared_contents, "[INFO]:\tto shared\n[ERROR]:\tto both\n");
        assert_eq!(std::fs::read_to_string(&errors)?, "[ERROR]:\tto both\n");
        Ok(())
    }

    #[test]
    fn test_invalid_config() {
        let config = LoggerConfig {
            level: Some("loud".to_string()),
            ..Default::default()
        };
        assert!(matches!(Logger::from_config(config), Err(LogError::Config(_))));

        let config = LoggerConfig {
            levels: vec![LevelOptions::default()],
            ..Default::default()
        };
        assert!(matches!(Logger::from_config(config), Err(LogError::Config(_))));

        let result: std::result::Result<LoggerConfig, _> = json5::from_str(r#"{ mode: "stdout" }"#);
        assert!(result.is_err());
    }
}
