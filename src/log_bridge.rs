use crate::level::LevelId;
use crate::logger::Logger;
use std::sync::Arc;

/// 将 `log` 门面的日志转发到 Logger
///
/// 级别映射：Error→ERR，Warn→WARN，Info→INFO，Debug→DEBG，Trace→TRACE
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    fn level_id(level: ::log::Level) -> LevelId {
        match level {
            ::log::Level::Error => LevelId::ERR,
            ::log::Level::Warn => LevelId::WARN,
            ::log::Level::Info => LevelId::INFO,
            ::log::Level::Debug => LevelId::DEBG,
            ::log::Level::Trace => LevelId::TRACE,
        }
    }
}

impl ::log::Log for LogBridge {
    fn enabled(&self, metadata: &::log::Metadata) -> bool {
        self.logger
            .load(Self::level_id(metadata.level()))
            .is_some_and(|config| !config.write_mode().is_noop())
    }

    fn log(&self, record: &::log::Record) {
        // log::Log 无法返回错误，写入失败时丢弃
        let _ = self
            .logger
            .out_func(Self::level_id(record.level()), || record.args().to_string());
    }

    fn flush(&self) {}
}

/// 安装 LogBridge 为 `log` 门面的全局实现，只能成功调用一次
pub fn init_log_bridge(
    logger: Arc<Logger>,
    max_level: ::log::LevelFilter,
) -> Result<(), ::log::SetLoggerError> {
    ::log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    ::log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appender::MemoryAppender;
    use crate::mode::Mode;
    use ::log::{Level, Log, Metadata, Record};

    fn bridge() -> (LogBridge, MemoryAppender) {
        let buf = MemoryAppender::new();
        let logger = Logger::new();
        logger
            .set_mode(Mode::Writer)
            .disable_timestamp()
            .set_writer(buf.clone());
        (LogBridge::new(Arc::new(logger)), buf)
    }

    #[test]
    fn test_level_mapping() {
        let (bridge, buf) = bridge();
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
            bridge.log(
                &Record::builder()
                    .args(format_args!("from {}", level))
                    .level(level)
                    .target("app")
                    .build(),
            );
        }

        assert_eq!(
            buf.contents(),
            "[ERROR]:\tfrom ERROR\n[WARN]:\tfrom WARN\n[INFO]:\tfrom INFO\n\
             [DEBUG]:\tfrom DEBUG\n[TRACE]:\tfrom TRACE\n"
        );
    }

    #[test]
    fn test_enabled_follows_mode() {
        let (bridge, buf) = bridge();
        bridge.logger.set_level_mode(LevelId::DEBG, Mode::None);

        let debug = Metadata::builder().level(Level::Debug).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(!bridge.enabled(&debug));
        assert!(bridge.enabled(&info));

        bridge.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .build(),
        );
        assert!(buf.is_empty());
    }
}
