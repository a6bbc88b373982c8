//! 日志宏
//!
//! 参数可以是任意实现了 `Into<LogValue>` 的值，省去手写切片
//!
//! # 示例
//!
//! ```ignore
//! use levelog::{info, infof, Logger};
//!
//! let logger = Logger::new();
//! info!(logger, "user logged in", 12345)?;
//! infof!(logger, "user {} logged in from {}", "alice", "10.0.0.1")?;
//! ```

/// 记录 PRINT 级别日志
#[macro_export]
macro_rules! print {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.print(&[$($crate::LogValue::from($arg)),*])
    };
}

/// 按格式串记录 PRINT 级别日志
#[macro_export]
macro_rules! printf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.printf($format, &[$($crate::LogValue::from($arg)),*])
    };
}

/// 记录 LOG 级别日志
#[macro_export]
macro_rules! log {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! logf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.logf($format, &[$($crate::LogValue::from($arg)),*])
    };
}

/// 记录 INFO 级别日志
///
/// # 示例
///
/// ```ignore
/// info!(logger, "server started");
/// info!(logger, "listening on", 8080);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&[$($crate::LogValue::from($arg)),*])
    };
}

/// 按格式串记录 INFO 级别日志
///
/// # 示例
///
/// ```ignore
/// infof!(logger, "listening on {}:{}", "0.0.0.0", 8080);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.infof($format, &[$($crate::LogValue::from($arg)),*])
    };
}

/// 记录 OK 级别日志
#[macro_export]
macro_rules! success {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.success(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! successf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.successf($format, &[$($crate::LogValue::from($arg)),*])
    };
}

/// 记录 DEBUG 级别日志
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.debugf($format, &[$($crate::LogValue::from($arg)),*])
    };
}

/// 记录 TRACE 级别日志
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.trace(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! tracef {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.tracef($format, &[$($crate::LogValue::from($arg)),*])
    };
}

/// 记录 WARN 级别日志
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.warnf($format, &[$($crate::LogValue::from($arg)),*])
    };
}

/// 记录 ERROR 级别日志
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.errorf($format, &[$($crate::LogValue::from($arg)),*])
    };
}

/// 记录 FAIL 级别日志
#[macro_export]
macro_rules! fail {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.fail(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! failf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.failf($format, &[$($crate::LogValue::from($arg)),*])
    };
}

/// 记录 FATAL 级别日志，写入后调用退出钩子
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatalf($format, &[$($crate::LogValue::from($arg)),*])
    };
}

/// 记录自定义级别日志
///
/// # 示例
///
/// ```ignore
/// custom_log!(logger, "AUDIT", "user", "alice", "deleted", 42);
/// ```
#[macro_export]
macro_rules! custom_log {
    ($logger:expr, $tag:expr $(, $arg:expr)* $(,)?) => {
        $logger.custom_log($tag, &[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! custom_logf {
    ($logger:expr, $tag:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.custom_logf($tag, $format, &[$($crate::LogValue::from($arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::appender::MemoryAppender;
    use crate::error::Result;
    use crate::{Logger, Mode};

    fn writer_logger() -> (Logger, MemoryAppender) {
        let buf = MemoryAppender::new();
        let logger = Logger::new();
        logger
            .set_mode(Mode::Writer)
            .disable_timestamp()
            .set_writer(buf.clone());
        (logger, buf)
    }

    #[test]
    fn test_level_macros() -> Result<()> {
        let (logger, buf) = writer_logger();
        crate::info!(logger, "Hello", "Glg")?;
        crate::warn!(logger, 1, 2.5, true)?;
        crate::debug!(logger)?;
        crate::error!(&logger, "trailing",)?;

        assert_eq!(
            buf.contents(),
            "[INFO]:\tHello Glg\n[WARN]:\t1 2.5 true\n[DEBUG]:\t\n[ERROR]:\ttrailing\n"
        );
        Ok(())
    }

    #[test]
    fn test_format_macros() -> Result<()> {
        let (logger, buf) = writer_logger();
        crate::infof!(logger, "{}{}{}", 2, "aaa", 3.6)?;
        crate::logf!(logger, "{:?}", "quoted")?;
        crate::successf!(logger, "{{literal}}")?;

        assert_eq!(
            buf.contents(),
            "[INFO]:\t2aaa3.6\n[LOG]:\t\"quoted\"\n[OK]:\t{literal}\n"
        );
        Ok(())
    }

    #[test]
    fn test_custom_macros() -> Result<()> {
        let (logger, buf) = writer_logger();
        let audit = logger.add_level("AUDIT", Mode::Writer, false);
        logger.set_level_writer(audit, buf.clone());

        let user = String::from("alice");
        crate::custom_log!(logger, "AUDIT", &user, 42)?;
        crate::custom_logf!(logger, "AUDIT", "{} removed {}", user, 7u64)?;

        assert_eq!(
            buf.contents(),
            "[AUDIT]:\talice 42\n[AUDIT]:\talice removed 7\n"
        );
        Ok(())
    }
}
