use crate::appender::LogAppender;
use crate::color::ColorFn;
use crate::error::Result;
use crate::level::LevelId;
use crate::log_value::LogValue;
use crate::logger::Logger;
use crate::mode::Mode;
use std::sync::Arc;

/// 全局 Logger 单例
///
/// 首次使用时创建，只包含内置级别，所有级别输出到标准流
static GLOBAL_LOGGER: once_cell::sync::Lazy<Arc<Logger>> =
    once_cell::sync::Lazy::new(|| Arc::new(Logger::new()));

/// 获取全局 Logger
pub fn get() -> Arc<Logger> {
    Arc::clone(&GLOBAL_LOGGER)
}

macro_rules! global_level_fns {
    ($($name:literal => $plain:ident, $formatted:ident, $lazy:ident;)*) => {
        $(
            #[doc = concat!("使用全局 Logger 记录 ", $name, " 级别日志")]
            pub fn $plain(args: &[LogValue]) -> Result<()> {
                GLOBAL_LOGGER.$plain(args)
            }

            #[doc = concat!("使用全局 Logger 按格式串记录 ", $name, " 级别日志")]
            pub fn $formatted(format: &str, args: &[LogValue]) -> Result<()> {
                GLOBAL_LOGGER.$formatted(format, args)
            }

            pub fn $lazy(f: impl FnOnce() -> String) -> Result<()> {
                GLOBAL_LOGGER.$lazy(f)
            }
        )*
    };
}

// ========== 全局 Logger 的便捷 log 方法 ==========

global_level_fns! {
    "PRINT" => print, printf, print_func;
    "LOG" => log, logf, log_func;
    "INFO" => info, infof, info_func;
    "OK" => success, successf, success_func;
    "DEBUG" => debug, debugf, debug_func;
    "TRACE" => trace, tracef, trace_func;
    "WARN" => warn, warnf, warn_func;
    "ERROR" => error, errorf, error_func;
    "FAIL" => fail, failf, fail_func;
    "FATAL" => fatal, fatalf, fatal_func;
}

pub fn println(args: &[LogValue]) -> Result<()> {
    GLOBAL_LOGGER.println(args)
}

pub fn fatalln(args: &[LogValue]) -> Result<()> {
    GLOBAL_LOGGER.fatalln(args)
}

/// 使用全局 Logger 记录自定义级别日志
pub fn custom_log(tag: &str, args: &[LogValue]) -> Result<()> {
    GLOBAL_LOGGER.custom_log(tag, args)
}

pub fn custom_logf(tag: &str, format: &str, args: &[LogValue]) -> Result<()> {
    GLOBAL_LOGGER.custom_logf(tag, format, args)
}

pub fn custom_log_func(tag: &str, f: impl FnOnce() -> String) -> Result<()> {
    GLOBAL_LOGGER.custom_log_func(tag, f)
}

// ========== 全局 Logger 配置 ==========

pub fn add_level(tag: &str, mode: Mode, color: bool) -> LevelId {
    GLOBAL_LOGGER.add_level(tag, mode, color)
}

pub fn add_err_level(tag: &str, mode: Mode, color: bool) -> LevelId {
    GLOBAL_LOGGER.add_err_level(tag, mode, color)
}

pub fn tag_to_level(tag: &str) -> LevelId {
    GLOBAL_LOGGER.tag_to_level(tag)
}

pub fn atol(s: &str) -> LevelId {
    GLOBAL_LOGGER.atol(s)
}

pub fn set_level(threshold: LevelId) {
    GLOBAL_LOGGER.set_level(threshold);
}

pub fn set_mode(mode: Mode) {
    GLOBAL_LOGGER.set_mode(mode);
}

pub fn set_level_mode(id: LevelId, mode: Mode) {
    GLOBAL_LOGGER.set_level_mode(id, mode);
}

pub fn get_current_mode(id: LevelId) -> Mode {
    GLOBAL_LOGGER.get_current_mode(id)
}

pub fn init_writer() {
    GLOBAL_LOGGER.init_writer();
}

pub fn set_writer(appender: impl LogAppender + 'static) {
    GLOBAL_LOGGER.set_writer(appender);
}

pub fn add_writer(appender: impl LogAppender + 'static) {
    GLOBAL_LOGGER.add_writer(appender);
}

pub fn set_level_writer(id: LevelId, appender: impl LogAppender + 'static) {
    GLOBAL_LOGGER.set_level_writer(id, appender);
}

pub fn add_level_writer(id: LevelId, appender: impl LogAppender + 'static) {
    GLOBAL_LOGGER.add_level_writer(id, appender);
}

pub fn set_level_color(id: LevelId, color_fn: ColorFn) {
    GLOBAL_LOGGER.set_level_color(id, color_fn);
}

pub fn enable_color() {
    GLOBAL_LOGGER.enable_color();
}

pub fn disable_color() {
    GLOBAL_LOGGER.disable_color();
}

pub fn enable_json() {
    GLOBAL_LOGGER.enable_json();
}

pub fn disable_json() {
    GLOBAL_LOGGER.disable_json();
}

pub fn enable_timestamp() {
    GLOBAL_LOGGER.enable_timestamp();
}

pub fn disable_timestamp() {
    GLOBAL_LOGGER.disable_timestamp();
}

pub fn set_prefix(id: LevelId, prefix: &str) {
    GLOBAL_LOGGER.set_prefix(id, prefix);
}

pub fn replace_exit_fn(f: impl Fn(i32) + Send + Sync + 'static) {
    GLOBAL_LOGGER.replace_exit_fn(f);
}

/// 重置全局 Logger
pub fn reset() {
    GLOBAL_LOGGER.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appender::MemoryAppender;
    use serial_test::serial;

    #[test]
    #[serial(global_logger)]
    fn test_get_returns_same_instance() {
        assert!(Arc::ptr_eq(&get(), &get()));
    }

    #[test]
    #[serial(global_logger)]
    fn test_global_functions() -> Result<()> {
        reset();
        let buf = MemoryAppender::new();
        set_mode(Mode::Writer);
        set_writer(buf.clone());

        info(&["global info".into()])?;
        warnf("{} {}", &["global".into(), "warn".into()])?;
        debug_func(|| "global debug".to_string())?;

        let contents = buf.contents();
        assert!(contents.contains("[INFO]:\tglobal info"));
        assert!(contents.contains("[WARN]:\tglobal warn"));
        assert!(contents.contains("[DEBUG]:\tglobal debug"));

        init_writer();
        reset();
        Ok(())
    }

    #[test]
    #[serial(global_logger)]
    fn test_global_custom_level() -> Result<()> {
        reset();
        let buf = MemoryAppender::new();
        let id = add_level("GLOBAL", Mode::Writer, false);
        set_level_writer(id, buf.clone());
        assert_eq!(tag_to_level("GLOBAL"), id);
        assert_eq!(atol("GLOBAL"), id);

        custom_log("GLOBAL", &["custom".into()])?;
        assert!(buf.contents().contains("[GLOBAL]:\tcustom"));

        reset();
        assert_eq!(tag_to_level("GLOBAL"), LevelId::UNKNOWN);
        Ok(())
    }

    #[test]
    #[serial(global_logger)]
    fn test_global_fatal_uses_hook() {
        reset();
        let buf = MemoryAppender::new();
        set_level_mode(LevelId::FATAL, Mode::Writer);
        set_level_writer(LevelId::FATAL, buf.clone());

        let hook_buf = buf.clone();
        replace_exit_fn(move |code| {
            assert_eq!(code, 1);
            assert!(hook_buf.contents().contains("bye"));
        });
        let _ = fatal(&["bye".into()]);
        replace_exit_fn(|code| std::process::exit(code));
        reset();
    }
}
