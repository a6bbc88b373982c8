use crate::appender::{LogAppender, StdStream};
use crate::color::ColorFn;
use crate::error::{LogError, Result};
use crate::formatter::{
    write_message, BufferPool, ByteWriter, Detail, JsonFormatter, LogFormatter, LogRecord,
    TextFormatter, DEFAULT_POOL_SIZE,
};
use crate::level::{builtin_alias, LevelId};
use crate::level_config::LevelConfig;
use crate::log_value::LogValue;
use crate::mode::Mode;
use crate::registry::LevelRegistry;
use arc_swap::ArcSwap;
use chrono::Local;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// fatal 级别输出后使用的退出码
const FATAL_EXIT_CODE: i32 = 1;

/// 退出钩子
struct ExitFn(Box<dyn Fn(i32) + Send + Sync>);

/// 核心日志器
///
/// 按级别查找配置，根据缓存的写入路径渲染并输出日志。所有方法都可以在多个线程中并发调用，
/// 配置修改与日志输出之间不需要额外加锁。
pub struct Logger {
    registry: LevelRegistry,
    json: AtomicBool,
    timestamp: AtomicBool,
    pool: ArcSwap<BufferPool>,
    exit_fn: ArcSwap<ExitFn>,
}

/// 为一组级别生成普通、格式化和惰性求值三种输出方法
macro_rules! level_methods {
    ($($level:expr, $name:literal => $plain:ident, $formatted:ident, $lazy:ident;)*) => {
        $(
            #[doc = concat!("记录 ", $name, " 级别日志，多个参数以空格拼接")]
            pub fn $plain(&self, args: &[LogValue]) -> Result<()> {
                self.out($level, None, args)
            }

            #[doc = concat!("按格式串记录 ", $name, " 级别日志")]
            pub fn $formatted(&self, format: &str, args: &[LogValue]) -> Result<()> {
                self.out($level, Some(format), args)
            }

            #[doc = concat!("记录 ", $name, " 级别日志，级别关闭时不会调用 `f`")]
            pub fn $lazy(&self, f: impl FnOnce() -> String) -> Result<()> {
                self.out_func($level, f)
            }
        )*
    };
}

impl Logger {
    /// 创建只包含内置级别的 Logger
    pub fn new() -> Self {
        Self::with_pool_size(DEFAULT_POOL_SIZE)
    }

    /// 指定缓冲池大小创建 Logger
    pub fn with_pool_size(size: usize) -> Self {
        Self {
            registry: LevelRegistry::new(),
            json: AtomicBool::new(false),
            timestamp: AtomicBool::new(true),
            pool: ArcSwap::from_pointee(BufferPool::new(size)),
            exit_fn: ArcSwap::from_pointee(ExitFn(Box::new(|code| std::process::exit(code)))),
        }
    }

    /// 级别注册表
    pub fn registry(&self) -> &LevelRegistry {
        &self.registry
    }

    /// 查找级别配置快照
    pub fn load(&self, id: LevelId) -> Option<Arc<LevelConfig>> {
        self.registry.load(id)
    }

    // ========== 输出 ==========

    level_methods! {
        LevelId::PRINT, "PRINT" => print, printf, print_func;
        LevelId::LOG, "LOG" => log, logf, log_func;
        LevelId::INFO, "INFO" => info, infof, info_func;
        LevelId::OK, "OK" => success, successf, success_func;
        LevelId::DEBG, "DEBUG" => debug, debugf, debug_func;
        LevelId::TRACE, "TRACE" => trace, tracef, trace_func;
        LevelId::WARN, "WARN" => warn, warnf, warn_func;
        LevelId::ERR, "ERROR" => error, errorf, error_func;
        LevelId::FAIL, "FAIL" => fail, failf, fail_func;
    }

    /// 与 `print` 相同，每条日志总是以换行结束
    pub fn println(&self, args: &[LogValue]) -> Result<()> {
        self.print(args)
    }

    /// 记录 FATAL 级别日志，写入完成后调用退出钩子
    pub fn fatal(&self, args: &[LogValue]) -> Result<()> {
        let result = self.out(LevelId::FATAL, None, args);
        self.exit(FATAL_EXIT_CODE);
        result
    }

    pub fn fatalln(&self, args: &[LogValue]) -> Result<()> {
        self.fatal(args)
    }

    /// 按格式串记录 FATAL 级别日志，写入完成后调用退出钩子
    pub fn fatalf(&self, format: &str, args: &[LogValue]) -> Result<()> {
        let result = self.out(LevelId::FATAL, Some(format), args);
        self.exit(FATAL_EXIT_CODE);
        result
    }

    pub fn fatal_func(&self, f: impl FnOnce() -> String) -> Result<()> {
        let result = self.out_func(LevelId::FATAL, f);
        self.exit(FATAL_EXIT_CODE);
        result
    }

    /// 记录自定义级别日志，标签未注册时自动以 Std 模式、无颜色注册
    pub fn custom_log(&self, tag: &str, args: &[LogValue]) -> Result<()> {
        self.out(self.resolve_tag(tag), None, args)
    }

    pub fn custom_logf(&self, tag: &str, format: &str, args: &[LogValue]) -> Result<()> {
        self.out(self.resolve_tag(tag), Some(format), args)
    }

    pub fn custom_log_func(&self, tag: &str, f: impl FnOnce() -> String) -> Result<()> {
        self.out_func(self.resolve_tag(tag), f)
    }

    /// 按级别标识输出，未注册的级别静默丢弃
    pub fn out(&self, id: LevelId, format: Option<&str>, args: &[LogValue]) -> Result<()> {
        let Some(config) = self.registry.load(id) else {
            return Ok(());
        };
        if config.write_mode().is_noop() {
            return Ok(());
        }

        let pool = self.pool.load();
        match (format, args) {
            (None, [value]) => self.emit(&config, &pool, Detail::Value(value)),
            _ => {
                let mut message = pool.get();
                write_message(&mut ByteWriter(&mut message), format, args)?;
                let text = std::str::from_utf8(&message)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                self.emit(&config, &pool, Detail::Text(text))
            }
        }
    }

    /// 惰性输出，写入路径为 Noop 时不调用 `f`
    pub fn out_func(&self, id: LevelId, f: impl FnOnce() -> String) -> Result<()> {
        let Some(config) = self.registry.load(id) else {
            return Ok(());
        };
        if config.write_mode().is_noop() {
            return Ok(());
        }

        let message = f();
        let pool = self.pool.load();
        self.emit(&config, &pool, Detail::Text(&message))
    }

    fn emit(&self, config: &LevelConfig, pool: &BufferPool, detail: Detail<'_>) -> Result<()> {
        let json = self.json.load(Ordering::Relaxed);
        let record = LogRecord {
            tag: config.tag(),
            prefix: config.prefix(),
            timestamp: (self.timestamp.load(Ordering::Relaxed) && config.timestamp())
                .then(Local::now),
            detail,
        };
        let formatter: &dyn LogFormatter = if json { &JsonFormatter } else { &TextFormatter };

        let mode = config.write_mode();
        // JSON 输出不着色
        let color = (mode.colored() && !json).then(|| config.color_fn());

        let mut plain = pool.get();
        if mode.writes_writer() || color.is_none() {
            formatter.format(&record, None, &mut plain)?;
        }

        if mode.writes_std() {
            match color {
                Some(color) => {
                    let mut colored = pool.get();
                    formatter.format(&record, Some(color), &mut colored)?;
                    config.std().append(&colored)?;
                }
                None => config.std().append(&plain)?,
            }
        }

        if mode.writes_writer() {
            if let Some(writer) = config.writer() {
                writer.append(&plain)?;
            }
        }
        Ok(())
    }

    fn exit(&self, code: i32) {
        let exit_fn = self.exit_fn.load();
        (exit_fn.0)(code);
    }

    /// 未注册的标签只插入默认配置，已有配置（包括并发注册的）保持不变
    fn resolve_tag(&self, tag: &str) -> LevelId {
        match self.registry.tag_to_level(tag) {
            LevelId::UNKNOWN => {
                let id = self.registry.mint(tag);
                self.registry
                    .store_if_absent(id, LevelConfig::new(tag, Mode::Std, false, StdStream::Stdout));
                id
            }
            id => id,
        }
    }

    // ========== 级别管理 ==========

    /// 注册输出到标准输出的级别；标签已存在时原地更新 mode 和颜色
    pub fn add_level(&self, tag: &str, mode: Mode, color: bool) -> LevelId {
        self.add_level_with_stream(tag, mode, color, StdStream::Stdout)
    }

    /// 注册输出到标准错误的级别；标签已存在时原地更新 mode 和颜色
    pub fn add_err_level(&self, tag: &str, mode: Mode, color: bool) -> LevelId {
        self.add_level_with_stream(tag, mode, color, StdStream::Stderr)
    }

    fn add_level_with_stream(&self, tag: &str, mode: Mode, color: bool, std: StdStream) -> LevelId {
        let id = self.registry.mint(tag);
        let inserted = self
            .registry
            .store_if_absent(id, LevelConfig::new(tag, mode, color, std));
        if !inserted {
            self.registry.update(id, |config| {
                config.set_mode(mode);
                config.set_color(color);
                config.set_std(std);
            });
        }
        id
    }

    /// 按标签查找级别，未注册返回 `LevelId::UNKNOWN`
    pub fn tag_to_level(&self, tag: &str) -> LevelId {
        self.registry.tag_to_level(tag)
    }

    /// 解析级别名称，支持内置级别的常见缩写（大小写不敏感），其余按标签查找
    pub fn atol(&self, s: &str) -> LevelId {
        builtin_alias(s).unwrap_or_else(|| self.registry.tag_to_level(s))
    }

    /// 删除自定义级别并恢复内置级别的默认配置
    pub fn reset(&self) -> &Self {
        self.registry.reset();
        self
    }

    fn update_all(&self, f: impl Fn(&mut LevelConfig)) {
        for id in self.registry.ids() {
            self.registry.update(id, &f);
        }
    }

    /// 设置所有级别的 mode
    pub fn set_mode(&self, mode: Mode) -> &Self {
        self.update_all(|config| config.set_mode(mode));
        self
    }

    pub fn set_level_mode(&self, id: LevelId, mode: Mode) -> &Self {
        self.registry.update(id, |config| config.set_mode(mode));
        self
    }

    /// 当前 mode，未注册的级别返回 `Mode::None`
    pub fn get_current_mode(&self, id: LevelId) -> Mode {
        self.registry
            .load(id)
            .map_or(Mode::None, |config| config.mode())
    }

    /// 设置输出阈值
    ///
    /// 低于阈值的内置级别关闭；不低于阈值且处于关闭状态的内置级别恢复为 Std。自定义级别不受影响。
    pub fn set_level(&self, threshold: LevelId) -> &Self {
        for id in LevelId::BUILTIN {
            self.registry.update(id, |config| {
                if id < threshold {
                    config.set_mode(Mode::None);
                } else if config.mode() == Mode::None {
                    config.set_mode(Mode::Std);
                }
            });
        }
        self
    }

    /// 清除所有输出器，所有级别恢复为 Std
    pub fn init_writer(&self) -> &Self {
        self.update_all(|config| {
            config.clear_writer();
            config.set_mode(Mode::Std);
        });
        self
    }

    /// 替换所有级别的输出器
    pub fn set_writer(&self, appender: impl LogAppender + 'static) -> &Self {
        let appender: Arc<dyn LogAppender> = Arc::new(appender);
        self.update_all(|config| config.set_writer(Arc::clone(&appender)));
        self
    }

    /// 为所有级别追加输出器
    pub fn add_writer(&self, appender: impl LogAppender + 'static) -> &Self {
        let appender: Arc<dyn LogAppender> = Arc::new(appender);
        self.update_all(|config| config.add_writer(Arc::clone(&appender)));
        self
    }

    pub fn clear_writer(&self) -> &Self {
        self.update_all(LevelConfig::clear_writer);
        self
    }

    /// 替换单个级别的输出器
    pub fn set_level_writer(&self, id: LevelId, appender: impl LogAppender + 'static) -> &Self {
        let appender: Arc<dyn LogAppender> = Arc::new(appender);
        self.registry.update(id, |config| config.set_writer(appender));
        self
    }

    /// 为单个级别追加输出器，已有输出器继续生效
    pub fn add_level_writer(&self, id: LevelId, appender: impl LogAppender + 'static) -> &Self {
        let appender: Arc<dyn LogAppender> = Arc::new(appender);
        self.registry.update(id, |config| config.add_writer(appender));
        self
    }

    pub fn clear_level_writer(&self, id: LevelId) -> &Self {
        self.registry.update(id, LevelConfig::clear_writer);
        self
    }

    pub fn set_level_color(&self, id: LevelId, color_fn: ColorFn) -> &Self {
        self.registry.update(id, |config| config.set_color_fn(color_fn));
        self
    }

    pub fn enable_color(&self) -> &Self {
        self.update_all(|config| config.set_color(true));
        self
    }

    pub fn disable_color(&self) -> &Self {
        self.update_all(|config| config.set_color(false));
        self
    }

    pub fn enable_level_color(&self, id: LevelId) -> &Self {
        self.registry.update(id, |config| config.set_color(true));
        self
    }

    pub fn disable_level_color(&self, id: LevelId) -> &Self {
        self.registry.update(id, |config| config.set_color(false));
        self
    }

    /// 设置级别前缀，空字符串清除前缀
    pub fn set_prefix(&self, id: LevelId, prefix: &str) -> &Self {
        self.registry.update(id, |config| config.set_prefix(prefix));
        self
    }

    /// 修改级别的显示标签
    ///
    /// 原标签仍可查找；新标签未被其他级别占用时也指向该级别
    pub fn set_level_tag(&self, id: LevelId, tag: &str) -> &Self {
        self.registry.retag(id, tag);
        self
    }

    pub fn enable_json(&self) -> &Self {
        self.json.store(true, Ordering::Relaxed);
        self
    }

    pub fn disable_json(&self) -> &Self {
        self.json.store(false, Ordering::Relaxed);
        self
    }

    pub fn is_json(&self) -> bool {
        self.json.load(Ordering::Relaxed)
    }

    /// 全局开启时间戳，是否输出还取决于级别自身的开关
    pub fn enable_timestamp(&self) -> &Self {
        self.timestamp.store(true, Ordering::Relaxed);
        self
    }

    pub fn disable_timestamp(&self) -> &Self {
        self.timestamp.store(false, Ordering::Relaxed);
        self
    }

    pub fn is_timestamp(&self) -> bool {
        self.timestamp.load(Ordering::Relaxed)
    }

    pub fn enable_level_timestamp(&self, id: LevelId) -> &Self {
        self.registry.update(id, |config| config.set_timestamp(true));
        self
    }

    pub fn disable_level_timestamp(&self, id: LevelId) -> &Self {
        self.registry.update(id, |config| config.set_timestamp(false));
        self
    }

    /// 替换缓冲池，最多缓存 `size` 个缓冲区
    pub fn enable_pool_buffer(&self, size: usize) -> &Self {
        self.pool.store(Arc::new(BufferPool::new(size)));
        self
    }

    /// 当前缓冲池
    pub fn pool(&self) -> Arc<BufferPool> {
        self.pool.load_full()
    }

    /// 替换 fatal 级别使用的退出钩子
    pub fn replace_exit_fn(&self, f: impl Fn(i32) + Send + Sync + 'static) -> &Self {
        self.exit_fn.store(Arc::new(ExitFn(Box::new(f))));
        self
    }

    /// 按名称设置阈值，名称必须是内置级别
    pub fn set_level_by_name(&self, name: &str) -> Result<&Self> {
        let threshold = builtin_alias(name)
            .ok_or_else(|| LogError::Config(format!("invalid level: {}", name)))?;
        Ok(self.set_level(threshold))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
