use crate::appender::{LogAppender, MultiAppender, StdStream};
use crate::color::{self, ColorFn};
use crate::level::LevelId;
use crate::mode::{Mode, WriteMode};
use std::fmt;
use std::sync::Arc;

/// 单个级别的配置
///
/// 存入注册表后不可变，修改时整体复制并替换。所有修改方法都会重新计算写入路径缓存。
#[derive(Clone)]
pub struct LevelConfig {
    tag: String,
    prefix: Option<String>,
    mode: Mode,
    color: bool,
    color_fn: ColorFn,
    timestamp: bool,
    std: StdStream,
    writer: Option<MultiAppender>,
    write_mode: WriteMode,
}

impl LevelConfig {
    /// 创建配置，写入路径立即计算
    pub fn new(tag: impl Into<String>, mode: Mode, color: bool, std: StdStream) -> Self {
        let mut config = Self {
            tag: tag.into(),
            prefix: None,
            mode,
            color,
            color_fn: color::colorless,
            timestamp: true,
            std,
            writer: None,
            write_mode: WriteMode::Noop,
        };
        config.refresh();
        config
    }

    /// 内置级别的默认配置，自定义级别返回 None
    pub fn builtin(id: LevelId) -> Option<Self> {
        let (color_fn, std): (ColorFn, StdStream) = match id {
            LevelId::DEBG => (color::purple, StdStream::Stdout),
            LevelId::TRACE => (color::yellow, StdStream::Stdout),
            LevelId::PRINT => (color::colorless, StdStream::Stdout),
            LevelId::LOG => (color::colorless, StdStream::Stdout),
            LevelId::INFO => (color::green, StdStream::Stdout),
            LevelId::OK => (color::cyan, StdStream::Stdout),
            LevelId::WARN => (color::orange, StdStream::Stdout),
            LevelId::ERR => (color::red, StdStream::Stderr),
            LevelId::FAIL => (color::red, StdStream::Stderr),
            LevelId::FATAL => (color::red, StdStream::Stderr),
            _ => return None,
        };
        let mut config = Self::new(id.builtin_tag(), Mode::Std, true, std);
        config.color_fn = color_fn;
        Some(config)
    }

    fn refresh(&mut self) {
        self.write_mode = WriteMode::resolve(self.mode, self.color, self.writer.is_some());
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn color_fn(&self) -> ColorFn {
        self.color_fn
    }

    pub fn timestamp(&self) -> bool {
        self.timestamp
    }

    pub fn std(&self) -> StdStream {
        self.std
    }

    pub fn writer(&self) -> Option<&MultiAppender> {
        self.writer.as_ref()
    }

    /// 缓存的写入路径
    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// 空字符串视为清除前缀
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.refresh();
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
        self.refresh();
    }

    pub fn set_color_fn(&mut self, color_fn: ColorFn) {
        self.color_fn = color_fn;
    }

    pub fn set_timestamp(&mut self, timestamp: bool) {
        self.timestamp = timestamp;
    }

    pub fn set_std(&mut self, std: StdStream) {
        self.std = std;
    }

    /// 替换输出器
    pub fn set_writer(&mut self, writer: Arc<dyn LogAppender>) {
        self.writer = Some(MultiAppender::new(writer));
        self.refresh();
    }

    /// 在已有输出器基础上追加
    pub fn add_writer(&mut self, writer: Arc<dyn LogAppender>) {
        self.writer = Some(match &self.writer {
            Some(multi) => multi.with(writer),
            None => MultiAppender::new(writer),
        });
        self.refresh();
    }

    pub fn clear_writer(&mut self) {
        self.writer = None;
        self.refresh();
    }
}

impl fmt::Debug for LevelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelConfig")
            .field("tag", &self.tag)
            .field("prefix", &self.prefix)
            .field("mode", &self.mode)
            .field("color", &self.color)
            .field("timestamp", &self.timestamp)
            .field("std", &self.std)
            .field("writer", &self.writer)
            .field("write_mode", &self.write_mode)
            .finish()
    }
}
