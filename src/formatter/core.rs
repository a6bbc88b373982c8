use crate::color::ColorFn;
use crate::error::Result;
use crate::log_value::LogValue;
use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};
use std::fmt::{self, Write};

/// 时间戳格式
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// 级别标签与消息之间的分隔符
pub const SEPARATOR: &str = "]:\t";
/// 行结束符
pub const LINE_END: &str = "\n";

const MISSING: &str = "{!missing}";

/// 一条待渲染的日志
pub struct LogRecord<'a> {
    pub tag: &'a str,
    pub prefix: Option<&'a str>,
    pub timestamp: Option<DateTime<Local>>,
    pub detail: Detail<'a>,
}

/// 日志内容：已拼接好的文本，或单个原始参数
#[derive(Debug, Clone, Copy)]
pub enum Detail<'a> {
    Text(&'a str),
    Value(&'a LogValue),
}

impl Serialize for Detail<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Detail::Text(s) => serializer.serialize_str(s),
            Detail::Value(v) => v.serialize(serializer),
        }
    }
}

impl fmt::Display for Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::Text(s) => f.write_str(s),
            Detail::Value(v) => write!(f, "{}", v),
        }
    }
}

/// 日志格式化器 trait
///
/// 负责将 LogRecord 渲染到字节缓冲区。`color` 只对文本消息体生效。
pub trait LogFormatter: Send + Sync {
    fn format(&self, record: &LogRecord<'_>, color: Option<ColorFn>, buf: &mut Vec<u8>) -> Result<()>;
}

/// 让 `fmt::Write` 直接写入字节缓冲区
pub struct ByteWriter<'a>(pub &'a mut Vec<u8>);

impl Write for ByteWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// 生成 n 个以单个空格分隔的占位符
pub fn blank_format(n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    let mut format = String::with_capacity(n * 3 - 1);
    format.push_str("{}");
    for _ in 1..n {
        format.push_str(" {}");
    }
    format
}

/// 按运行时格式串渲染参数
///
/// 支持 `{}`、`{:?}` 以及 `{{`/`}}` 转义。参数不足时输出 `{!missing}`，
/// 多余参数追加为 ` {!extra ...}`，无法识别的 `{` 原样输出。
pub fn render_format(out: &mut impl Write, format: &str, args: &[LogValue]) -> fmt::Result {
    let mut args = args.iter();
    let mut rest = format;

    while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
        out.write_str(&rest[..pos])?;
        let tail = &rest[pos..];
        if tail.starts_with("{{") {
            out.write_char('{')?;
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.write_char('}')?;
            rest = &tail[2..];
        } else if tail.starts_with("{}") {
            match args.next() {
                Some(value) => write!(out, "{}", value)?,
                None => out.write_str(MISSING)?,
            }
            rest = &tail[2..];
        } else if tail.starts_with("{:?}") {
            match args.next() {
                Some(value) => value.write_debug(out)?,
                None => out.write_str(MISSING)?,
            }
            rest = &tail[4..];
        } else {
            out.write_str(&tail[..1])?;
            rest = &tail[1..];
        }
    }
    out.write_str(rest)?;

    let mut extra = args.peekable();
    if extra.peek().is_some() {
        out.write_str(" {!extra")?;
        for value in extra {
            write!(out, " {}", value)?;
        }
        out.write_char('}')?;
    }
    Ok(())
}

/// 拼接消息
///
/// 有格式串时按格式串渲染；无格式串时单个参数直接输出，多个参数用 `blank_format` 生成的格式串拼接
pub fn write_message(out: &mut impl Write, format: Option<&str>, args: &[LogValue]) -> fmt::Result {
    match (format, args) {
        (Some(format), _) => render_format(out, format, args),
        (None, []) => Ok(()),
        (None, [value]) => write!(out, "{}", value),
        (None, _) => render_format(out, &blank_format(args.len()), args),
    }
}
