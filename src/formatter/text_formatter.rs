use crate::color::ColorFn;
use crate::error::Result;
use crate::formatter::core::{ByteWriter, Detail, LogFormatter, LogRecord, LINE_END, SEPARATOR, TIME_FORMAT};
use std::fmt::Write;

/// 文本格式化器
///
/// 格式: `<时间戳>\t[<标签>]:\t<前缀 ><消息>\n`，未启用时间戳时以 `[` 开头
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl LogFormatter for TextFormatter {
    fn format(&self, record: &LogRecord<'_>, color: Option<ColorFn>, buf: &mut Vec<u8>) -> Result<()> {
        // 时间戳 19 字节 + 分隔符 + 消息
        let detail_len = match record.detail {
            Detail::Text(s) => s.len(),
            Detail::Value(_) => 16,
        };
        buf.reserve(32 + record.tag.len() + record.prefix.map_or(0, str::len) + detail_len);

        let mut w = ByteWriter(buf);
        if let Some(timestamp) = record.timestamp {
            write!(w, "{}", timestamp.format(TIME_FORMAT))?;
            w.write_char('\t')?;
        }
        w.write_char('[')?;
        w.write_str(record.tag)?;
        w.write_str(SEPARATOR)?;
        if let Some(prefix) = record.prefix {
            w.write_str(prefix)?;
            w.write_char(' ')?;
        }

        match (color, record.detail) {
            (Some(color), Detail::Text(text)) => w.write_str(&color(text))?,
            (Some(color), detail) => w.write_str(&color(&detail.to_string()))?,
            (None, detail) => write!(w, "{}", detail)?,
        }
        w.write_str(LINE_END)?;
        Ok(())
    }
}

/// 去掉文本日志的时间戳、标签和行结束符，返回消息部分
///
/// 找不到分隔符时返回整行（去掉行结束符），非 UTF-8 输入返回空串
pub fn raw_string(line: &[u8]) -> &str {
    let Ok(text) = std::str::from_utf8(line) else {
        return "";
    };
    let body = match text.find(SEPARATOR) {
        Some(pos) => &text[pos + SEPARATOR.len()..],
        None => text,
    };
    body.strip_suffix(LINE_END).unwrap_or(body)
}
