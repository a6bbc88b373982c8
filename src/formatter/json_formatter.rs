use crate::color::ColorFn;
use crate::error::Result;
use crate::formatter::core::{Detail, LogFormatter, LogRecord, LINE_END, TIME_FORMAT};
use serde::{Deserialize, Serialize};

/// JSON 日志结构，用于解析 JsonFormatter 的输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub detail: serde_json::Value,
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    level: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<&'a str>,
    detail: Detail<'a>,
}

/// JSON 格式化器
///
/// 每条日志输出为一行 JSON，从不着色
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl LogFormatter for JsonFormatter {
    fn format(&self, record: &LogRecord<'_>, _color: Option<ColorFn>, buf: &mut Vec<u8>) -> Result<()> {
        let envelope = Envelope {
            date: record
                .timestamp
                .map(|timestamp| timestamp.format(TIME_FORMAT).to_string()),
            level: record.tag,
            prefix: record.prefix,
            detail: record.detail,
        };
        serde_json::to_writer(&mut *buf, &envelope)?;
        buf.extend_from_slice(LINE_END.as_bytes());
        Ok(())
    }
}
