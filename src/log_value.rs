use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// 日志参数值
///
/// 文本渲染时字符串不带引号；JSON 渲染时保留原始类型
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    String(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    Null,
    /// 任意 JSON 兼容的数据
    Json(Value),
}

impl LogValue {
    /// 用任意实现 Display 的值构造字符串参数
    pub fn display(value: impl fmt::Display) -> Self {
        LogValue::String(value.to_string())
    }

    /// 调试形式：字符串带引号，其余与 Display 相同
    pub fn write_debug(&self, f: &mut impl fmt::Write) -> fmt::Result {
        match self {
            LogValue::String(s) | LogValue::Json(Value::String(s)) => write!(f, "{:?}", s),
            other => write!(f, "{}", other),
        }
    }
}

impl Serialize for LogValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LogValue::String(s) => serializer.serialize_str(s),
            LogValue::I64(n) => serializer.serialize_i64(*n),
            LogValue::U64(n) => serializer.serialize_u64(*n),
            LogValue::F64(n) => serializer.serialize_f64(*n),
            LogValue::Bool(b) => serializer.serialize_bool(*b),
            LogValue::Null => serializer.serialize_none(),
            LogValue::Json(v) => v.serialize(serializer),
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::String(s) => f.write_str(s),
            LogValue::I64(n) => write!(f, "{}", n),
            LogValue::U64(n) => write!(f, "{}", n),
            LogValue::F64(n) => write!(f, "{}", n),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Null => f.write_str("null"),
            LogValue::Json(Value::String(s)) => f.write_str(s),
            LogValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::String(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::String(s.to_string())
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::String(s.clone())
    }
}

impl From<char> for LogValue {
    fn from(c: char) -> Self {
        LogValue::String(c.to_string())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for LogValue {
            fn from(n: $t) -> Self {
                LogValue::I64(n as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for LogValue {
            fn from(n: $t) -> Self {
                LogValue::U64(n as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for LogValue {
    fn from(n: f32) -> Self {
        LogValue::F64(n as f64)
    }
}

impl From<f64> for LogValue {
    fn from(n: f64) -> Self {
        LogValue::F64(n)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<Value> for LogValue {
    fn from(v: Value) -> Self {
        LogValue::Json(v)
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(LogValue::Null, Into::into)
    }
}
