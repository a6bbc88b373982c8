use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// 日志级别标识
///
/// 内置级别使用 1..=10 的小整数，按严重程度递增；
/// 自定义级别由标签哈希得到，最高位恒为 1，因此不会与内置级别冲突。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LevelId(u64);

/// 自定义级别的标记位
const CUSTOM_BIT: u64 = 1 << 63;

impl LevelId {
    /// 调试信息
    pub const DEBG: LevelId = LevelId(1);
    /// 跟踪信息
    pub const TRACE: LevelId = LevelId(2);
    /// 普通打印
    pub const PRINT: LevelId = LevelId(3);
    /// 普通日志
    pub const LOG: LevelId = LevelId(4);
    /// 一般信息
    pub const INFO: LevelId = LevelId(5);
    /// 成功信息
    pub const OK: LevelId = LevelId(6);
    /// 警告信息
    pub const WARN: LevelId = LevelId(7);
    /// 错误信息
    pub const ERR: LevelId = LevelId(8);
    /// 失败信息
    pub const FAIL: LevelId = LevelId(9);
    /// 致命错误，输出后触发退出钩子
    pub const FATAL: LevelId = LevelId(10);
    /// 未知级别
    pub const UNKNOWN: LevelId = LevelId(u64::MAX);

    /// 所有内置级别（按严重程度升序）
    pub const BUILTIN: [LevelId; 10] = [
        LevelId::DEBG,
        LevelId::TRACE,
        LevelId::PRINT,
        LevelId::LOG,
        LevelId::INFO,
        LevelId::OK,
        LevelId::WARN,
        LevelId::ERR,
        LevelId::FAIL,
        LevelId::FATAL,
    ];

    /// 原始数值
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// 是否为内置级别
    pub fn is_builtin(self) -> bool {
        (LevelId::DEBG.0..=LevelId::FATAL.0).contains(&self.0)
    }

    /// 是否为未知级别
    pub fn is_unknown(self) -> bool {
        self == LevelId::UNKNOWN
    }

    /// 内置级别的默认标签，自定义级别返回空串
    pub fn builtin_tag(self) -> &'static str {
        match self {
            LevelId::DEBG => "DEBUG",
            LevelId::TRACE => "TRACE",
            LevelId::PRINT => "PRINT",
            LevelId::LOG => "LOG",
            LevelId::INFO => "INFO",
            LevelId::OK => "OK",
            LevelId::WARN => "WARN",
            LevelId::ERR => "ERROR",
            LevelId::FAIL => "FAIL",
            LevelId::FATAL => "FATAL",
            _ => "",
        }
    }

    /// 由标签计算自定义级别标识
    ///
    /// 同一标签与同一 seed 总是得到同一标识。seed 仅在哈希冲突时递增。
    pub fn from_tag(tag: &str, seed: u64) -> LevelId {
        let id = xxh3_64_with_seed(tag.as_bytes(), seed) | CUSTOM_BIT;
        if id == LevelId::UNKNOWN.0 {
            LevelId(id ^ 1)
        } else {
            LevelId(id)
        }
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.builtin_tag())
    }
}

/// 解析内置级别的别名（大小写不敏感）
pub fn builtin_alias(s: &str) -> Option<LevelId> {
    match s.to_uppercase().as_str() {
        "D" | "DEBUG" | "DEBG" | "DBG" => Some(LevelId::DEBG),
        "T" | "TRACE" | "TRC" => Some(LevelId::TRACE),
        "P" | "PRINT" | "PRT" => Some(LevelId::PRINT),
        "L" | "LOG" => Some(LevelId::LOG),
        "I" | "INFO" | "INF" => Some(LevelId::INFO),
        "O" | "OK" => Some(LevelId::OK),
        "W" | "WARN" | "WARNING" | "WRN" => Some(LevelId::WARN),
        "E" | "ERR" | "ERROR" => Some(LevelId::ERR),
        "FAIL" | "FAL" => Some(LevelId::FAIL),
        "F" | "FATAL" | "FTL" => Some(LevelId::FATAL),
        _ => None,
    }
}
