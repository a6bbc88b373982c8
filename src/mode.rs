use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 级别启用的输出目标类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// 仅标准输出流
    #[default]
    Std,
    /// 仅自定义输出器
    Writer,
    /// 标准输出流与自定义输出器
    Both,
    /// 不输出
    None,
}

impl FromStr for Mode {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "std" => Ok(Mode::Std),
            "writer" => Ok(Mode::Writer),
            "both" => Ok(Mode::Both),
            "none" => Ok(Mode::None),
            _ => Err(LogError::Config(format!("invalid mode: {}", s))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Std => write!(f, "std"),
            Mode::Writer => write!(f, "writer"),
            Mode::Both => write!(f, "both"),
            Mode::None => write!(f, "none"),
        }
    }
}

/// 写入路径（由 Mode、颜色开关和输出器是否存在推导，缓存在级别配置中）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// 丢弃
    Noop,
    /// 标准流，无颜色
    Std,
    /// 标准流，带颜色
    ColorStd,
    /// 仅自定义输出器
    Writer,
    /// 标准流与输出器，无颜色
    Both,
    /// 标准流带颜色，输出器无颜色
    ColorBoth,
}

impl WriteMode {
    /// 按顺序匹配，第一条命中的规则生效
    pub fn resolve(mode: Mode, color: bool, has_writer: bool) -> WriteMode {
        match (mode, has_writer) {
            (Mode::None, _) => WriteMode::Noop,
            (Mode::Writer, false) => WriteMode::Noop,
            (Mode::Writer, true) => WriteMode::Writer,
            (Mode::Both, true) if color => WriteMode::ColorBoth,
            (Mode::Both, true) => WriteMode::Both,
            (Mode::Both, false) | (Mode::Std, _) if color => WriteMode::ColorStd,
            (Mode::Both, false) | (Mode::Std, _) => WriteMode::Std,
        }
    }

    pub fn is_noop(self) -> bool {
        self == WriteMode::Noop
    }

    /// 是否写入标准流
    pub fn writes_std(self) -> bool {
        matches!(
            self,
            WriteMode::Std | WriteMode::ColorStd | WriteMode::Both | WriteMode::ColorBoth
        )
    }

    /// 是否写入自定义输出器
    pub fn writes_writer(self) -> bool {
        matches!(self, WriteMode::Writer | WriteMode::Both | WriteMode::ColorBoth)
    }

    /// 标准流输出是否着色
    pub fn colored(self) -> bool {
        matches!(self, WriteMode::ColorStd | WriteMode::ColorBoth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_none_is_noop() {
        for color in [true, false] {
            for has_writer in [true, false] {
                assert_eq!(WriteMode::resolve(Mode::None, color, has_writer), WriteMode::Noop);
            }
        }
    }

    #[test]
    fn test_resolve_writer() {
        assert_eq!(WriteMode::resolve(Mode::Writer, true, false), WriteMode::Noop);
        assert_eq!(WriteMode::resolve(Mode::Writer, false, false), WriteMode::Noop);
        assert_eq!(WriteMode::resolve(Mode::Writer, true, true), WriteMode::Writer);
        assert_eq!(WriteMode::resolve(Mode::Writer, false, true), WriteMode::Writer);
    }

    #[test]
    fn test_resolve_both() {
        assert_eq!(WriteMode::resolve(Mode::Both, true, false), WriteMode::ColorStd);
        assert_eq!(WriteMode::resolve(Mode::Both, false, false), WriteMode::Std);
        assert_eq!(WriteMode::resolve(Mode::Both, true, true), WriteMode::ColorBoth);
        assert_eq!(WriteMode::resolve(Mode::Both, false, true), WriteMode::Both);
    }

    #[test]
    fn test_resolve_std() {
        assert_eq!(WriteMode::resolve(Mode::Std, true, false), WriteMode::ColorStd);
        assert_eq!(WriteMode::resolve(Mode::Std, false, false), WriteMode::Std);
        // Std 模式忽略输出器
        assert_eq!(WriteMode::resolve(Mode::Std, false, true), WriteMode::Std);
    }

    #[test]
    fn test_write_mode_paths() {
        assert!(WriteMode::ColorBoth.writes_std());
        assert!(WriteMode::ColorBoth.writes_writer());
        assert!(WriteMode::ColorBoth.colored());
        assert!(!WriteMode::Writer.writes_std());
        assert!(!WriteMode::Std.writes_writer());
        assert!(!WriteMode::Noop.writes_std() && !WriteMode::Noop.writes_writer());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("std".parse::<Mode>().unwrap(), Mode::Std);
        assert_eq!("WRITER".parse::<Mode>().unwrap(), Mode::Writer);
        assert_eq!("Both".parse::<Mode>().unwrap(), Mode::Both);
        assert_eq!("none".parse::<Mode>().unwrap(), Mode::None);
        assert!("stdout".parse::<Mode>().is_err());
    }
}
