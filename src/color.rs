//! 终端着色函数
//!
//! 仅作用于标准流输出的消息体；是否真正输出转义序列由 `colored` 根据
//! `NO_COLOR` / `CLICOLOR` / 终端检测决定。

use colored::Colorize;

/// 着色函数类型
pub type ColorFn = fn(&str) -> String;

/// 不着色
pub fn colorless(txt: &str) -> String {
    txt.to_string()
}

pub fn red(txt: &str) -> String {
    txt.red().to_string()
}

pub fn green(txt: &str) -> String {
    txt.green().to_string()
}

pub fn orange(txt: &str) -> String {
    txt.truecolor(255, 153, 0).to_string()
}

pub fn purple(txt: &str) -> String {
    txt.magenta().to_string()
}

pub fn cyan(txt: &str) -> String {
    txt.cyan().to_string()
}

pub fn yellow(txt: &str) -> String {
    txt.yellow().to_string()
}

pub fn brown(txt: &str) -> String {
    txt.truecolor(150, 75, 0).to_string()
}

pub fn gray(txt: &str) -> String {
    txt.bright_black().to_string()
}

pub fn black(txt: &str) -> String {
    txt.black().to_string()
}

pub fn white(txt: &str) -> String {
    txt.white().to_string()
}
