use crate::appender::LogAppender;
use serde::Deserialize;
use std::io::{self, Write};

/// 标准输出流
///
/// 每个级别固定使用其中之一，写入时持有流锁，保证单条日志不被其他线程打断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StdStream {
    #[default]
    Stdout,
    Stderr,
}

impl LogAppender for StdStream {
    fn append(&self, buf: &[u8]) -> io::Result<()> {
        match self {
            StdStream::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(buf)?;
                stdout.flush()
            }
            StdStream::Stderr => {
                let mut stderr = io::stderr().lock();
                stderr.write_all(buf)?;
                stderr.flush()
            }
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self {
            StdStream::Stdout => io::stdout().flush(),
            StdStream::Stderr => io::stderr().flush(),
        }
    }
}
