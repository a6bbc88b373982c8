use std::io;

/// 日志输出器 trait
///
/// 负责将渲染好的字节写入目标介质。实现需自行保证并发写入安全，
/// Logger 不会在写入外层加锁。
pub trait LogAppender: Send + Sync {
    /// 输出一段完整的日志字节
    fn append(&self, buf: &[u8]) -> io::Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: LogAppender + ?Sized> LogAppender for std::sync::Arc<T> {
    fn append(&self, buf: &[u8]) -> io::Result<()> {
        (**self).append(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}
