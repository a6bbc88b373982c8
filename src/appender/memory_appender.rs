use crate::appender::LogAppender;
use std::io;
use std::sync::{Arc, Mutex};

/// 内存输出器
///
/// 克隆后共享同一块缓冲区，适合在测试中捕获日志输出
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已写入的内容（按 UTF-8 宽松解码）
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// 已写入的原始字节
    pub fn bytes(&self) -> Vec<u8> {
        self.buf.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().unwrap_or_else(|e| e.into_inner()).is_empty()
    }

    pub fn clear(&self) {
        self.buf.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// 是否与另一个输出器共享缓冲区
    pub fn ptr_eq(&self, other: &MemoryAppender) -> bool {
        Arc::ptr_eq(&self.buf, &other.buf)
    }
}

impl LogAppender for MemoryAppender {
    fn append(&self, buf: &[u8]) -> io::Result<()> {
        self.buf
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_appender_append() -> io::Result<()> {
        let appender = MemoryAppender::new();
        assert!(appender.is_empty());

        appender.append(b"first ")?;
        appender.append(b"second")?;
        assert_eq!(appender.contents(), "first second");

        appender.clear();
        assert!(appender.is_empty());
        Ok(())
    }

    #[test]
    fn test_memory_appender_clone_shares_buffer() -> io::Result<()> {
        let appender = MemoryAppender::new();
        let clone = appender.clone();
        clone.append(b"shared")?;

        assert_eq!(appender.contents(), "shared");
        assert!(appender.ptr_eq(&clone));
        assert!(!appender.ptr_eq(&MemoryAppender::new()));
        Ok(())
    }
}
