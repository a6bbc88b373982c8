use crate::appender::LogAppender;
use std::fmt;
use std::io;
use std::sync::Arc;

/// 组合输出器
///
/// 每个成员都会收到完整的字节序列，按加入顺序写入，遇到第一个失败即返回该错误
#[derive(Clone)]
pub struct MultiAppender {
    appenders: Vec<Arc<dyn LogAppender>>,
}

impl MultiAppender {
    pub fn new(appender: Arc<dyn LogAppender>) -> Self {
        Self {
            appenders: vec![appender],
        }
    }

    /// 返回追加了新成员的组合输出器，原对象不变
    pub fn with(&self, appender: Arc<dyn LogAppender>) -> Self {
        let mut appenders = Vec::with_capacity(self.appenders.len() + 1);
        appenders.extend(self.appenders.iter().cloned());
        appenders.push(appender);
        Self { appenders }
    }

    pub fn len(&self) -> usize {
        self.appenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appenders.is_empty()
    }
}

impl LogAppender for MultiAppender {
    fn append(&self, buf: &[u8]) -> io::Result<()> {
        for appender in &self.appenders {
            appender.append(buf)?;
        }
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        for appender in &self.appenders {
            appender.flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for MultiAppender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiAppender")
            .field("appenders", &self.appenders.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appender::MemoryAppender;

    struct BrokenAppender;

    impl LogAppender for BrokenAppender {
        fn append(&self, _: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
        }
    }

    #[test]
    fn test_multi_appender_fan_out() -> io::Result<()> {
        let a = MemoryAppender::new();
        let b = MemoryAppender::new();
        let multi = MultiAppender::new(Arc::new(a.clone())).with(Arc::new(b.clone()));

        multi.append(b"hello")?;
        assert_eq!(multi.len(), 2);
        assert_eq!(a.contents(), "hello");
        assert_eq!(b.contents(), "hello");
        Ok(())
    }

    #[test]
    fn test_multi_appender_with_keeps_original() {
        let original = MultiAppender::new(Arc::new(MemoryAppender::new()));
        let extended = original.with(Arc::new(MemoryAppender::new()));
        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn test_multi_appender_stops_at_first_error() {
        let before = MemoryAppender::new();
        let after = MemoryAppender::new();
        let multi = MultiAppender::new(Arc::new(before.clone()))
            .with(Arc::new(BrokenAppender))
            .with(Arc::new(after.clone()));

        let err = multi.append(b"data").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(before.contents(), "data");
        assert!(after.is_empty());
    }
}
