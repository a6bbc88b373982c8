use crate::appender::LogAppender;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 文件输出器
///
/// 以追加方式写入文件，内部加锁保证多线程写入时每条日志完整
#[derive(Debug)]
pub struct FileAppender {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileAppender {
    /// 打开（必要时创建）日志文件，父目录不存在时自动创建
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::open_with(path, OpenOptions::new().create(true).append(true))
    }

    fn open_with(path: impl AsRef<Path>, options: &OpenOptions) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();

        // 确保父目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = options.open(&path)?;
        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    /// 获取日志文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogAppender for FileAppender {
    fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        file.write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        file.flush()
    }
}

/// 按给定权限打开日志文件
///
/// 路径为空或打开失败时返回 None，失败原因通过 `log` 门面记录
pub fn file_writer(path: impl AsRef<Path>, mode: u32) -> Option<FileAppender> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return None;
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    match FileAppender::open_with(path, &options) {
        Ok(appender) => Some(appender),
        Err(e) => {
            ::log::warn!("failed to open log file {}: {}", path.display(), e);
            None
        }
    }
}
