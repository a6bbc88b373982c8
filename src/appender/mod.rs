mod console_appender;
mod file_appender;
mod memory_appender;
mod multi_appender;
mod trait_;

pub use console_appender::StdStream;
pub use file_appender::{file_writer, FileAppender};
pub use memory_appender::MemoryAppender;
pub use multi_appender::MultiAppender;
pub use trait_::LogAppender;
