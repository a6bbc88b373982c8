mod buffer_pool;
mod core;
mod json_formatter;
mod text_formatter;

pub use buffer_pool::{BufferPool, PooledBuffer, DEFAULT_POOL_SIZE};
pub use self::core::{
    blank_format, render_format, write_message, ByteWriter, Detail, LogFormatter, LogRecord,
    LINE_END, SEPARATOR, TIME_FORMAT,
};
pub use json_formatter::{JsonFormatter, JsonRecord};
pub use text_formatter::{raw_string, TextFormatter};
