use crossbeam::queue::ArrayQueue;
use std::ops::{Deref, DerefMut};

/// 超过该容量的缓冲区用完后直接释放，避免个别超长日志长期占用内存
const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

/// 默认最多缓存的缓冲区个数
pub const DEFAULT_POOL_SIZE: usize = 64;

/// 渲染缓冲池
///
/// 每个 Logger 持有一个。借出的缓冲区在归还（Drop）时清空，保证不会泄漏上一次调用的内容。
pub struct BufferPool {
    queue: ArrayQueue<Vec<u8>>,
}

impl BufferPool {
    /// 创建最多缓存 `size` 个缓冲区的池，`size` 为 0 时按 1 处理
    pub fn new(size: usize) -> Self {
        Self {
            queue: ArrayQueue::new(size.max(1)),
        }
    }

    /// 借出一个空缓冲区；池为空时新分配
    pub fn get(&self) -> PooledBuffer<'_> {
        let buf = self.queue.pop().unwrap_or_default();
        PooledBuffer { buf, pool: self }
    }

    /// 池中空闲缓冲区个数
    pub fn idle(&self) -> usize {
        self.queue.len()
    }

    /// 池的容量
    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    fn put(&self, mut buf: Vec<u8>) {
        if buf.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        buf.clear();
        // 池满时丢弃
        let _ = self.queue.push(buf);
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE)
    }
}

/// 借出的缓冲区，离开作用域时自动归还
pub struct PooledBuffer<'a> {
    buf: Vec<u8>,
    pool: &'a BufferPool,
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.put(std::mem::take(&mut self.buf));
    }
}
