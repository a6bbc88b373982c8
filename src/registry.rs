use crate::level::LevelId;
use crate::level_config::LevelConfig;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// 级别注册表
///
/// 保存 LevelId 到 LevelConfig 的映射，以及标签到 LevelId 的索引。
/// 配置以 `Arc` 快照形式存储，修改时整体替换，读者只会看到完整的旧值或新值。
pub struct LevelRegistry {
    levels: DashMap<LevelId, Arc<LevelConfig>>,
    tags: DashMap<String, LevelId>,
    owners: DashMap<LevelId, String>,
}

impl LevelRegistry {
    /// 创建包含全部内置级别的注册表
    pub fn new() -> Self {
        let registry = Self {
            levels: DashMap::with_capacity(LevelId::BUILTIN.len()),
            tags: DashMap::with_capacity(LevelId::BUILTIN.len()),
            owners: DashMap::new(),
        };
        registry.install_builtins();
        registry
    }

    fn install_builtins(&self) {
        for id in LevelId::BUILTIN {
            if let Some(config) = LevelConfig::builtin(id) {
                self.levels.insert(id, Arc::new(config));
            }
            self.tags.insert(id.builtin_tag().to_string(), id);
        }
    }

    /// 查找级别配置，未注册返回 None
    pub fn load(&self, id: LevelId) -> Option<Arc<LevelConfig>> {
        self.levels.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// 插入或整体替换
    pub fn store(&self, id: LevelId, config: LevelConfig) {
        self.levels.insert(id, Arc::new(config));
    }

    /// 仅在不存在时插入，返回是否插入
    pub fn store_if_absent(&self, id: LevelId, config: LevelConfig) -> bool {
        match self.levels.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(config));
                true
            }
        }
    }

    /// 原子地复制、修改并替换一个级别的配置，级别不存在时返回 false
    ///
    /// 同一级别上的并发修改互不覆盖
    pub fn update(&self, id: LevelId, f: impl FnOnce(&mut LevelConfig)) -> bool {
        match self.levels.get_mut(&id) {
            Some(mut entry) => {
                let mut next = LevelConfig::clone(entry.value());
                f(&mut next);
                *entry.value_mut() = Arc::new(next);
                true
            }
            None => false,
        }
    }

    /// 遍历所有级别，回调返回 false 时停止；顺序不保证
    ///
    /// 回调内不能修改注册表
    pub fn range(&self, mut f: impl FnMut(LevelId, &Arc<LevelConfig>) -> bool) {
        for entry in self.levels.iter() {
            if !f(*entry.key(), entry.value()) {
                break;
            }
        }
    }

    /// 当前所有级别标识的快照
    pub fn ids(&self) -> Vec<LevelId> {
        self.levels.iter().map(|entry| *entry.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// 删除所有自定义级别，并将内置级别恢复为默认配置
    pub fn reset(&self) {
        self.levels.retain(|id, _| id.is_builtin());
        self.tags.clear();
        self.owners.clear();
        self.install_builtins();
    }

    /// 修改级别的显示标签并加入标签索引，级别不存在时返回 false
    ///
    /// 原标签继续指向该级别；新标签已指向其他级别时索引不变
    pub fn retag(&self, id: LevelId, tag: &str) -> bool {
        if !self.update(id, |config| config.set_tag(tag)) {
            return false;
        }
        self.tags.entry(tag.to_string()).or_insert(id);
        true
    }

    /// 按标签查找级别，未注册返回 `LevelId::UNKNOWN`
    pub fn tag_to_level(&self, tag: &str) -> LevelId {
        self.tags
            .get(tag)
            .map(|entry| *entry.value())
            .unwrap_or(LevelId::UNKNOWN)
    }

    /// 为标签分配级别标识
    ///
    /// 已知标签直接返回原标识；新标签由哈希得到，若哈希值已被其他标签占用，
    /// 先注册者保留该标识，后来者换用下一个 seed 重新哈希。
    pub fn mint(&self, tag: &str) -> LevelId {
        if let Some(entry) = self.tags.get(tag) {
            return *entry.value();
        }

        let mut seed = 0u64;
        loop {
            let id = LevelId::from_tag(tag, seed);
            let claimed = match self.owners.entry(id) {
                Entry::Vacant(entry) => {
                    entry.insert(tag.to_string());
                    true
                }
                Entry::Occupied(entry) => entry.get() == tag,
            };
            if claimed {
                self.tags.insert(tag.to_string(), id);
                return id;
            }
            ::log::warn!("level tag {:?} collides with an existing tag at seed {}", tag, seed);
            seed += 1;
        }
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
