use std::collections::{BTreeSet, HashMap, VecDeque};

use super::tag::CacheTag;

/// Ключ запроса в кэше (`getPublication:id=...`)
pub type QueryKey = String;

/// Сколько результатов без подписчиков держать в памяти
pub const IDLE_LIMIT: usize = 32;

/// Индекс "тег → запросы, которые его предоставили"
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    by_tag: HashMap<CacheTag, BTreeSet<QueryKey>>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, key: &str, tags: &[CacheTag]) {
        for tag in tags {
            self.by_tag
                .entry(tag.clone())
                .or_default()
                .insert(key.to_string());
        }
    }

    fn remove(&mut self, key: &str, tags: &[CacheTag]) {
        for tag in tags {
            if let Some(keys) = self.by_tag.get_mut(tag) {
                keys.remove(key);
                if keys.is_empty() {
                    self.by_tag.remove(tag);
                }
            }
        }
    }

    /// Запросы, чьи теги задевает хотя бы один инвалидированный тег
    pub fn matching(&self, invalidated: &[CacheTag]) -> BTreeSet<QueryKey> {
        let mut keys = BTreeSet::new();
        for (provided, owners) in &self.by_tag {
            if invalidated.iter().any(|t| t.invalidates(provided)) {
                keys.extend(owners.iter().cloned());
            }
        }
        keys
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    data: Option<V>,
    tags: Vec<CacheTag>,
    subscribers: usize,
    stale: bool,
}

impl<V> Default for Entry<V> {
    fn default() -> Self {
        Self {
            data: None,
            tags: Vec::new(),
            subscribers: 0,
            stale: false,
        }
    }
}

/// Результат инвалидации
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invalidation {
    /// Смонтированные запросы, которые надо перезапросить сейчас
    pub refetch: Vec<QueryKey>,
    /// Несмонтированные запросы, помеченные устаревшими
    pub stale: Vec<QueryKey>,
}

impl Invalidation {
    pub fn is_empty(&self) -> bool {
        self.refetch.is_empty() && self.stale.is_empty()
    }
}

/// Кэш результатов запросов
///
/// Результаты без подписчиков живут в очереди `idle`: самые старые
/// вытесняются сверх лимита, устаревшие теряют данные сразу.
#[derive(Debug, Clone)]
pub struct QueryCache<V> {
    entries: HashMap<QueryKey, Entry<V>>,
    index: TagIndex,
    idle: VecDeque<QueryKey>,
    idle_limit: usize,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(index: TagIndex) -> Self {
        Self::with_idle_limit(index, IDLE_LIMIT)
    }

    pub fn with_idle_limit(index: TagIndex, idle_limit: usize) -> Self {
        Self {
            entries: HashMap::new(),
            index,
            idle: VecDeque::new(),
            idle_limit,
        }
    }

    /// Монтирование запроса
    ///
    /// Возвращает свежие данные из кэша либо `None`, если запрос
    /// нужно выполнить (данных нет или они устарели).
    pub fn mount(&mut self, key: &str) -> Option<V> {
        self.idle.retain(|k| k != key);
        let entry = self.entries.entry(key.to_string()).or_default();
        entry.subscribers += 1;
        if entry.stale {
            return None;
        }
        entry.data.clone()
    }

    pub fn unmount(&mut self, key: &str) {
        let Some(entry) = self.entries.get_mut(key) else {
            return;
        };
        entry.subscribers = entry.subscribers.saturating_sub(1);
        if entry.subscribers == 0 {
            self.mark_idle(key);
        }
    }

    /// Число записей в кэше, включая вытесняемые
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn mark_idle(&mut self, key: &str) {
        if !self.idle.iter().any(|k| k == key) {
            self.idle.push_back(key.to_string());
        }
        while self.idle.len() > self.idle_limit {
            let Some(evicted) = self.idle.pop_front() else {
                break;
            };
            if let Some(entry) = self.entries.remove(&evicted) {
                self.index.remove(&evicted, &entry.tags);
                log::debug!("cache evict {}", evicted);
            }
        }
    }

    pub fn is_mounted(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|e| e.subscribers > 0)
    }

    pub fn is_stale(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|e| e.stale)
    }

    /// Сохранить результат запроса вместе с его тегами
    pub fn store(&mut self, key: &str, data: V, tags: Vec<CacheTag>) {
        let entry = self.entries.entry(key.to_string()).or_default();
        self.index.remove(key, &entry.tags);
        self.index.insert(key, &tags);
        entry.data = Some(data);
        entry.tags = tags;
        entry.stale = false;
        // ответ пришёл уже после размонтирования
        if entry.subscribers == 0 {
            self.mark_idle(key);
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key).and_then(|e| e.data.as_ref())
    }

    pub fn provided_tags(&self, key: &str) -> &[CacheTag] {
        self.entries
            .get(key)
            .map(|e| e.tags.as_slice())
            .unwrap_or(&[])
    }

    /// Инвалидировать теги
    pub fn invalidate(&mut self, tags: &[CacheTag]) -> Invalidation {
        let mut result = Invalidation::default();
        for key in self.index.matching(tags) {
            let Some(entry) = self.entries.get_mut(&key) else {
                continue;
            };
            entry.stale = true;
            if entry.subscribers > 0 {
                result.refetch.push(key);
            } else {
                entry.data = None;
                result.stale.push(key);
            }
        }
        result
    }
}

impl<V: Clone> Default for QueryCache<V> {
    fn default() -> Self {
        Self::new(TagIndex::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cache::tag::{list_tags, TagKind};

    fn publication(id: &str) -> CacheTag {
        CacheTag::item(TagKind::Publication, id)
    }

    #[test]
    fn test_mount_without_data_requires_fetch() {
        let mut cache: QueryCache<u32> = QueryCache::default();
        assert_eq!(cache.mount("getPublication:id=Y"), None);
        cache.store("getPublication:id=Y", 1, vec![publication("Y")]);
        cache.unmount("getPublication:id=Y");
        assert_eq!(cache.mount("getPublication:id=Y"), Some(1));
    }

    #[test]
    fn test_delete_catalog_item_invalidates_only_parent_publication() {
        let mut cache: QueryCache<&str> = QueryCache::default();
        cache.mount("getPublication:id=Y");
        cache.store("getPublication:id=Y", "Y", vec![publication("Y")]);
        cache.mount("getPublication:id=Z");
        cache.store("getPublication:id=Z", "Z", vec![publication("Z")]);
        cache.mount("catalogItem:id=X");
        cache.store(
            "catalogItem:id=X",
            "X",
            vec![CacheTag::item(TagKind::CatalogItem, "X")],
        );

        let result = cache.invalidate(&[publication("Y")]);

        assert_eq!(result.refetch, vec!["getPublication:id=Y".to_string()]);
        assert!(result.stale.is_empty());
        assert!(!cache.is_stale("catalogItem:id=X"));
        assert!(!cache.is_stale("getPublication:id=Z"));
    }

    #[test]
    fn test_collection_tag_hits_list_and_details() {
        let mut cache: QueryCache<u8> = QueryCache::default();
        let ids = vec!["a".to_string(), "b".to_string()];
        cache.mount("getPublicationList:");
        cache.store(
            "getPublicationList:",
            0,
            list_tags(TagKind::Publication, &ids, |id| id.clone()),
        );
        cache.mount("getPublication:id=a");
        cache.store("getPublication:id=a", 1, vec![publication("a")]);

        let result = cache.invalidate(&[CacheTag::collection(TagKind::Publication)]);
        assert_eq!(result.refetch.len(), 2);

        // Инвалидация конкретного элемента задевает и список, где он есть
        let result = cache.invalidate(&[publication("b")]);
        assert_eq!(result.refetch, vec!["getPublicationList:".to_string()]);
    }

    #[test]
    fn test_unmounted_query_marked_stale_and_refetched_on_mount() {
        let mut cache: QueryCache<u8> = QueryCache::default();
        cache.mount("getUser:id=u1");
        cache.store("getUser:id=u1", 1, vec![CacheTag::item(TagKind::User, "u1")]);
        cache.unmount("getUser:id=u1");
        assert!(!cache.is_mounted("getUser:id=u1"));

        let result = cache.invalidate(&[CacheTag::collection(TagKind::User)]);
        assert!(result.refetch.is_empty());
        assert_eq!(result.stale, vec!["getUser:id=u1".to_string()]);
        assert!(cache.is_stale("getUser:id=u1"));
        assert_eq!(cache.get("getUser:id=u1"), None);

        assert_eq!(cache.mount("getUser:id=u1"), None);
        cache.store("getUser:id=u1", 2, vec![CacheTag::item(TagKind::User, "u1")]);
        assert!(!cache.is_stale("getUser:id=u1"));
        assert_eq!(cache.get("getUser:id=u1"), Some(&2));
    }

    #[test]
    fn test_idle_entries_are_evicted_oldest_first() {
        let mut cache: QueryCache<u8> = QueryCache::with_idle_limit(TagIndex::new(), 2);
        for id in ["a", "b", "c"] {
            let key = format!("getPublication:id={}", id);
            cache.mount(&key);
            cache.store(&key, 1, vec![publication(id)]);
            cache.unmount(&key);
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("getPublication:id=a"), None);
        assert!(cache.invalidate(&[publication("a")]).is_empty());

        // повторное монтирование выводит запись из очереди
        assert_eq!(cache.mount("getPublication:id=b"), Some(1));
        cache.mount("getPublication:id=d");
        cache.store("getPublication:id=d", 4, vec![publication("d")]);
        cache.unmount("getPublication:id=d");
        cache.mount("getPublication:id=e");
        cache.unmount("getPublication:id=e");
        assert_eq!(cache.get("getPublication:id=b"), Some(&1));
        assert_eq!(cache.get("getPublication:id=c"), None);
        assert_eq!(cache.get("getPublication:id=d"), Some(&4));
    }

    #[test]
    fn test_late_response_after_unmount_is_evictable() {
        let mut cache: QueryCache<u8> = QueryCache::with_idle_limit(TagIndex::new(), 1);
        cache.mount("getUser:id=u1");
        cache.unmount("getUser:id=u1");
        cache.store("getUser:id=u1", 1, vec![CacheTag::item(TagKind::User, "u1")]);
        cache.mount("getUser:id=u2");
        cache.store("getUser:id=u2", 2, vec![CacheTag::item(TagKind::User, "u2")]);
        cache.unmount("getUser:id=u2");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("getUser:id=u2"), Some(&2));
    }

    #[test]
    fn test_store_replaces_provided_tags() {
        let mut cache: QueryCache<u8> = QueryCache::default();
        cache.mount("getFilterGroupList:");
        cache.store(
            "getFilterGroupList:",
            0,
            vec![CacheTag::item(TagKind::FilterGroup, "old")],
        );
        cache.store(
            "getFilterGroupList:",
            1,
            vec![CacheTag::item(TagKind::FilterGroup, "new")],
        );

        assert!(cache
            .invalidate(&[CacheTag::item(TagKind::FilterGroup, "old")])
            .is_empty());
        assert_eq!(cache.provided_tags("getFilterGroupList:").len(), 1);
    }

    #[test]
    fn test_query_without_tags_never_invalidated() {
        let mut cache: QueryCache<u8> = QueryCache::default();
        cache.mount("getMaxRating:");
        cache.store("getMaxRating:", 5, Vec::new());
        let result = cache.invalidate(&[CacheTag::collection(TagKind::Publication)]);
        assert!(result.is_empty());
    }
}
