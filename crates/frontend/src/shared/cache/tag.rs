use std::fmt;

/// Вид сущности в графе тегов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKind {
    Publication,
    Product,
    CatalogItem,
    FilterGroup,
    Order,
    User,
    Category,
    Preorder,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Publication => "Publication",
            TagKind::Product => "Product",
            TagKind::CatalogItem => "CatalogItem",
            TagKind::FilterGroup => "FilterGroup",
            TagKind::Order => "Order",
            TagKind::User => "User",
            TagKind::Category => "Category",
            TagKind::Preorder => "Preorder",
        }
    }
}

/// Тег кэша: вид сущности и, возможно, её id
///
/// Тег без id обозначает коллекцию.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheTag {
    pub kind: TagKind,
    pub id: Option<String>,
}

impl CacheTag {
    pub fn item(kind: TagKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: Some(id.into()),
        }
    }

    pub fn collection(kind: TagKind) -> Self {
        Self { kind, id: None }
    }

    /// Задевает ли инвалидация `self` предоставленный тег `provided`
    ///
    /// Тег с id совпадает только с тем же видом и id; тег без id
    /// совпадает с любым тегом своего вида.
    pub fn invalidates(&self, provided: &CacheTag) -> bool {
        if self.kind != provided.kind {
            return false;
        }
        match &self.id {
            None => true,
            Some(id) => provided.id.as_deref() == Some(id.as_str()),
        }
    }
}

impl fmt::Display for CacheTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}:{}", self.kind.as_str(), id),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

/// Теги списочного запроса: по тегу на каждый элемент плюс тег коллекции
pub fn list_tags<T>(kind: TagKind, items: &[T], id_of: impl Fn(&T) -> String) -> Vec<CacheTag> {
    let mut tags: Vec<CacheTag> = items.iter().map(|i| CacheTag::item(kind, id_of(i))).collect();
    tags.push(CacheTag::collection(kind));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_with_id_matches_only_same_id() {
        let tag = CacheTag::item(TagKind::Publication, "p1");
        assert!(tag.invalidates(&CacheTag::item(TagKind::Publication, "p1")));
        assert!(!tag.invalidates(&CacheTag::item(TagKind::Publication, "p2")));
        assert!(!tag.invalidates(&CacheTag::collection(TagKind::Publication)));
        assert!(!tag.invalidates(&CacheTag::item(TagKind::Product, "p1")));
    }

    #[test]
    fn test_tag_without_id_matches_whole_kind() {
        let tag = CacheTag::collection(TagKind::User);
        assert!(tag.invalidates(&CacheTag::item(TagKind::User, "u1")));
        assert!(tag.invalidates(&CacheTag::collection(TagKind::User)));
        assert!(!tag.invalidates(&CacheTag::item(TagKind::Order, "u1")));
    }

    #[test]
    fn test_list_tags() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let tags = list_tags(TagKind::FilterGroup, &ids, |id| id.clone());
        assert_eq!(
            tags,
            vec![
                CacheTag::item(TagKind::FilterGroup, "a"),
                CacheTag::item(TagKind::FilterGroup, "b"),
                CacheTag::collection(TagKind::FilterGroup),
            ]
        );
        assert_eq!(tags[0].to_string(), "FilterGroup:a");
        assert_eq!(tags[2].to_string(), "FilterGroup");
    }
}
