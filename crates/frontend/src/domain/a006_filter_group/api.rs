//! Эндпоинты групп фильтров

use contracts::domain::a006_filter_group::{
    FilterGroupCreateDto, FilterGroupDto, FilterGroupUpdateDto,
};
use contracts::shared::api::ListResponse;

use crate::shared::api::{ApiError, Endpoint, HttpMethod};
use crate::shared::cache::{list_tags, CacheTag, MutationDef, QueryDef, TagKind};
use crate::shared::filter::QueryParams;

const FILTER_GROUP: &str = "/admin/filter-group";

/// GET /admin/filter-group-list
pub fn get_filter_group_list() -> QueryDef<ListResponse<FilterGroupDto>> {
    QueryDef::new(
        Endpoint::get("getFilterGroupList", "/admin/filter-group-list"),
        |list: &ListResponse<FilterGroupDto>| {
            list_tags(TagKind::FilterGroup, &list.items, |g| g.id.to_string())
        },
    )
}

/// POST /admin/filter-group
pub fn create_filter_group(data: &FilterGroupCreateDto) -> Result<MutationDef, ApiError> {
    let endpoint =
        Endpoint::new("createFilterGroup", HttpMethod::Post, FILTER_GROUP).with_body(data)?;
    Ok(MutationDef::new(
        endpoint,
        vec![CacheTag::collection(TagKind::FilterGroup)],
    ))
}

/// PUT /admin/filter-group
pub fn update_filter_group(data: &FilterGroupUpdateDto) -> Result<MutationDef, ApiError> {
    let endpoint =
        Endpoint::new("updateFilterGroup", HttpMethod::Put, FILTER_GROUP).with_body(data)?;
    Ok(MutationDef::new(
        endpoint,
        vec![CacheTag::item(TagKind::FilterGroup, data.id.as_str())],
    ))
}

/// DELETE /admin/filter-group?ids[]=..&ids[]=..
pub fn delete_filter_groups(ids: &[String]) -> Result<MutationDef, ApiError> {
    if ids.is_empty() {
        return Err(ApiError::Request("no filter groups selected".to_string()));
    }
    let mut params = QueryParams::new();
    for id in ids {
        params.append("ids[]", id.as_str());
    }
    let mut endpoint = Endpoint::new("deleteFilterGroups", HttpMethod::Delete, FILTER_GROUP);
    endpoint.query = params.render();
    let invalidates = ids
        .iter()
        .map(|id| CacheTag::item(TagKind::FilterGroup, id.as_str()))
        .collect();
    Ok(MutationDef::new(endpoint, invalidates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_filter_group::{FilterCreateValueDto, FilterGroupId};

    #[test]
    fn test_create_invalidates_collection() {
        let data = FilterGroupCreateDto {
            category_id: None,
            title: "Объём".to_string(),
            filters: vec![FilterCreateValueDto {
                value: "250 мл".to_string(),
            }],
        };
        let def = create_filter_group(&data).unwrap();
        assert_eq!(def.invalidates, vec![CacheTag::collection(TagKind::FilterGroup)]);
        assert_eq!(def.endpoint.body.as_ref().unwrap()["categoryId"], serde_json::Value::Null);
    }

    #[test]
    fn test_update_invalidates_only_touched_group() {
        let data = FilterGroupUpdateDto {
            id: FilterGroupId::from("g1"),
            category_id: None,
            title: "Цвет".to_string(),
            filters: Vec::new(),
        };
        let def = update_filter_group(&data).unwrap();
        assert_eq!(def.invalidates, vec![CacheTag::item(TagKind::FilterGroup, "g1")]);
        assert_eq!(def.endpoint.method, HttpMethod::Put);
    }

    #[test]
    fn test_delete_repeats_ids_param() {
        let ids = vec!["g1".to_string(), "g2".to_string()];
        let def = delete_filter_groups(&ids).unwrap();
        assert_eq!(
            def.endpoint.path_and_query(),
            "/admin/filter-group?ids%5B%5D=g1&ids%5B%5D=g2"
        );
        assert_eq!(
            def.invalidates,
            vec![
                CacheTag::item(TagKind::FilterGroup, "g1"),
                CacheTag::item(TagKind::FilterGroup, "g2"),
            ]
        );
        assert!(delete_filter_groups(&[]).is_err());
    }

    #[test]
    fn test_list_provides_collection_tag() {
        let def = get_filter_group_list();
        let empty = ListResponse::<FilterGroupDto>::default();
        assert_eq!(
            def.provided_tags(&empty),
            vec![CacheTag::collection(TagKind::FilterGroup)]
        );
    }
}
