use contracts::domain::a001_category::CategoryDto;
use contracts::shared::api::ListResponse;

use crate::shared::api::Endpoint;
use crate::shared::cache::{list_tags, QueryDef, TagKind};

/// GET /admin/category-list
pub fn get_category_list() -> QueryDef<ListResponse<CategoryDto>> {
    QueryDef::new(
        Endpoint::get("getCategoryList", "/admin/category-list"),
        |list: &ListResponse<CategoryDto>| {
            list_tags(TagKind::Category, &list.items, |c| c.id.to_string())
        },
    )
}
