use contracts::domain::a003_preorder::PreorderDto;
use contracts::shared::api::ListResponse;

use crate::shared::api::Endpoint;
use crate::shared::cache::{list_tags, QueryDef, TagKind};

/// GET /admin/preorder-list
pub fn get_preorder_list() -> QueryDef<ListResponse<PreorderDto>> {
    QueryDef::new(
        Endpoint::get("getPreorderList", "/admin/preorder-list"),
        |list: &ListResponse<PreorderDto>| {
            list_tags(TagKind::Preorder, &list.items, |p| p.id.to_string())
        },
    )
}
