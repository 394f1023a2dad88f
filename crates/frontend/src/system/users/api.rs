use contracts::shared::api::ListResponse;
use contracts::system::users::UserDto;

use crate::shared::api::{ApiError, Endpoint, IdParams};
use crate::shared::cache::{list_tags, CacheTag, QueryDef, TagKind};

/// GET /admin/user?id=
pub fn get_user(user_id: &str) -> Result<QueryDef<UserDto>, ApiError> {
    let endpoint = Endpoint::get("getUser", "/admin/user").with_params(&IdParams { id: user_id })?;
    let tag = CacheTag::item(TagKind::User, user_id);
    Ok(QueryDef::new(endpoint, move |_| vec![tag.clone()]))
}

/// GET /admin/user-list
pub fn get_user_list() -> QueryDef<ListResponse<UserDto>> {
    QueryDef::new(
        Endpoint::get("getUserList", "/admin/user-list"),
        |list: &ListResponse<UserDto>| list_tags(TagKind::User, &list.items, |u| u.id.to_string()),
    )
}
