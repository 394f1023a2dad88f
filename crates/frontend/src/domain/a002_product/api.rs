use contracts::domain::a002_product::ProductDto;
use contracts::shared::api::ListResponse;

use crate::shared::api::Endpoint;
use crate::shared::cache::{list_tags, QueryDef, TagKind};

/// GET /admin/product-list
///
/// Публикация продукта инвалидирует его тег, поэтому список
/// перечитывается после создания публикации.
pub fn get_product_list() -> QueryDef<ListResponse<ProductDto>> {
    QueryDef::new(
        Endpoint::get("getProductList", "/admin/product-list"),
        |list: &ListResponse<ProductDto>| {
            list_tags(TagKind::Product, &list.items, |p| p.id.to_string())
        },
    )
}
