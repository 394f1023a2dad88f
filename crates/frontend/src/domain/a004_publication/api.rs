//! Эндпоинты публикаций и их вариаций
//!
//! Вариации не кэшируются отдельно: любые их изменения инвалидируют тег
//! родительской публикации.

use contracts::domain::a004_publication::{
    PublicationCreateDto, PublicationDto, PublicationUpdateDto,
};
use contracts::domain::a005_catalog_item::{
    CatalogItemPublishDto, CatalogItemUpdateDto, MaxRatingDto,
};
use contracts::shared::api::ListResponse;
use serde::Serialize;

use crate::shared::api::{ApiError, Endpoint, HttpMethod, IdParams};
use crate::shared::cache::{list_tags, CacheTag, MutationDef, QueryDef, TagKind};

const PUBLICATION: &str = "/admin/publication";
const CATALOG_ITEM: &str = "/admin/catalog-item";

fn publication_tag(publication_id: &str) -> CacheTag {
    CacheTag::item(TagKind::Publication, publication_id)
}

/// POST /admin/publication
pub fn create_publication(data: &PublicationCreateDto) -> Result<MutationDef, ApiError> {
    let endpoint =
        Endpoint::new("createPublication", HttpMethod::Post, PUBLICATION).with_body(data)?;
    let mut invalidates: Vec<CacheTag> = data
        .items
        .iter()
        .map(|item| CacheTag::item(TagKind::Product, item.product_id.as_str()))
        .collect();
    invalidates.push(CacheTag::collection(TagKind::Publication));
    Ok(MutationDef::new(endpoint, invalidates))
}

/// GET /admin/publication?id=
pub fn get_publication(publication_id: &str) -> Result<QueryDef<PublicationDto>, ApiError> {
    let endpoint = Endpoint::get("getPublication", PUBLICATION)
        .with_params(&IdParams { id: publication_id })?;
    let tag = publication_tag(publication_id);
    Ok(QueryDef::new(endpoint, move |_| vec![tag.clone()]))
}

/// GET /admin/publication-list
pub fn get_publication_list() -> QueryDef<ListResponse<PublicationDto>> {
    QueryDef::new(
        Endpoint::get("getPublicationList", "/admin/publication-list"),
        |list: &ListResponse<PublicationDto>| {
            list_tags(TagKind::Publication, &list.items, |p| p.id.to_string())
        },
    )
}

/// PUT /admin/publication
pub fn update_publication(data: &PublicationUpdateDto) -> Result<MutationDef, ApiError> {
    let endpoint =
        Endpoint::new("updatePublication", HttpMethod::Put, PUBLICATION).with_body(data)?;
    Ok(MutationDef::new(endpoint, vec![publication_tag(data.id.as_str())]))
}

/// DELETE /admin/publication?id=
pub fn delete_publication(publication_id: &str) -> Result<MutationDef, ApiError> {
    let endpoint = Endpoint::new("deletePublication", HttpMethod::Delete, PUBLICATION)
        .with_params(&IdParams { id: publication_id })?;
    Ok(MutationDef::new(endpoint, vec![publication_tag(publication_id)]))
}

/// GET /admin/catalog-item/max-rating
pub fn get_max_rating() -> QueryDef<MaxRatingDto> {
    QueryDef::untagged(Endpoint::get(
        "getMaxRating",
        "/admin/catalog-item/max-rating",
    ))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddVariationParams<'a> {
    publication_id: &'a str,
    is_active: bool,
}

/// POST /admin/catalog-item?publicationId=&isActive=
pub fn add_variation(
    publication_id: &str,
    data: &CatalogItemPublishDto,
    is_active: bool,
) -> Result<MutationDef, ApiError> {
    let endpoint = Endpoint::new("addVariation", HttpMethod::Post, CATALOG_ITEM)
        .with_params(&AddVariationParams {
            publication_id,
            is_active,
        })?
        .with_body(data)?;
    Ok(MutationDef::new(endpoint, vec![publication_tag(publication_id)]))
}

/// PUT /admin/catalog-item
pub fn update_catalog_item(
    publication_id: &str,
    data: &CatalogItemUpdateDto,
) -> Result<MutationDef, ApiError> {
    let endpoint =
        Endpoint::new("updateCatalogItem", HttpMethod::Put, CATALOG_ITEM).with_body(data)?;
    Ok(MutationDef::new(endpoint, vec![publication_tag(publication_id)]))
}

/// DELETE /admin/catalog-item?id=
pub fn delete_catalog_item(
    publication_id: &str,
    variation_id: &str,
) -> Result<MutationDef, ApiError> {
    let endpoint = Endpoint::new("deleteCatalogItem", HttpMethod::Delete, CATALOG_ITEM)
        .with_params(&IdParams { id: variation_id })?;
    Ok(MutationDef::new(endpoint, vec![publication_tag(publication_id)]))
}

/// PATCH /admin/catalog-item/activate?id=
pub fn activate_catalog_item(
    publication_id: &str,
    variation_id: &str,
) -> Result<MutationDef, ApiError> {
    let endpoint = Endpoint::new(
        "activateCatalogItem",
        HttpMethod::Patch,
        "/admin/catalog-item/activate",
    )
    .with_params(&IdParams { id: variation_id })?;
    Ok(MutationDef::new(endpoint, vec![publication_tag(publication_id)]))
}

/// PATCH /admin/catalog-item/deactivate?id=
pub fn deactivate_catalog_item(
    publication_id: &str,
    variation_id: &str,
) -> Result<MutationDef, ApiError> {
    let endpoint = Endpoint::new(
        "deactivateCatalogItem",
        HttpMethod::Patch,
        "/admin/catalog-item/deactivate",
    )
    .with_params(&IdParams { id: variation_id })?;
    Ok(MutationDef::new(endpoint, vec![publication_tag(publication_id)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryId;
    use contracts::domain::a002_product::ProductId;
    use contracts::domain::a005_catalog_item::{Discount, Quantity};

    fn publish(product_id: &str) -> CatalogItemPublishDto {
        CatalogItemPublishDto {
            product_id: ProductId::from(product_id),
            rating: 0,
            price: 100,
            quantity: Quantity::Limited(1),
            discount: Discount::None,
            credit_info: None,
        }
    }

    #[test]
    fn test_delete_catalog_item_invalidates_parent_only() {
        let def = delete_catalog_item("Y", "X").unwrap();
        assert_eq!(def.invalidates, vec![CacheTag::item(TagKind::Publication, "Y")]);
        assert_eq!(def.endpoint.path_and_query(), "/admin/catalog-item?id=X");
        assert_eq!(def.endpoint.method, HttpMethod::Delete);
    }

    #[test]
    fn test_create_invalidates_products_and_collection() {
        let data = PublicationCreateDto {
            link: "mug".to_string(),
            category_id: CategoryId::from("c1"),
            preorder_id: None,
            shipping_cost_included: None,
            items: vec![publish("p1"), publish("p2")],
        };
        let def = create_publication(&data).unwrap();
        assert_eq!(
            def.invalidates,
            vec![
                CacheTag::item(TagKind::Product, "p1"),
                CacheTag::item(TagKind::Product, "p2"),
                CacheTag::collection(TagKind::Publication),
            ]
        );
        assert_eq!(def.endpoint.body.as_ref().unwrap()["link"], "mug");
    }

    #[test]
    fn test_variation_mutations_target_publication() {
        let defs = vec![
            add_variation("Y", &publish("p1"), true).unwrap(),
            activate_catalog_item("Y", "X").unwrap(),
            deactivate_catalog_item("Y", "X").unwrap(),
            delete_publication("Y").unwrap(),
        ];
        for def in defs {
            assert_eq!(def.invalidates, vec![CacheTag::item(TagKind::Publication, "Y")]);
        }
        let add = add_variation("Y", &publish("p1"), false).unwrap();
        assert_eq!(
            add.endpoint.path_and_query(),
            "/admin/catalog-item?publicationId=Y&isActive=false"
        );
    }

    #[test]
    fn test_get_publication_provides_instance_tag() {
        let def = get_publication("Y").unwrap();
        assert_eq!(def.endpoint.cache_key(), "getPublication:id=Y");
        let list = get_publication_list();
        let empty = ListResponse::<PublicationDto>::default();
        assert_eq!(
            list.provided_tags(&empty),
            vec![CacheTag::collection(TagKind::Publication)]
        );
        assert!(get_max_rating().endpoint.query.is_empty());
    }
}
