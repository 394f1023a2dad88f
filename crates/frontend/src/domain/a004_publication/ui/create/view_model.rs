use contracts::domain::a001_category::{CategoryDto, CategoryId};
use contracts::domain::a002_product::{ProductDto, ProductId};
use contracts::domain::a003_preorder::{PreorderDto, PreorderId};
use contracts::domain::a004_publication::{PublicationId, PublicationKind};
use contracts::domain::a005_catalog_item::MaxRatingDto;
use contracts::enums::ShippingCostIncluded;
use contracts::shared::api::{CreateResponse, ListResponse};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use super::form::{PublicationDraft, VariationDraft};
use super::variation_list::{available_products, ReorderCommand};
use crate::domain::a001_category::api::get_category_list;
use crate::domain::a002_product::api::get_product_list;
use crate::domain::a003_preorder::api::get_preorder_list;
use crate::domain::a004_publication::api::{create_publication, get_max_rating};
use crate::shared::cache::{use_mutation, use_query, MutationHandle, QueryHandle};

/// Что страница получила из адреса: продукты и предзаказ для подстановки
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateRequest {
    pub product_ids: Vec<ProductId>,
    pub preorder_id: Option<PreorderId>,
}

impl CreateRequest {
    fn is_empty(&self) -> bool {
        self.product_ids.is_empty() && self.preorder_id.is_none()
    }
}

/// ViewModel формы создания публикации
#[derive(Clone, Copy)]
pub struct PublicationCreateViewModel {
    pub draft: RwSignal<PublicationDraft>,
    pub errors: RwSignal<FieldErrors>,
    /// Индекс перетаскиваемой строки
    pub dragging: RwSignal<Option<usize>>,
    pub products: QueryHandle<ListResponse<ProductDto>>,
    pub categories: QueryHandle<ListResponse<CategoryDto>>,
    pub preorders: QueryHandle<ListResponse<PreorderDto>>,
    pub max_rating: QueryHandle<MaxRatingDto>,
    pub create: MutationHandle,
    submitted: RwSignal<bool>,
}

impl PublicationCreateViewModel {
    pub fn new(kind: PublicationKind, request: CreateRequest) -> Self {
        let vm = Self {
            draft: RwSignal::new(PublicationDraft::new(kind)),
            errors: RwSignal::new(FieldErrors::new()),
            dragging: RwSignal::new(None),
            products: use_query(|| Ok(get_product_list())),
            categories: use_query(|| Ok(get_category_list())),
            preorders: use_query(|| Ok(get_preorder_list())),
            max_rating: use_query(|| Ok(get_max_rating())),
            create: use_mutation(),
            submitted: RwSignal::new(false),
        };
        vm.apply_request(request);
        vm.revalidate_on_change();
        vm
    }

    /// Подставить запрошенные продукты, когда придут списки
    fn apply_request(&self, request: CreateRequest) {
        if request.is_empty() {
            return;
        }
        let draft = self.draft;
        let products = self.products;
        let preorders = self.preorders;
        let pending = StoredValue::new(Some(request));

        Effect::new(move |_| {
            if pending.with_value(Option::is_none) {
                return;
            }
            let Some(products) = products.data() else {
                return;
            };
            let Some(preorders) = preorders.data() else {
                return;
            };
            let Some(request) = pending.try_update_value(Option::take).flatten() else {
                return;
            };
            let preorder_ids: Vec<PreorderId> =
                preorders.items.iter().map(|p| p.id.clone()).collect();
            draft.update(|d| {
                *d = PublicationDraft::with_defaults(
                    d.kind,
                    &products.items,
                    &request.product_ids,
                    &preorder_ids,
                    request.preorder_id.as_ref(),
                );
            });
        });
    }

    /// После первой попытки отправки ошибки пересчитываются при каждой правке
    fn revalidate_on_change(&self) {
        let draft = self.draft;
        let errors = self.errors;
        let submitted = self.submitted;
        Effect::new(move |_| {
            if !submitted.get() {
                return;
            }
            let result = draft.with(PublicationDraft::validate);
            errors.set(result.err().unwrap_or_default());
        });
    }

    pub fn error(&self, path: &str) -> Option<String> {
        self.errors.with(|e| e.get(path).map(str::to_string))
    }

    pub fn kind(&self) -> PublicationKind {
        self.draft.with(|d| d.kind)
    }

    pub fn set_kind(&self, kind: PublicationKind) {
        self.draft.update(|d| d.set_kind(kind));
    }

    pub fn set_link(&self, link: String) {
        self.draft.update(|d| d.link = link);
    }

    pub fn set_category(&self, category_id: Option<CategoryId>) {
        self.draft.update(|d| d.set_category(category_id));
    }

    pub fn set_preorder(&self, preorder_id: Option<PreorderId>) {
        self.draft.update(|d| d.preorder_id = preorder_id);
    }

    pub fn set_shipping(&self, value: Option<ShippingCostIncluded>) {
        self.draft.update(|d| d.shipping_cost_included = value);
    }

    pub fn update_item(&self, index: usize, f: impl FnOnce(&mut VariationDraft)) {
        self.draft.update(|d| d.items.update(index, f));
    }

    pub fn append_item(&self) {
        self.draft.update(|d| d.items.append(VariationDraft::default()));
    }

    pub fn remove_item(&self, index: usize) {
        self.draft.update(|d| {
            d.items.remove_at(index);
        });
    }

    pub fn drag_start(&self, index: usize) {
        self.dragging.set(Some(index));
    }

    /// Строку отпустили над строкой `index`
    pub fn drop_on(&self, index: usize) {
        if let Some(from) = self.dragging.get_untracked() {
            self.draft.update(|d| {
                d.items.apply(ReorderCommand::Move { from, to: index });
            });
        }
        self.dragging.set(None);
    }

    /// Перетаскивание закончилось вне списка
    pub fn drag_end(&self) {
        if self.dragging.get_untracked().is_some() {
            self.draft.update(|d| {
                d.items.apply(ReorderCommand::Cancelled);
            });
            self.dragging.set(None);
        }
    }

    /// Продукты текущей категории
    pub fn available_products(&self) -> Vec<ProductDto> {
        let category_id = self.draft.with(|d| d.category_id.clone());
        self.products.state.with(|s| {
            s.data
                .as_ref()
                .map(|list| available_products(&list.items, category_id.as_ref()))
                .unwrap_or_default()
        })
    }

    pub fn max_rating_hint(&self) -> Option<String> {
        self.max_rating
            .data()
            .map(|dto| format!("Текущий максимальный рейтинг: {}", dto.max_rating))
    }

    /// Проверить форму и отправить; `on_created` получает id новой публикации
    pub fn submit(&self, on_created: impl FnOnce(PublicationId) + 'static) {
        self.submitted.set(true);
        let dto = match self.draft.with_untracked(PublicationDraft::validate) {
            Ok(dto) => dto,
            Err(errors) => {
                log::debug!("publication form has {} errors", errors.len());
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(FieldErrors::new());
        self.create
            .run(create_publication(&dto), move |created: CreateResponse| {
                on_created(PublicationId::new(created.id));
            });
    }
}
