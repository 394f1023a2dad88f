use contracts::domain::a001_category::CategoryDto;
use contracts::domain::a002_product::ProductDto;
use contracts::domain::a004_publication::{PublicationDto, PublicationKind};
use contracts::domain::a005_catalog_item::{CatalogItemDto, MaxRatingDto};
use contracts::shared::api::ListResponse;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use super::form::{addable_products, HeaderDraft};
use crate::domain::a001_category::api::get_category_list;
use crate::domain::a002_product::api::get_product_list;
use crate::domain::a004_publication::api::{
    add_variation, get_max_rating, get_publication, update_publication,
};
use crate::domain::a004_publication::ui::create::form::{validate_variation, VariationDraft};
use crate::shared::cache::{use_mutation, use_query, MutationHandle, QueryHandle};
use crate::shared::notification::Notifications;

/// ViewModel страницы публикации
#[derive(Clone, Copy)]
pub struct PublicationDetailsViewModel {
    pub publication: QueryHandle<PublicationDto>,
    pub categories: QueryHandle<ListResponse<CategoryDto>>,
    pub products: QueryHandle<ListResponse<ProductDto>>,
    pub max_rating: QueryHandle<MaxRatingDto>,
    pub header: RwSignal<Option<HeaderDraft>>,
    pub header_errors: RwSignal<FieldErrors>,
    pub header_save: MutationHandle,
    pub new_item: RwSignal<VariationDraft>,
    pub new_item_active: RwSignal<bool>,
    pub new_item_errors: RwSignal<FieldErrors>,
    pub new_item_save: MutationHandle,
    notifications: Notifications,
}

impl PublicationDetailsViewModel {
    pub fn new(id: Signal<String>) -> Self {
        let vm = Self {
            publication: use_query(move || get_publication(&id.get())),
            categories: use_query(|| Ok(get_category_list())),
            products: use_query(|| Ok(get_product_list())),
            max_rating: use_query(|| Ok(get_max_rating())),
            header: RwSignal::new(None),
            header_errors: RwSignal::new(FieldErrors::new()),
            header_save: use_mutation(),
            new_item: RwSignal::new(VariationDraft::default()),
            new_item_active: RwSignal::new(true),
            new_item_errors: RwSignal::new(FieldErrors::new()),
            new_item_save: use_mutation(),
            notifications: Notifications::use_notifications(),
        };

        // свежие данные с сервера сбрасывают правки заголовка
        let publication = vm.publication;
        let header = vm.header;
        Effect::new(move |_| {
            if let Some(data) = publication.data() {
                header.set(Some(HeaderDraft::from_publication(&data)));
            }
        });
        vm
    }

    pub fn kind(&self) -> Option<PublicationKind> {
        self.publication
            .state
            .with(|s| s.data.as_ref().map(PublicationDto::kind))
    }

    pub fn item(&self, item_id: &str) -> Option<CatalogItemDto> {
        self.publication.state.with(|s| {
            s.data
                .as_ref()
                .and_then(|p| p.items.iter().find(|i| i.id.as_str() == item_id).cloned())
        })
    }

    pub fn item_ids(&self) -> Vec<String> {
        self.publication.state.with(|s| {
            s.data
                .as_ref()
                .map(|p| p.items.iter().map(|i| i.id.to_string()).collect())
                .unwrap_or_default()
        })
    }

    pub fn max_rating_hint(&self) -> Option<String> {
        self.max_rating
            .data()
            .map(|dto| format!("Текущий максимальный рейтинг: {}", dto.max_rating))
    }

    /// Продукты для новой вариации
    pub fn addable_products(&self) -> Vec<ProductDto> {
        let Some(publication) = self.publication.data() else {
            return Vec::new();
        };
        self.products.state.with(|s| {
            s.data
                .as_ref()
                .map(|list| addable_products(&publication, &list.items))
                .unwrap_or_default()
        })
    }

    pub fn save_header(&self) {
        let Some(publication) = self.publication.data() else {
            return;
        };
        let Some(draft) = self.header.get_untracked() else {
            return;
        };
        let dto = match draft.validate(&publication) {
            Ok(dto) => dto,
            Err(errors) => {
                self.header_errors.set(errors);
                return;
            }
        };
        self.header_errors.set(FieldErrors::new());
        let notifications = self.notifications;
        self.header_save.run(update_publication(&dto), move |()| {
            notifications.success("Публикация сохранена");
        });
    }

    pub fn add_variation(&self) {
        let Some(publication) = self.publication.data() else {
            return;
        };
        let publish = self.new_item.with_untracked(|draft| {
            validate_variation(publication.kind(), Some(&publication.category.id), draft)
        });
        let dto = match publish {
            Ok(dto) => dto,
            Err(errors) => {
                self.new_item_errors.set(errors);
                return;
            }
        };
        self.new_item_errors.set(FieldErrors::new());

        let is_active = self.new_item_active.get_untracked();
        let new_item = self.new_item;
        let notifications = self.notifications;
        self.new_item_save.run(
            add_variation(publication.id.as_str(), &dto, is_active),
            move |()| {
                new_item.set(VariationDraft::default());
                notifications.success("Вариация добавлена");
            },
        );
    }
}
