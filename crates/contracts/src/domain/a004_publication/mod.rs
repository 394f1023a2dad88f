//! Публикация: витринная карточка, объединяющая одну или несколько
//! вариаций одной категории под общей ссылкой.

pub mod aggregate;

pub use aggregate::{
    PublicationCreateDto, PublicationDto, PublicationId, PublicationKind, PublicationUpdateDto,
};
