//! Создание публикации: товар в наличии или предзаказ

pub mod form;
pub mod item_form;
pub mod variation_list;
pub mod view;
pub mod view_model;

pub use view::PublicationCreatePage;
