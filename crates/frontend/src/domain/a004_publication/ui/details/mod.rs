pub mod form;
pub mod variation_card;
pub mod view;
pub mod view_model;

pub use view::PublicationDetailsPage;
