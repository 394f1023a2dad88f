pub mod delivery_form;
pub mod view;

pub use view::OrderDetailsPage;
