pub mod form;
pub mod view;

pub use view::FilterGroupForm;
