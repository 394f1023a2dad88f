pub mod a001_category;
pub mod a002_product;
pub mod a003_preorder;
pub mod a004_publication;
pub mod a006_filter_group;
pub mod a007_order;
