pub mod management_table;
