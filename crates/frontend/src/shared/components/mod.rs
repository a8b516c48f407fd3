pub mod crud_dialog;
pub mod delete_dialog;
pub mod detail_field;
pub mod entity_table;
pub mod error_alert;
pub mod filter_panel;
pub mod form_fields;
pub mod list_page;
pub mod pagination_controls;
pub mod ui;

pub use entity_table::{CellValue, Column, RowAction};
pub use filter_panel::{FilterSpec, SelectFilter};
pub use list_page::{EntityListPage, ListPageConfig, ListSection};
