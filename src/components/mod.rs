//! UI Components
//!
//! Screens and the pieces they are built from.

mod add_item_form;
mod admin_page;
mod billing_history;
mod cart_view;
mod code_entry;
mod inventory_table;
mod scanner_panel;
mod status_banner;
mod storefront_page;

pub use add_item_form::AddItemForm;
pub use admin_page::AdminPage;
pub use billing_history::BillingHistory;
pub use cart_view::CartView;
pub use code_entry::CodeEntry;
pub use inventory_table::InventoryTable;
pub use scanner_panel::ScannerPanel;
pub use status_banner::StatusBanner;
pub use storefront_page::StorefrontPage;
