pub mod menu_catalog;

pub use menu_catalog::MenuCatalog;
