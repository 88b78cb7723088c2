pub mod get_scan_options;
pub mod scan_menu;
