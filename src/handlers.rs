pub mod flash;
pub mod info;

pub use flash::{export_files, send_edition, send_exports, send_flash, send_post};
pub use info::{help, show_system_info};
