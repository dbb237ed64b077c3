pub mod date_input;
pub mod filter_panel;
pub mod form_field;
pub mod page_header;
pub mod result_dialog;
pub mod status_message;

pub use date_input::DateInput;
pub use filter_panel::FilterPanel;
pub use form_field::FormField;
pub use page_header::PageHeader;
pub use result_dialog::ResultDialog;
pub use status_message::StatusMessage;
