pub mod authenticator;
pub mod document_storage;
pub mod fs;
pub mod google;
pub mod local_state;
pub mod settings_reader;
pub mod settings_writer;
pub mod spreadsheet_service;
