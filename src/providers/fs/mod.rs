pub mod local_state;
pub mod path;
pub mod settings_reader;
pub mod settings_writer;
