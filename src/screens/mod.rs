pub mod add_training_date_screen;
pub mod attendance_screen;
pub mod components;
pub mod edit_player_screen;
pub mod screen;
pub mod settings_screen;
