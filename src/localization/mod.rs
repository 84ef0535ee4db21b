mod en;
mod es;

use crate::shapes::{enums::LanguageEnum, settings::current_settings};

/// Every user-facing text of the application.
#[derive(Debug)]
pub struct Labels {
    pub app_title: &'static str,
    pub present: &'static str,
    pub absent: &'static str,
    pub injured: &'static str,
    pub default_player_name: &'static str,
    pub player_name_header: &'static str,
    pub total_present_header: &'static str,
    pub total_absent_header: &'static str,
    pub total_injured_header: &'static str,
    pub percentage_header: &'static str,
    pub spreadsheet_title: &'static str,
    pub sheet_name: &'static str,
    pub quit: &'static str,
    pub back: &'static str,
    pub confirm: &'static str,
    pub up: &'static str,
    pub down: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub cycle_mark: &'static str,
    pub new_player: &'static str,
    pub rename_player: &'static str,
    pub remove_player: &'static str,
    pub add_training_date: &'static str,
    pub remove_training_date: &'static str,
    pub sign_in: &'static str,
    pub sign_out: &'static str,
    pub save_to_drive: &'static str,
    pub load_from_drive: &'static str,
    pub export_to_sheets: &'static str,
    pub export_csv: &'static str,
    pub settings: &'static str,
    pub info: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub could_not_recognize_home_directory: &'static str,
    pub could_not_create_app_directory: &'static str,
    pub browser_sign_in_complete: &'static str,
    pub browser_sign_in_failed: &'static str,
    pub players: &'static str,
    pub name: &'static str,
    pub training_date: &'static str,
    pub no_players_yet: &'static str,
    pub google_sync: &'static str,
    pub sync_disabled: &'static str,
    pub signed_out_hint: &'static str,
    pub signed_in_as: &'static str,
    pub not_signed_in: &'static str,
    pub complete_sign_in_in_browser: &'static str,
    pub signed_in: &'static str,
    pub signed_out: &'static str,
    pub could_not_sign_in: &'static str,
    pub signing_out: &'static str,
    pub saving: &'static str,
    pub saved: &'static str,
    pub could_not_save: &'static str,
    pub loading: &'static str,
    pub loaded: &'static str,
    pub could_not_load: &'static str,
    pub no_document_found: &'static str,
    pub malformed_document: &'static str,
    pub exporting: &'static str,
    pub exported: &'static str,
    pub could_not_export: &'static str,
    pub csv_exported: &'static str,
    pub confirm_load: &'static str,
    pub confirm_remove_player: &'static str,
    pub confirm_remove_training_date: &'static str,
    pub yes_no_hint: &'static str,
    pub date_already_exists: &'static str,
    pub invalid_date: &'static str,
    pub name_cannot_be_empty: &'static str,
    pub player_not_found: &'static str,
    pub no_training_dates_yet: &'static str,
    pub operation_failed: &'static str,
    pub language: &'static str,
    pub settings_saved: &'static str,
    pub could_not_save_settings: &'static str,
    pub keybinding_settings: &'static str,
    pub unassigned: &'static str,
}

pub fn labels_for(language: LanguageEnum) -> &'static Labels {
    match language {
        LanguageEnum::En => &en::LABELS,
        LanguageEnum::Es => &es::LABELS,
    }
}

/// Labels for the language selected in the current settings.
pub fn current_labels() -> &'static Labels {
    labels_for(current_settings().language)
}
