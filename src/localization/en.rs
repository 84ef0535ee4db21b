use crate::localization::Labels;

pub static LABELS: Labels = Labels {
    app_title: "attend4all",
    present: "present",
    absent: "absent",
    injured: "injured",
    default_player_name: "Player",
    player_name_header: "Player Name",
    total_present_header: "Total Present",
    total_absent_header: "Total Absent",
    total_injured_header: "Total Injured",
    percentage_header: "% Attendance",
    spreadsheet_title: "Attendance Sheet",
    sheet_name: "Attendance",
    quit: "quit",
    back: "back",
    confirm: "confirm",
    up: "up",
    down: "down",
    previous: "previous",
    next: "next",
    cycle_mark: "change mark",
    new_player: "new player",
    rename_player: "rename player",
    remove_player: "remove player",
    add_training_date: "add training",
    remove_training_date: "remove training",
    sign_in: "sign in with Google",
    sign_out: "sign out",
    save_to_drive: "save to Drive",
    load_from_drive: "load from Drive",
    export_to_sheets: "export to Sheets",
    export_csv: "export CSV",
    settings: "settings",
    info: "info",
    error: "error",
    warning: "warning",
    could_not_recognize_home_directory: "could not recognize home directory",
    could_not_create_app_directory: "could not create app directory",
    browser_sign_in_complete: "Sign-in complete. You can close this window and go back to attend4all.",
    browser_sign_in_failed: "Sign-in failed. Go back to attend4all and try again.",
    players: "players",
    name: "name",
    training_date: "training date",
    no_players_yet: "no players yet",
    google_sync: "Google sync",
    sync_disabled: "Google sync is disabled: no OAuth client id is configured (set GOOGLE_CLIENT_ID).",
    signed_out_hint: "Sign in with Google to save, load or export your data.",
    signed_in_as: "signed in as",
    not_signed_in: "You need to sign in with Google first.",
    complete_sign_in_in_browser: "Complete the sign-in in your browser",
    signed_in: "Signed in.",
    signed_out: "Signed out.",
    could_not_sign_in: "Could not sign in",
    signing_out: "Signing out...",
    saving: "Saving data to Google Drive...",
    saved: "Data saved to Google Drive.",
    could_not_save: "Could not save",
    loading: "Loading data from Google Drive...",
    loaded: "Data loaded from Google Drive.",
    could_not_load: "Could not load",
    no_document_found: "No data file found on Google Drive. A new one will be created on save.",
    malformed_document: "The data file could not be loaded: its format is wrong or damaged.",
    exporting: "Exporting to Google Sheets...",
    exported: "Exported to",
    could_not_export: "Could not export",
    csv_exported: "CSV written to",
    confirm_load: "Load data from Google Drive? Unsaved changes will be overwritten.",
    confirm_remove_player: "Remove player",
    confirm_remove_training_date: "Remove training date",
    yes_no_hint: "Enter = yes, Esc = no",
    date_already_exists: "This training date already exists.",
    invalid_date: "Please enter a valid date.",
    name_cannot_be_empty: "name cannot be empty",
    player_not_found: "player not found",
    no_training_dates_yet: "no training dates yet",
    operation_failed: "operation failed",
    language: "language",
    settings_saved: "settings saved",
    could_not_save_settings: "could not save settings",
    keybinding_settings: "key bindings",
    unassigned: "unassigned",
};
