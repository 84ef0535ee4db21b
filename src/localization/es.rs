use crate::localization::Labels;

pub static LABELS: Labels = Labels {
    app_title: "attend4all",
    present: "presente",
    absent: "ausente",
    injured: "lesionado",
    default_player_name: "Jugador",
    player_name_header: "Nombre del Jugador",
    total_present_header: "Total Asistencias",
    total_absent_header: "Total Ausencias",
    total_injured_header: "Total Lesiones",
    percentage_header: "% Asistencia",
    spreadsheet_title: "Hoja de Asistencia",
    sheet_name: "Asistencia",
    quit: "salir",
    back: "volver",
    confirm: "confirmar",
    up: "arriba",
    down: "abajo",
    previous: "anterior",
    next: "siguiente",
    cycle_mark: "cambiar estado",
    new_player: "nuevo jugador",
    rename_player: "renombrar jugador",
    remove_player: "eliminar jugador",
    add_training_date: "añadir entrenamiento",
    remove_training_date: "eliminar entrenamiento",
    sign_in: "conectar con Google",
    sign_out: "desconectar",
    save_to_drive: "guardar en Drive",
    load_from_drive: "cargar desde Drive",
    export_to_sheets: "exportar a Sheets",
    export_csv: "exportar CSV",
    settings: "ajustes",
    info: "información",
    error: "error",
    warning: "aviso",
    could_not_recognize_home_directory: "no se pudo reconocer el directorio personal",
    could_not_create_app_directory: "no se pudo crear el directorio de la aplicación",
    browser_sign_in_complete: "Conexión completada. Puedes cerrar esta ventana y volver a attend4all.",
    browser_sign_in_failed: "La conexión ha fallado. Vuelve a attend4all e inténtalo de nuevo.",
    players: "jugadores",
    name: "nombre",
    training_date: "fecha de entrenamiento",
    no_players_yet: "todavía no hay jugadores",
    google_sync: "Sincronización con Google",
    sync_disabled: "La sincronización con Google está deshabilitada: no se ha configurado el Client ID (GOOGLE_CLIENT_ID).",
    signed_out_hint: "Conecta tu cuenta de Google para guardar, cargar o exportar tus datos.",
    signed_in_as: "conectado como",
    not_signed_in: "Debes conectar tu cuenta de Google primero.",
    complete_sign_in_in_browser: "Completa la conexión en tu navegador",
    signed_in: "¡Conectado!",
    signed_out: "Desconectado.",
    could_not_sign_in: "No se pudo conectar",
    signing_out: "Desconectando...",
    saving: "Guardando datos en Google Drive...",
    saved: "¡Datos guardados en Google Drive correctamente!",
    could_not_save: "Error al guardar",
    loading: "Cargando datos desde Google Drive...",
    loaded: "¡Datos cargados correctamente desde Google Drive!",
    could_not_load: "Error al cargar los datos",
    no_document_found: "No se encontró un archivo de datos. Se creará uno nuevo al guardar.",
    malformed_document: "No se pudieron cargar los datos. El formato del archivo podría ser incorrecto o estar dañado.",
    exporting: "Exportando a Google Sheets...",
    exported: "Exportado con éxito a",
    could_not_export: "Error al exportar",
    csv_exported: "CSV guardado en",
    confirm_load: "¿Cargar los datos desde Google Drive? Se sobrescribirán los cambios no guardados.",
    confirm_remove_player: "¿Eliminar al jugador",
    confirm_remove_training_date: "¿Eliminar el entrenamiento del",
    yes_no_hint: "Enter = sí, Esc = no",
    date_already_exists: "Esta fecha de entrenamiento ya existe. Por favor, elige otra.",
    invalid_date: "Por favor, selecciona una fecha válida.",
    name_cannot_be_empty: "el nombre no puede estar vacío",
    player_not_found: "jugador no encontrado",
    no_training_dates_yet: "todavía no hay entrenamientos",
    operation_failed: "la operación ha fallado",
    language: "idioma",
    settings_saved: "ajustes guardados",
    could_not_save_settings: "no se pudieron guardar los ajustes",
    keybinding_settings: "atajos de teclado",
    unassigned: "sin asignar",
};
