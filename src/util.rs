use std::{io, process::Command};

pub fn sanitize_filename(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Opens `url` with the platform's default handler.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };
    command.arg(url).spawn().map(|_| ())
}

/// Client id used for Google sign-in: settings first, then the runtime
/// environment (`.env` included), then the value baked in at build time.
pub fn resolve_client_id(from_settings: Option<&str>) -> Option<String> {
    non_empty(from_settings.map(str::to_string))
        .or_else(|| non_empty(std::env::var("GOOGLE_CLIENT_ID").ok()))
        .or_else(|| non_empty(option_env!("GOOGLE_CLIENT_ID").map(str::to_string)))
}

pub fn resolve_client_secret() -> Option<String> {
    non_empty(std::env::var("GOOGLE_CLIENT_SECRET").ok())
        .or_else(|| non_empty(option_env!("GOOGLE_CLIENT_SECRET").map(str::to_string)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
