fn main() {
    inject_env_vars();
}

/// Bakes the OAuth client credentials into the binary when they are set at
/// build time. The runtime environment still takes precedence.
fn inject_env_vars() {
    for name in ["GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"] {
        println!("cargo:rerun-if-env-changed={}", name);
        if let Ok(value) = std::env::var(name) {
            println!("cargo:rustc-env={}={}", name, value);
        }
    }
}
