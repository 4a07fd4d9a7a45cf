use std::env;
use std::fs;
use std::path::Path;

/// Variables que `AppConfig::from_env` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "API_BASE_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "AVAILABLE_LABS",
    "MIN_HOUR",
    "MAX_HOUR",
    "UI_LANGUAGE",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                let Some((key, value)) = line.split_once('=') else {
                    continue;
                };
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                if !CONFIG_KEYS.contains(&key) {
                    println!("cargo:warning=Clave desconocida en .env ignorada: {}", key);
                    continue;
                }

                // El entorno real tiene prioridad sobre .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else {
        println!("cargo:warning=No se encontró .env, usando valores por defecto (ver .env.example)");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
