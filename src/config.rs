// ============================================================================
// CONFIG - Configuración en tiempo de compilación (option_env! + .env)
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "https://1mhxam8ej3.execute-api.us-east-1.amazonaws.com/dev02";

const DEFAULT_LABS: [&str; 5] = [
    "Laboratorio de Informática",
    "Laboratorio de Química",
    "Laboratorio de Física",
    "Laboratorio de Biología",
    "Laboratorio de Electrónica",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub available_labs: Vec<String>,
    pub min_hour: u8,
    pub max_hour: u8,
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            available_labs: DEFAULT_LABS.iter().map(|lab| lab.to_string()).collect(),
            min_hour: 8,
            max_hour: 21,
            language: "ES".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mut config = Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            available_labs: option_env!("AVAILABLE_LABS")
                .map(parse_labs)
                .filter(|labs| !labs.is_empty())
                .unwrap_or(defaults.available_labs),
            min_hour: option_env!("MIN_HOUR")
                .unwrap_or("8").parse().unwrap_or(defaults.min_hour),
            max_hour: option_env!("MAX_HOUR")
                .unwrap_or("21").parse().unwrap_or(defaults.max_hour),
            language: option_env!("UI_LANGUAGE")
                .unwrap_or("ES").to_uppercase(),
        };

        if config.min_hour > config.max_hour {
            config.min_hour = defaults.min_hour;
            config.max_hour = defaults.max_hour;
        }

        config
    }

    /// GET lista de reservas activas
    pub fn reservations_url(&self) -> String {
        format!("{}/reservations", self.api_base_url)
    }

    /// GET reservas pasadas (los parámetros de fecha se agregan como query)
    pub fn past_reservations_url(&self) -> String {
        format!("{}/past-reservations", self.api_base_url)
    }

    /// POST nueva reserva
    pub fn create_reservation_url(&self) -> String {
        format!("{}/reservation", self.api_base_url)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn is_valid_lab(&self, lab: &str) -> bool {
        self.available_labs.iter().any(|known| known == lab)
    }

    pub fn hour_in_range(&self, hour: i32) -> bool {
        (self.min_hour as i32..=self.max_hour as i32).contains(&hour)
    }
}

/// Lista de laboratorios separada por `;`
fn parse_labs(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|lab| !lab.is_empty())
        .map(str::to_string)
        .collect()
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
