//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de
//! configuración del servidor. Todas las variables tienen valores por
//! defecto de desarrollo; solo DATABASE_URL es obligatoria (ver
//! `config::database`).

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|valor| valor.parse().ok())
                .unwrap_or(3000),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|valor| {
                    valor
                        .split(',')
                        .map(|origen| origen.trim().to_string())
                        .filter(|origen| !origen.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: &str) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: environment.to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: vec!["https://app.ejemplo.com".to_string()],
        }
    }

    #[test]
    fn test_modo_desarrollo() {
        let config = config("development");
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn test_modo_produccion() {
        let config = config("production");
        assert!(config.is_production());
        assert!(!config.is_development());
    }

    #[test]
    fn test_server_url() {
        assert_eq!(config("development").server_url(), "127.0.0.1:8080");
    }
}
