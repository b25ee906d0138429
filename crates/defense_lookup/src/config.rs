/// Configuration for the dataset location, column labels and HTTP listener
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where the defense table lives and how its columns are labelled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub columns: ColumnConfig,
}

/// Accepted header labels for each column.
///
/// Every list is checked in order after trimming header whitespace; the first
/// label present in the header row is the one used. The identity and date
/// columns are required, every other column may be absent from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    #[serde(default = "default_identity_labels")]
    pub identity: Vec<String>,
    #[serde(default = "default_date_labels")]
    pub date: Vec<String>,
    #[serde(default = "default_name_labels")]
    pub name: Vec<String>,
    #[serde(default = "default_option_labels")]
    pub option: Vec<String>,
    #[serde(default = "default_time_labels")]
    pub time: Vec<String>,
    #[serde(default = "default_link_labels")]
    pub link: Vec<String>,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("datos_limpios.csv")
}

fn default_identity_labels() -> Vec<String> {
    labels(&["CEDULA"])
}

fn default_date_labels() -> Vec<String> {
    labels(&["FECHA SIMPLE"])
}

fn default_name_labels() -> Vec<String> {
    labels(&["APELLIDOS Y NOMBRES", "NOMBRES"])
}

fn default_option_labels() -> Vec<String> {
    labels(&[
        "OPCION DE TITULACIÓN",
        "OPCIÓN DE TITULACIÓN",
        "OPCION DE TITULACION",
        "OPCIÓN DE TITULACION",
    ])
}

fn default_time_labels() -> Vec<String> {
    labels(&["HORA"])
}

fn default_link_labels() -> Vec<String> {
    labels(&["ENLACES", "ENLACE"])
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            columns: ColumnConfig::default(),
        }
    }
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            identity: default_identity_labels(),
            date: default_date_labels(),
            name: default_name_labels(),
            option: default_option_labels(),
            time: default_time_labels(),
            link: default_link_labels(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Returns the `address:port` string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl AppConfig {
    /// Loads the configuration from a JSON file.
    ///
    /// A missing file is not an error: the defaults describe the usual
    /// dataset layout. A file that exists but cannot be parsed is.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` - Parsed configuration, or defaults if the file is absent
    /// * `Err` - If the file can't be read or isn't valid JSON
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_file(&dir.path().join("absent.json")).unwrap();

        assert_eq!(config.dataset.path, PathBuf::from("datos_limpios.csv"));
        assert_eq!(config.server.bind_address(), "127.0.0.1:8501");
        assert_eq!(config.dataset.columns, ColumnConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = concat!(
            r#"{"dataset": {"path": "data/defensas.csv", "#,
            r#""columns": {"option": ["MODALIDAD"]}}}"#,
        );
        file.write_all(json.as_bytes()).unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("data/defensas.csv"));
        assert_eq!(config.dataset.columns.option, vec!["MODALIDAD".to_string()]);
        assert_eq!(config.dataset.columns.identity, vec!["CEDULA".to_string()]);
        assert_eq!(config.server.port, 8501);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(AppConfig::load_from_file(file.path()).is_err());
    }
}
