use crate::core::{ConfigProvider, Context};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub bridge: BridgeConfig,
    pub source: SourceConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub host: String,
    pub port: u16,
    pub bridge_id: String,
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub sort: Option<bool>,
    pub bundle: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BRIDGE_HOST})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.input_path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn sort_records(&self) -> bool {
        self.load.sort.unwrap_or(false)
    }

    fn bundle(&self) -> bool {
        self.load.bundle.unwrap_or(false)
    }

    fn base_context(&self) -> Context {
        Context::new(
            self.bridge.host.clone(),
            self.bridge.port,
            self.bridge.bridge_id.clone(),
            self.bridge.instance_id.clone().unwrap_or_default(),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("bridge.host", &self.bridge.host)?;
        validation::validate_range("bridge.port", self.bridge.port, 1, u16::MAX)?;
        validation::validate_non_empty_string("bridge.bridge_id", &self.bridge.bridge_id)?;
        validation::validate_path("source.input_path", &self.source.input_path)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[bridge]
host = "10.0.0.5"
port = 51826
bridge_id = "CC:22:3D:E3:CE:30"
instance_id = "homebridge"

[source]
input_path = "accessories.json"

[load]
output_path = "./output"
output_formats = ["json", "csv"]
sort = true
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.bridge.host, "10.0.0.5");
        assert_eq!(config.input_path(), "accessories.json");
        assert!(config.sort_records());
        assert!(!config.bundle());
        assert!(config.validate().is_ok());

        let ctx = config.base_context();
        assert_eq!(ctx.port, 51826);
        assert_eq!(ctx.bridge_id, "CC:22:3D:E3:CE:30");
        assert_eq!(ctx.instance_id, "homebridge");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ACCESSORY_ETL_TEST_HOST", "192.168.1.20");

        let toml_content = r#"
[bridge]
host = "${ACCESSORY_ETL_TEST_HOST}"
port = 51826
bridge_id = "bridge1"

[source]
input_path = "accessories.json"

[load]
output_path = "./output"
output_formats = ["json"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.bridge.host, "192.168.1.20");
        assert_eq!(config.base_context().instance_id, "");

        std::env::remove_var("ACCESSORY_ETL_TEST_HOST");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = BASIC.replace(r#"output_formats = ["json", "csv"]"#, r#"output_formats = ["xml"]"#);
        let config = TomlConfig::from_toml_str(&toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[bridge]\nport = \"not a number\""),
            Err(EtlError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bridge.bridge_id, "CC:22:3D:E3:CE:30");
    }
}
