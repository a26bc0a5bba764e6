use crate::config::{
    default_match_types, DEFAULT_CAMPAIGN_NAME, DEFAULT_MAX_ROWS, DEFAULT_OUTPUT_FILE,
    DEFAULT_OUTPUT_PATH,
};
use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, TermSource};
use crate::utils::error::{KeywordError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub campaign: CampaignConfig,
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    #[serde(default = "default_campaign_name")]
    pub name: String,
    #[serde(default = "default_match_types")]
    pub match_types: Vec<String>,
    #[serde(default = "default_true")]
    pub order_matters: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub products: Option<Vec<String>>,
    pub products_file: Option<String>,
    pub words: Option<Vec<String>>,
    pub words_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_output_file")]
    pub file: String,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub include_index: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

fn default_campaign_name() -> String {
    DEFAULT_CAMPAIGN_NAME.to_string()
}

fn default_true() -> bool {
    true
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_max_rows() -> usize {
    DEFAULT_MAX_ROWS
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            name: default_campaign_name(),
            match_types: default_match_types(),
            order_matters: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            file: default_output_file(),
            format: OutputFormat::default(),
            include_index: false,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

fn term_source(inline: &Option<Vec<String>>, file: &Option<String>) -> TermSource {
    match (inline, file) {
        (_, Some(path)) => TermSource::File(path.clone()),
        (Some(terms), None) => TermSource::Inline(terms.clone()),
        (None, None) => TermSource::Inline(Vec::new()),
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KeywordError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KeywordError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CAMPAIGN_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KeywordError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_term_source(
            "input.products",
            self.input.products.as_deref(),
            self.input.products_file.as_deref(),
        )?;
        validation::validate_term_source(
            "input.words",
            self.input.words.as_deref(),
            self.input.words_file.as_deref(),
        )?;
        validation::validate_match_types(&self.campaign.match_types)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_non_empty_string("output.file", &self.output.file)?;
        validation::validate_positive_number("limits.max_rows", self.limits.max_rows, 1)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn products(&self) -> TermSource {
        term_source(&self.input.products, &self.input.products_file)
    }

    fn words(&self) -> TermSource {
        term_source(&self.input.words, &self.input.words_file)
    }

    fn match_types(&self) -> &[String] {
        &self.campaign.match_types
    }

    fn order_matters(&self) -> bool {
        self.campaign.order_matters
    }

    fn campaign_name(&self) -> &str {
        &self.campaign.name
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_file(&self) -> &str {
        &self.output.file
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    fn include_index(&self) -> bool {
        self.output.include_index
    }

    fn max_rows(&self) -> usize {
        self.limits.max_rows
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let toml_content = r#"
[input]
products = ["honda", "toyota"]
words = ["buy", "price"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.campaign_name(), "SEM_Campaign");
        assert_eq!(config.match_types(), ["Exact", "Phrase"]);
        assert!(config.order_matters());
        assert_eq!(config.output_file(), "rawdata.csv");
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert_eq!(config.max_rows(), DEFAULT_MAX_ROWS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[campaign]
name = "Cars"
match_types = ["Modified", "Broad"]
order_matters = false

[input]
products_file = "products.txt"
words = ["buy"]

[output]
path = "./out"
file = "cars.txt"
format = "data-uri"
include_index = true

[limits]
max_rows = 50
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.campaign_name(), "Cars");
        assert!(!config.order_matters());
        assert_eq!(config.products(), TermSource::File("products.txt".to_string()));
        assert_eq!(config.words(), TermSource::Inline(vec!["buy".to_string()]));
        assert_eq!(config.output_format(), OutputFormat::DataUri);
        assert!(config.include_index());
        assert_eq!(config.max_rows(), 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SEM_KEYWORDS_TEST_CAMPAIGN", "Spring_Sale");

        let toml_content = r#"
[campaign]
name = "${SEM_KEYWORDS_TEST_CAMPAIGN}"

[input]
products = ["honda"]
words = ["buy"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.campaign_name(), "Spring_Sale");

        std::env::remove_var("SEM_KEYWORDS_TEST_CAMPAIGN");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[campaign]
name = "${SEM_KEYWORDS_UNSET_VARIABLE}"

[input]
products = ["honda"]
words = ["buy"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.campaign_name(), "${SEM_KEYWORDS_UNSET_VARIABLE}");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[campaign]
match_types = ["Exact", "Negative"]

[input]
products = ["honda"]
words = ["buy"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let both_sources = r#"
[input]
products = ["honda"]
products_file = "products.txt"
words = ["buy"]
"#;
        let config = TomlConfig::from_toml_str(both_sources).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result = TomlConfig::from_toml_str("[input\nproducts = 1");
        assert!(matches!(
            result,
            Err(KeywordError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[campaign]
name = "file-test"

[input]
products_file = "products.txt"
words_file = "words.txt"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.campaign.name, "file-test");
    }
}
