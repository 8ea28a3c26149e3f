use crate::core::greeter::Greeter;
use crate::core::login::LoginSelectors;
use crate::utils::error::{GreetrError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetrConfig {
    pub greeter: GreeterSection,
    pub output: OutputSection,
    pub login: Option<LoginSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GreeterSection {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    pub formal: Option<bool>,
    pub log: Option<bool>,
    pub render_target: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginSection {
    pub container: Option<String>,
    pub language_input: Option<String>,
    pub greeting_target: Option<String>,
    /// Value preselected in the language input of the simulated page.
    pub language_value: Option<String>,
}

impl GreetrConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GreetrError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GreetrError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USER_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GreetrError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(language) = self.greeter.language.as_deref().filter(|l| !l.is_empty()) {
            validation::validate_language(language)?;
        }

        if let Some(target) = &self.output.render_target {
            validation::validate_selector("output.render_target", target)?;
        }

        if let Some(login) = &self.login {
            let selectors = [
                ("login.container", &login.container),
                ("login.language_input", &login.language_input),
                ("login.greeting_target", &login.greeting_target),
            ];
            for (field, value) in selectors {
                if let Some(selector) = value {
                    validation::validate_selector(field, selector)?;
                }
            }
        }

        Ok(())
    }

    pub fn formal(&self) -> bool {
        self.output.formal.unwrap_or(false)
    }

    pub fn log_enabled(&self) -> bool {
        self.output.log.unwrap_or(false)
    }

    pub fn login_enabled(&self) -> bool {
        self.login.is_some()
    }

    /// 依 [greeter] 區段建立 Greeter（尚未掛上輸出）
    pub fn build_greeter(&self) -> Result<Greeter> {
        Greeter::create(
            self.greeter.first_name.as_deref(),
            self.greeter.last_name.as_deref(),
            self.greeter.language.as_deref(),
        )
    }

    pub fn login_selectors(&self) -> LoginSelectors {
        let defaults = LoginSelectors::default();
        match &self.login {
            Some(login) => LoginSelectors {
                container: login.container.clone().unwrap_or(defaults.container),
                language_input: login
                    .language_input
                    .clone()
                    .unwrap_or(defaults.language_input),
                greeting_target: login
                    .greeting_target
                    .clone()
                    .unwrap_or(defaults.greeting_target),
            },
            None => defaults,
        }
    }

    pub fn login_language_value(&self) -> Option<&str> {
        self.login.as_ref().and_then(|l| l.language_value.as_deref())
    }
}

impl Validate for GreetrConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
