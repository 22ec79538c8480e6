use crate::core::payroll::{
    DEFAULT_ATTENDANCE_BONUS, DEFAULT_FORGIVEN_UNITS, DEFAULT_WORKING_DAYS_DIVISOR, PayrollPolicy,
};
use crate::core::roster::check_salary;
use crate::core::slip::DEFAULT_SHARE_URL;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::ui::messages::{info, success};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Where attendance records live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Local,
    Github,
}

/// Remote attendance file kept in a GitHub repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    pub owner: String,
    pub repo: String,
    #[serde(default = "default_remote_path")]
    pub path: String,
    #[serde(default)]
    pub branch: Option<String>,
    /// Name of the environment variable holding the access token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_divisor")]
    pub working_days_divisor: f64,
    #[serde(default = "default_bonus")]
    pub attendance_bonus: f64,
    #[serde(default = "default_forgiven_units")]
    pub forgiven_leave_units: f64,
    #[serde(default = "default_roster")]
    pub roster: Vec<Employee>,
    #[serde(default)]
    pub storage: StorageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubConfig>,
    #[serde(default = "default_share_url")]
    pub share_url: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_divisor() -> f64 {
    DEFAULT_WORKING_DAYS_DIVISOR
}
fn default_bonus() -> f64 {
    DEFAULT_ATTENDANCE_BONUS
}
fn default_forgiven_units() -> f64 {
    DEFAULT_FORGIVEN_UNITS
}
fn default_share_url() -> String {
    DEFAULT_SHARE_URL.to_string()
}
fn default_remote_path() -> String {
    "attendance.csv".to_string()
}
fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}
fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_max_attempts() -> u32 {
    3
}

/// Seed roster written on first init.
pub fn default_roster() -> Vec<Employee> {
    [
        ("Karishma", 24000.0),
        ("Riya", 22000.0),
        ("Saache", 22000.0),
        ("Neha", 21000.0),
        ("Bhumi", 20000.0),
        ("Sahil", 23000.0),
    ]
    .into_iter()
    .map(|(n, s)| Employee::new(n, s))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            working_days_divisor: default_divisor(),
            attendance_bonus: default_bonus(),
            forgiven_leave_units: default_forgiven_units(),
            roster: default_roster(),
            storage: StorageKind::Local,
            github: None,
            share_url: default_share_url(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.staffledger`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".staffledger")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("staffledger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("staffledger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let cfg: Config = serde_yaml::from_str(&content)?;
            cfg.validate()?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.working_days_divisor.is_finite() && self.working_days_divisor > 0.0) {
            return Err(AppError::Config(format!(
                "working_days_divisor must be a positive number, got {}",
                self.working_days_divisor
            )));
        }

        if self.storage == StorageKind::Github && self.github.is_none() {
            return Err(AppError::Config(
                "storage is 'github' but the 'github' section is missing".into(),
            ));
        }

        for e in &self.roster {
            check_salary(e.base_salary).map_err(|_| {
                AppError::InvalidSalary(format!("{} for '{}' in roster", e.base_salary, e.name))
            })?;
        }

        let mut names: Vec<&str> = self.roster.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        if let Some(w) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(AppError::Config(format!(
                "duplicate employee '{}' in roster",
                w[0]
            )));
        }

        Ok(())
    }

    pub fn payroll_policy(&self) -> PayrollPolicy {
        PayrollPolicy {
            divisor: self.working_days_divisor,
            attendance_bonus: self.attendance_bonus,
            forgiven_units: self.forgiven_leave_units,
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Initialize configuration directory and file.
    ///
    /// An existing config file is never overwritten. Returns the
    /// configuration that was set up.
    pub fn init_all(base: &Config, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        let config = base.clone();

        if !is_test {
            let path = Self::config_file();
            if path.exists() {
                info(format!("Keeping existing config file: {}", path.display()));
            } else {
                fs::create_dir_all(&dir)?;
                let yaml = config.to_yaml()?;
                let mut file = fs::File::create(&path)?;
                file.write_all(yaml.as_bytes())?;
                success(format!("Config file: {}", path.display()));
            }
        }

        if let Some(parent) = std::path::Path::new(&config.database).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
