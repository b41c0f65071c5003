//! Lesson inputs (`primer.toml` format).
//!
//! Every section and field is optional. Anything left out keeps the value the
//! course uses, so an empty file behaves exactly like no file at all.

use crate::decimal::Decimal;
use crate::error::ConfigError;
use crate::inventory::Adjustment;
use serde::Deserialize;
use std::path::Path;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LessonConfig {
    pub profile: Profile,
    pub introduction: IntroductionConfig,
    pub conversions: ConversionConfig,
    pub arithmetic: ArithmeticConfig,
    pub inventory: InventoryConfig,
    pub payroll: PayrollConfig,
}

/// Personal details printed by the first two lessons.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    /// Height in feet.
    pub height: f64,
    pub profession: String,
    pub is_student: bool,
    pub grade: char,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jefry Astacio".to_string(),
            age: 26,
            height: 5.4,
            profession: "software development".to_string(),
            is_student: true,
            grade: 'A',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntroductionConfig {
    /// Operands of the simple sum.
    pub addends: [i32; 2],
}

impl Default for IntroductionConfig {
    fn default() -> Self {
        Self { addends: [10, 15] }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    /// Integer widened to floating point.
    pub integer: i32,
    /// Price truncated to an integer.
    pub price: f64,
    /// Text parsed as an integer. Not checked here: a bad value fails the run.
    pub numeric_text: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            integer: 10,
            price: 19.99,
            numeric_text: "123".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArithmeticConfig {
    pub integer: i32,
    pub float: f64,
    pub decimal: Decimal,
    pub multiplier: i64,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            integer: 10,
            float: 5.5,
            decimal: Decimal::new(35, 1),
            multiplier: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventoryConfig {
    pub start: i64,
    pub steps: Vec<Adjustment>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            start: 20,
            steps: Adjustment::default_sequence(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayrollConfig {
    pub hours_worked: i64,
    pub hourly_rate: i64,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            hours_worked: 45,
            hourly_rate: 20,
        }
    }
}

impl LessonConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: LessonConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.payroll.hours_worked < 0 {
            return Err(ConfigError::Validation(format!(
                "payroll.hours_worked must not be negative (got {})",
                self.payroll.hours_worked
            )));
        }
        if self.payroll.hourly_rate < 0 {
            return Err(ConfigError::Validation(format!(
                "payroll.hourly_rate must not be negative (got {})",
                self.payroll.hourly_rate
            )));
        }
        let floats = [
            ("profile.height", self.profile.height),
            ("conversions.price", self.conversions.price),
            ("arithmetic.float", self.arithmetic.float),
        ];
        for (key, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a finite number (got {value})"
                )));
            }
        }
        for step in &self.inventory.steps {
            if let Adjustment::Restock { count } | Adjustment::Dispatch { count } = step {
                if *count < 0 {
                    return Err(ConfigError::Validation(format!(
                        "inventory step counts must not be negative (got {count})"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_is_default() {
        let config = LessonConfig::from_toml("").unwrap();
        assert_eq!(config, LessonConfig::default());
        assert_eq!(config.arithmetic.decimal.to_string(), "3.5");
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
[profile]
name = "Ada"
grade = "B"

[inventory]
start = 3
steps = [{ kind = "restock", count = 2 }, { kind = "deliver" }]
        "#;

        let config = LessonConfig::from_toml(toml).expect("Failed to parse config");
        assert_eq!(config.profile.name, "Ada");
        assert_eq!(config.profile.grade, 'B');
        assert_eq!(config.profile.age, 26);
        assert_eq!(config.inventory.start, 3);
        assert_eq!(
            config.inventory.steps,
            vec![Adjustment::Restock { count: 2 }, Adjustment::Deliver]
        );
        assert_eq!(config.payroll, PayrollConfig::default());
    }

    #[test]
    fn test_decimal_from_string() {
        let config = LessonConfig::from_toml("[arithmetic]\ndecimal = \"0.10\"\n").unwrap();
        assert_eq!(config.arithmetic.decimal.to_string(), "0.10");
    }

    #[test]
    fn test_bad_decimal_is_parse_error() {
        let err = LessonConfig::from_toml("[arithmetic]\ndecimal = \"3.5m\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = LessonConfig::from_toml("[payroll]\novertime = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = LessonConfig::from_toml("[payroll]\nhourly_rate = -1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        for toml in [
            "[profile]\nheight = inf\n",
            "[conversions]\nprice = nan\n",
            "[arithmetic]\nfloat = -inf\n",
        ] {
            let err = LessonConfig::from_toml(toml).unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)), "{toml}: {err}");
        }
    }

    #[test]
    fn test_numeric_text_not_checked_at_load() {
        let config =
            LessonConfig::from_toml("[conversions]\nnumeric_text = \"abc\"\n").unwrap();
        assert_eq!(config.conversions.numeric_text, "abc");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[payroll]\nhours_worked = 38").unwrap();

        let config = LessonConfig::from_file(file.path()).unwrap();
        assert_eq!(config.payroll.hours_worked, 38);
        assert_eq!(config.payroll.hourly_rate, 20);
    }

    #[test]
    fn test_missing_file() {
        let err = LessonConfig::from_file(Path::new("/nonexistent/primer.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
