use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Deployment environment tag. Only these three literals are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::invalid(
                "ENVIRONMENT",
                format!("expected one of 'local', 'staging', 'production', got '{other}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;
    use crate::error::ConfigError;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
        assert_eq!(
            "staging".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn test_parse_rejects_anything_else() {
        for bad in ["prod", "LOCAL", "dev", ""] {
            let err = bad.parse::<Environment>().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidConfiguration { field: "ENVIRONMENT", .. }
            ));
        }
    }
}
