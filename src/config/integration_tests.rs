// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use crate::config::{create_default_config, is_valid, load_and_validate_config, load_config};
    use crate::errors::{ConfigError, ValidationError};

    /// The shipped default config file matches the built-in default
    #[test]
    fn test_default_yaml_matches_builtin() {
        let config = load_and_validate_config("configs/default.yaml").unwrap();

        assert_eq!(config, create_default_config());
    }

    /// Omitted optional fields take their defaults
    #[test]
    fn test_minimal_yaml_loading() {
        let config = load_and_validate_config("configs/nightly-export.yaml").unwrap();

        assert_eq!(config.name, "nightly-export");
        assert_eq!(config.version, "2.3.1");
        assert!(!config.debug);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.timeout, 30.0);
    }

    /// An invalid file still parses; validation reports every violation
    #[test]
    fn test_invalid_yaml_loading() {
        let config = load_config("configs/invalid.yaml").unwrap();
        assert!(!is_valid(&config));

        match load_and_validate_config("configs/invalid.yaml") {
            Err(ConfigError::Invalid(errors)) => {
                assert_eq!(errors.len(), 3);
                assert_eq!(errors[0], ValidationError::EmptyName);
                assert_eq!(errors[1], ValidationError::NegativeMaxRetries { value: -2 });
            }
            other => panic!("Expected Invalid error, got {:?}", other),
        }
    }
}
