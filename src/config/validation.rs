use crate::config::types::{Config, OutputConfig, ScraperConfig, SelectorConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_selector_config(&config.selectors)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates fetching and pagination settings
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url '{}': {}", config.base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            config.base_url
        )));
    }

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "request_timeout_secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every selector compiles
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    for (name, selector) in [
        ("quote", &config.quote),
        ("text", &config.text),
        ("author", &config.author),
        ("tag", &config.tag),
    ] {
        validate_selector(name, selector)?;
    }
    Ok(())
}

fn validate_selector(name: &str, selector: &str) -> Result<(), ConfigError> {
    if selector.trim().is_empty() {
        return Err(ConfigError::InvalidSelector(format!(
            "{} selector cannot be empty",
            name
        )));
    }

    Selector::parse(selector).map_err(|e| {
        ConfigError::InvalidSelector(format!("{} selector '{}': {}", name, selector, e))
    })?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    if matches!(&config.summary_path, Some(path) if path.is_empty()) {
        return Err(ConfigError::Validation(
            "summary_path cannot be empty when set".to_string(),
        ));
    }

    if config.top_n < 1 {
        return Err(ConfigError::Validation(format!(
            "top_n must be >= 1, got {}",
            config.top_n
        )));
    }

    Ok(())
}
