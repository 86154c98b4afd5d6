use crate::config::types::{Config, InputConfig, OutputConfig, UserAgentConfig, WikipediaConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_wikipedia_config(&config.wikipedia)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_input_config(&config.input)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates Wikipedia API and pacing configuration
fn validate_wikipedia_config(config: &WikipediaConfig) -> Result<(), ConfigError> {
    validate_language(&config.language)?;

    if config.request_timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout must be >= 1 second, got {}",
            config.request_timeout
        )));
    }

    if config.max_retries < 1 {
        return Err(ConfigError::Validation(format!(
            "max_retries must be >= 1, got {}",
            config.max_retries
        )));
    }

    if let Some(base_url) = &config.base_url {
        let url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "base_url must use HTTP or HTTPS, got '{}'",
                url.scheme()
            )));
        }
    }

    Ok(())
}

/// Validates a language edition code (e.g., "en", "zh-yue")
fn validate_language(language: &str) -> Result<(), ConfigError> {
    if language.is_empty() {
        return Err(ConfigError::Validation(
            "language cannot be empty".to_string(),
        ));
    }

    if !language
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "language must contain only lowercase letters, digits, and hyphens, got '{}'",
            language
        )));
    }

    if language.starts_with('-') || language.ends_with('-') {
        return Err(ConfigError::Validation(format!(
            "language cannot start or end with '-', got '{}'",
            language
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate fetcher name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    // Validate contact URL
    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    // Validate contact email (basic validation)
    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates keyword input configuration
fn validate_input_config(config: &InputConfig) -> Result<(), ConfigError> {
    if config.keywords_path.is_empty() {
        return Err(ConfigError::Validation(
            "keywords_path cannot be empty".to_string(),
        ));
    }

    if config.keyword_column.is_empty() {
        return Err(ConfigError::Validation(
            "keyword_column cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.dataset_dir.is_empty() {
        return Err(ConfigError::Validation(
            "dataset_dir cannot be empty".to_string(),
        ));
    }

    if config.marker_path.is_empty() {
        return Err(ConfigError::Validation(
            "marker_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Basic email validation
fn validate_email(email: &str) -> Result<(), ConfigError> {
    if email.is_empty() {
        return Err(ConfigError::Validation(
            "contact_email cannot be empty".to_string(),
        ));
    }

    // Basic email format check: must contain @ and have text on both sides
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    // Domain part should contain at least one dot
    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid email domain: '{}'",
            email
        )));
    }

    Ok(())
}
