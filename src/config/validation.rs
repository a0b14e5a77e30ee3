use crate::config::types::{Config, CrawlerConfig, PageEntry};
use crate::ConfigError;
use std::collections::HashSet;

/// Largest accepted `max-depth`
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_pages(&config.pages)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.seed.trim().is_empty() {
        return Err(ConfigError::Validation("seed cannot be empty".to_string()));
    }

    if config.max_depth > MAX_DEPTH_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max_depth must be <= {}, got {}",
            MAX_DEPTH_LIMIT, config.max_depth
        )));
    }

    Ok(())
}

/// Validates the canned site map
fn validate_pages(pages: &[PageEntry]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for page in pages {
        if page.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "page url cannot be empty".to_string(),
            ));
        }

        if !seen.insert(page.url.as_str()) {
            return Err(ConfigError::Validation(format!(
                "page '{}' is defined more than once",
                page.url
            )));
        }

        if page.links.iter().any(|link| link.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "page '{}' has an empty link",
                page.url
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, links: &[&str]) -> PageEntry {
        PageEntry {
            url: url.to_string(),
            body: "body".to_string(),
            links: links.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_sample_config_is_valid() {
        assert!(validate(&Config::sample()).is_ok());
    }

    #[test]
    fn test_empty_seed_rejected() {
        let mut config = Config::sample();
        config.crawler.seed = "   ".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_depth_zero_accepted() {
        let mut config = Config::sample();
        config.crawler.max_depth = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_depth_over_limit_rejected() {
        let mut config = Config::sample();
        config.crawler.max_depth = MAX_DEPTH_LIMIT + 1;
        assert!(validate(&config).is_err());

        config.crawler.max_depth = MAX_DEPTH_LIMIT;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_duplicate_page_rejected() {
        let pages = vec![page("A", &["B"]), page("A", &[])];
        let err = validate_pages(&pages).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_empty_link_rejected() {
        let pages = vec![page("A", &["B", ""])];
        assert!(validate_pages(&pages).is_err());
    }

    #[test]
    fn test_links_to_undefined_pages_allowed() {
        // Dangling links are how not-found branches are expressed
        let pages = vec![page("A", &["missing"])];
        assert!(validate_pages(&pages).is_ok());
    }
}
