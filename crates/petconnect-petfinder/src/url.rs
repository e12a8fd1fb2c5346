//! URL construction helpers for the Petfinder API.
//!
//! Pure functions for building API URLs, ensuring consistent construction
//! across all calls. The listing URL carries both the limit and the page
//! number, so successive pages return successive windows of records.

use crate::models::Config;
use petconnect_core::PageQuery;
use url::Url;

/// Build the animal listing URL for one page.
pub fn build_animals_url(config: &Config, query: &PageQuery) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/animals"));
    url.set_query(Some(&format!("limit={}&page={}", query.limit, query.page)));

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_animals_url_default() {
        let config = Config::default();
        let url = build_animals_url(&config, &PageQuery::default());

        assert_eq!(
            url.as_str(),
            "https://api.petfinder.com/v2/animals?limit=10&page=1"
        );
    }

    #[test]
    fn test_build_animals_url_carries_page() {
        let config = Config::default();
        let url = build_animals_url(&config, &PageQuery::new(4, 25));

        assert!(url.as_str().contains("limit=25"));
        assert!(url.as_str().contains("page=4"));
    }

    #[test]
    fn test_build_animals_url_handles_trailing_slash() {
        let config = Config {
            base_url: Url::parse("https://upstream.test/v2/").unwrap(),
            ..Config::default()
        };
        let url = build_animals_url(&config, &PageQuery::default());

        assert!(url.as_str().starts_with("https://upstream.test/v2/animals"));
    }
}
