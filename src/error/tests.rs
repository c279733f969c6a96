//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod api_error_tests {
    use super::*;

    #[test]
    fn test_api_error_carries_description() {
        let error = ApiError::new("Error getting mock JSON");
        assert_eq!(error.description(), "Error getting mock JSON");
        assert_eq!(error.to_string(), "Error getting mock JSON");
    }

    #[test]
    fn test_json_error_folds_into_api_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let api_error = ApiError::from(json_error);

        assert!(api_error.description().starts_with("Error decoding data: "));
    }

    #[tokio::test]
    async fn test_transport_error_folds_into_api_error() {
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let api_error = ApiError::from(result.unwrap_err());

        assert!(api_error.description().starts_with("Error decoding data: "));
    }
}

#[cfg(test)]
mod hoops_error_tests {
    use super::*;

    #[test]
    fn test_api_error_conversion() {
        let error = HoopsError::from(ApiError::new("boom"));

        match error {
            HoopsError::Api(inner) => assert_eq!(inner.description(), "boom"),
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_url_error_conversion() {
        let parse_error = url::Url::parse("not a url").unwrap_err();
        let error = HoopsError::from(parse_error);

        match error {
            HoopsError::InvalidUrl(_) => (),
            _ => panic!("Expected InvalidUrl error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u64>().unwrap_err();
        let error = HoopsError::from(parse_error);

        match error {
            HoopsError::InvalidPlayerId(_) => (),
            _ => panic!("Expected InvalidPlayerId error variant"),
        }
    }

    #[test]
    fn test_invalid_search_error() {
        let error = HoopsError::InvalidSearch {
            message: "Search must contain at least 2 characters".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid search"));
        assert!(error_string.contains("at least 2 characters"));
    }

    #[test]
    fn test_fetch_failed_error() {
        let error = HoopsError::FetchFailed {
            resource: "season averages",
        };
        assert_eq!(
            error.to_string(),
            "Fetching season averages failed (run with --verbose for details)"
        );
    }
}
