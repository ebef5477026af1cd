use super::*;
use crate::allowed_headers::AllowedHeaders;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowedOrigins;

fn value_of<'a>(headers: &'a [Header], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|header| header.name.eq_ignore_ascii_case(name))
        .map(|header| header.value.as_str())
}

mod origin_headers {
    use super::*;

    #[test]
    fn when_wildcard_should_emit_star_and_vary() {
        // Arrange
        let policy = Policy::default();
        let composer = HeaderComposer::new(&policy);

        // Act
        let headers = composer
            .origin_headers(&OriginResolution::Wildcard)
            .into_headers();

        // Assert
        assert_eq!(value_of(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
        assert_eq!(value_of(&headers, header::VARY), Some("Origin"));
    }

    #[test]
    fn when_literal_should_echo_request_origin() {
        // Arrange
        let policy = Policy::default();
        let composer = HeaderComposer::new(&policy);

        // Act
        let headers = composer
            .origin_headers(&OriginResolution::Literal("https://client.com".to_string()))
            .into_headers();

        // Assert
        assert_eq!(
            value_of(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://client.com")
        );
        assert_eq!(value_of(&headers, header::VARY), Some("Origin"));
    }

    #[test]
    fn when_mismatch_should_emit_nothing() {
        // Arrange
        let policy = Policy::default();
        let composer = HeaderComposer::new(&policy);

        // Act
        let headers = composer
            .origin_headers(&OriginResolution::Mismatch)
            .into_headers();

        // Assert
        assert!(headers.is_empty());
    }
}

mod denial_headers {
    use super::*;

    #[test]
    fn when_policy_origin_dependent_should_emit_vary_only() {
        // Arrange
        let policy = Policy {
            allowed_origins: AllowedOrigins::list(["https://client.com"]),
            ..Policy::default()
        };
        let composer = HeaderComposer::new(&policy);

        // Act
        let headers = composer.denial_headers().into_headers();

        // Assert
        assert_eq!(headers.len(), 1);
        assert_eq!(value_of(&headers, header::VARY), Some("Origin"));
    }

    #[test]
    fn when_policy_wildcard_should_emit_nothing() {
        // Arrange
        let policy = Policy::default();
        let composer = HeaderComposer::new(&policy);

        // Act
        let headers = composer.denial_headers().into_headers();

        // Assert
        assert!(headers.is_empty());
    }
}

mod credentials_header {
    use super::*;

    #[test]
    fn when_credentials_enabled_should_emit_true() {
        // Arrange
        let policy = Policy {
            allowed_origins: AllowedOrigins::list(["https://client.com"]),
            allow_credentials: true,
            ..Policy::default()
        };
        let composer = HeaderComposer::new(&policy);

        // Act
        let headers = composer.credentials_header().into_headers();

        // Assert
        assert_eq!(
            value_of(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true")
        );
    }

    #[test]
    fn when_credentials_disabled_should_emit_nothing() {
        // Arrange
        let policy = Policy::default();
        let composer = HeaderComposer::new(&policy);

        // Act & Assert
        assert!(composer.credentials_header().into_headers().is_empty());
    }
}

mod requested_headers_echo {
    use super::*;

    #[test]
    fn should_echo_requested_tokens_not_allow_list() {
        // Arrange
        let policy = Policy {
            allowed_headers: AllowedHeaders::list(["Content-Type", "X-Custom", "X-Other"]),
            ..Policy::default()
        };
        let composer = HeaderComposer::new(&policy);
        let tokens = vec!["Content-Type".to_string()];

        // Act
        let headers = composer.requested_headers_echo(&tokens).into_headers();

        // Assert
        assert_eq!(
            value_of(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
            Some("Content-Type")
        );
    }

    #[test]
    fn should_vary_on_request_headers_even_when_no_tokens() {
        // Arrange
        let policy = Policy::default();
        let composer = HeaderComposer::new(&policy);

        // Act
        let headers = composer.requested_headers_echo(&[]).into_headers();

        // Assert
        assert_eq!(
            value_of(&headers, header::VARY),
            Some(header::ACCESS_CONTROL_REQUEST_HEADERS)
        );
        assert_eq!(value_of(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS), None);
    }
}

mod exposed_and_max_age {
    use super::*;

    #[test]
    fn should_join_exposed_headers_when_configured() {
        // Arrange
        let policy = Policy {
            exposed_headers: ExposedHeaders::list(["X-Request-Id", "X-Trace"]),
            ..Policy::default()
        };
        let composer = HeaderComposer::new(&policy);

        // Act
        let headers = composer.exposed_headers().into_headers();

        // Assert
        assert_eq!(
            value_of(&headers, header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some("X-Request-Id,X-Trace")
        );
    }

    #[test]
    fn should_emit_max_age_when_configured() {
        // Arrange
        let policy = Policy {
            max_age_seconds: Some(600),
            ..Policy::default()
        };
        let composer = HeaderComposer::new(&policy);

        // Act
        let headers = composer.max_age_header().into_headers();

        // Assert
        assert_eq!(value_of(&headers, header::ACCESS_CONTROL_MAX_AGE), Some("600"));
    }

    #[test]
    fn should_omit_max_age_when_unset() {
        // Arrange
        let policy = Policy::default();
        let composer = HeaderComposer::new(&policy);

        // Act & Assert
        assert!(composer.max_age_header().into_headers().is_empty());
    }
}

mod parse_token_list {
    use super::*;

    #[test]
    fn should_return_empty_list_when_value_blank() {
        assert_eq!(parse_token_list("   "), Some(Vec::new()));
        assert_eq!(parse_token_list(""), Some(Vec::new()));
    }

    #[test]
    fn should_trim_tokens_and_keep_caller_spelling() {
        let tokens = parse_token_list(" Content-Type , X-Custom ").expect("list parses");

        assert_eq!(tokens, vec!["Content-Type".to_string(), "X-Custom".to_string()]);
    }

    #[test]
    fn should_reject_empty_tokens_between_commas() {
        assert_eq!(parse_token_list("X-A,,X-B"), None);
        assert_eq!(parse_token_list("X-A,"), None);
    }

    #[test]
    fn should_reject_non_token_characters() {
        assert_eq!(parse_token_list("X-A, bad header"), None);
        assert_eq!(parse_token_list("X-A, x;y"), None);
    }
}
