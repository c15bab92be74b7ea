use super::*;

/// Tests a freshly issued token passes the guard.
///
/// Expected: Ok(Claims) with the admin subject
#[test]
fn grants_access_with_valid_token() {
    let tokens = tokens();
    let issued = tokens.issue(Utc::now()).unwrap();
    let headers = headers_with(&format!("Bearer {}", issued.token));

    let claims = AuthGuard::new(&tokens, &headers).require_admin().unwrap();

    assert_eq!(claims.sub, ADMIN_SUBJECT);
}

/// Tests a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn denies_missing_header() {
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require_admin();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests non-bearer schemes and empty tokens are rejected as malformed.
///
/// Expected: Err(AuthError::MalformedToken)
#[test]
fn denies_non_bearer_scheme() {
    let tokens = tokens();

    for value in ["Basic YWRtaW46cGFzcw==", "Bearer ", "Bearer not-a-jwt"] {
        let headers = headers_with(value);
        let result = AuthGuard::new(&tokens, &headers).require_admin();

        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::MalformedToken(_)))),
            "{:?} should be malformed",
            value
        );
    }
}

/// Tests a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidSignature)
#[test]
fn denies_token_from_other_secret() {
    let tokens = tokens();
    let other = AuthTokenService::new("other-secret", "correct horse").unwrap();
    let issued = other.issue(Utc::now()).unwrap();
    let headers = headers_with(&format!("Bearer {}", issued.token));

    let result = AuthGuard::new(&tokens, &headers).require_admin();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidSignature))
    ));
}

/// Tests a token issued more than eight hours ago is rejected.
///
/// Expected: Err(AuthError::TokenExpired)
#[test]
fn denies_expired_token() {
    let tokens = tokens();
    let issued = tokens.issue(Utc::now() - Duration::hours(9)).unwrap();
    let headers = headers_with(&format!("Bearer {}", issued.token));

    let result = AuthGuard::new(&tokens, &headers).require_admin();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenExpired(_)))
    ));
}
