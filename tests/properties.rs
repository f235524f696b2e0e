//! Property tests for classification and redirect construction.

use proptest::prelude::*;
use trailing_slash::{build_redirect, needs_trailing_slash, ExceptionPolicy};

fn policy(empty: bool, extension: bool, api: bool) -> ExceptionPolicy {
    ExceptionPolicy::builder()
        .except_empty(empty)
        .except_with_extension(extension)
        .except_from_api(api)
        .build()
}

/// Slash-separated segments of lowercase letters, never starting with `api`.
fn plain_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[b-z][a-z]{0,7}", 1..5).prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #[test]
    fn slashed_paths_never_redirect(
        path in "(/[a-zA-Z0-9._-]{0,8}){0,4}/",
        empty in any::<bool>(),
        extension in any::<bool>(),
        api in any::<bool>(),
    ) {
        prop_assert!(!needs_trailing_slash(&path, &policy(empty, extension, api)));
    }

    #[test]
    fn empty_path_follows_flag(extension in any::<bool>(), api in any::<bool>()) {
        prop_assert!(!needs_trailing_slash("", &policy(true, extension, api)));
        prop_assert!(needs_trailing_slash("", &policy(false, extension, api)));
    }

    #[test]
    fn extension_follows_flag(base in plain_path(), ext in "[a-z]{1,4}") {
        let path = format!("{base}.{ext}");
        prop_assert!(!needs_trailing_slash(&path, &policy(true, true, true)));
        prop_assert!(needs_trailing_slash(&path, &policy(true, false, true)));
    }

    #[test]
    fn api_paths_follow_flag(rest in plain_path()) {
        let api_path = format!("/api{rest}");
        prop_assert!(!needs_trailing_slash(&api_path, &policy(true, true, true)));
        prop_assert!(needs_trailing_slash(&api_path, &policy(true, true, false)));
        prop_assert!(needs_trailing_slash(&rest, &policy(true, true, true)));
    }

    #[test]
    fn custom_exception_wins(path in plain_path()) {
        let exempt = path.clone();
        let policy = ExceptionPolicy::builder()
            .except_empty(false)
            .except_with_extension(false)
            .except_from_api(false)
            .except(move |url: &str| url == exempt)
            .build();
        prop_assert!(!needs_trailing_slash(&path, &policy));
    }

    #[test]
    fn redirect_location_is_normalized(path in "/{0,3}[a-z]{1,6}(/[a-z]{1,6}){0,3}/{0,3}", query in "(\\?[a-z]=[0-9])?") {
        let redirect = build_redirect(&path, &query, "GET");
        let location = redirect.location();

        prop_assert!(location.starts_with('/') && !location.starts_with("//"));
        let normalized = location.strip_suffix(query.as_str()).unwrap();
        prop_assert!(normalized.ends_with('/') && !normalized.ends_with("//"));

        let again = build_redirect(normalized, "", "GET");
        prop_assert_eq!(again.location(), normalized);
    }

    #[test]
    fn status_depends_only_on_method(path in plain_path(), method in "(GET|get|Get|POST|PUT|DELETE|PATCH)") {
        let status = build_redirect(&path, "", &method).status().as_u16();
        let expected = if method.eq_ignore_ascii_case("GET") { 301 } else { 307 };
        prop_assert_eq!(status, expected);
    }
}
