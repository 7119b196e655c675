use url::form_urlencoded;

/// Build the OAuth2 authorization-code URL.
///
/// The caller redirects a user-agent here and exchanges the returned code
/// for an access token; the library never fetches this URL itself. The
/// `state` parameter is always sent empty.
pub fn authorize_url(base_url: &str, client_id: &str, redirect_uri: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("state", "")
        .finish();

    format!("{}/oauth/authorize?{}", base_url, query)
}
