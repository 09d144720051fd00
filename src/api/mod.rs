// Export submodules
pub mod cuponera;
pub mod cuponera_user;
pub mod discount;
pub mod folder;
pub mod menu;
pub mod redeem;
pub mod site;

/// Common trait for API endpoints.
///
/// This trait is implemented by all API endpoints and provides a method to get the client associated with the endpoint.
#[allow(dead_code)]
pub(crate) trait ApiEndpoint {
    /// Get the client associated with this endpoint.
    fn client(&self) -> &crate::DiscountsClient;
}

/// Serializes query parameters into a `?key=value&...` string, or an empty
/// string when there are none.
pub(crate) fn query_string(params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    format!("?{}", serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::query_string;

    #[test]
    fn no_parameters_means_no_question_mark() {
        assert_eq!(query_string(&[]), "");
    }

    #[test]
    fn parameters_are_form_encoded() {
        let qs = query_string(&[
            ("code", "ABC123".to_string()),
            ("q", "soda water".to_string()),
        ]);
        assert_eq!(qs, "?code=ABC123&q=soda+water");
    }
}
