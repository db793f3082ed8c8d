use crate::openapi::ApiDescription;

/// Select routes eligible for widget generation: paths under the API
/// prefix that declare a `get` operation, in source order. That order
/// carries through to widget insertion order, so no sorting here.
pub fn select_routes<'a>(api: &'a ApiDescription, prefix: &str) -> Vec<&'a str> {
    api.paths
        .iter()
        .filter(|(path, methods)| path.starts_with(prefix) && methods.contains_key("get"))
        .map(|(path, _)| path.as_str())
        .collect()
}
