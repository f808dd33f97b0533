/// Builds the path of an object member, e.g. `response.data` + `entry_date`.
///
/// Top-level members of an unprefixed payload are addressed by their bare key.
pub fn member(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Builds the path of an array element, e.g. `response.data` + `0` -> `response.data[0]`.
pub fn element(prefix: &str, index: usize) -> String {
    format!("{}[{}]", prefix, index)
}
