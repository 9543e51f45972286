/// Prefixes `count` to the singular word when it is exactly one, otherwise to
/// the plural word.
pub fn pluralize(count: i64, singular: &str, plural: &str) -> String {
    let word = if count == 1 { singular } else { plural };
    format!("{} {}", count, word)
}
