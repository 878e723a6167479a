/// Lowercases and joins alphanumeric runs with single dashes: "Bags & Carriers" -> "bags-carriers".
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn collapses_separators() {
        assert_eq!(slugify("Leather Products"), "leather-products");
        assert_eq!(slugify("Travel & Utility Leather"), "travel-utility-leather");
        assert_eq!(slugify("  --Gym   Accessories-- "), "gym-accessories");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("&&"), "");
    }
}
