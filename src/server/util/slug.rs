/// Derives a URL slug from free text.
///
/// ASCII letters and digits are lower-cased and kept; every other run of characters
/// becomes a single hyphen. Leading and trailing hyphens are dropped, so
/// `"  Blue Sapphire -- 2.1ct! "` becomes `"blue-sapphire-2-1ct"`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_separators() {
        assert_eq!(slugify("  Blue Sapphire -- 2.1ct! "), "blue-sapphire-2-1ct");
    }

    #[test]
    fn drops_non_ascii() {
        assert_eq!(slugify("Émeraude Ring"), "meraude-ring");
    }

    #[test]
    fn empty_when_no_alphanumerics() {
        assert_eq!(slugify("!!! ---"), "");
    }
}
