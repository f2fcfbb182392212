/// Name used when nothing usable is left of an uploaded file name.
const FALLBACK_FILENAME: &str = "upload.csv";

/// Reduces a client-supplied file name to a safe, ASCII-only name.
///
/// Only the last path component (split on `/` and `\`) is kept. Whitespace becomes `-`,
/// characters other than ASCII letters, digits, `.`, `-` and `_` are dropped and leading
/// dots are stripped, so the result can never name a hidden file or leave its directory.
pub fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('-'),
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') => Some(c),
            _ => None,
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_kept() {
        assert_eq!(sanitize_filename("products.csv"), "products.csv");
        assert_eq!(sanitize_filename("stock_2024-01.csv"), "stock_2024-01.csv");
    }

    #[test]
    fn directories_are_stripped() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\stock.csv"), "stock.csv");
    }

    #[test]
    fn whitespace_becomes_dashes() {
        assert_eq!(sanitize_filename("spring stock.csv"), "spring-stock.csv");
    }

    #[test]
    fn non_ascii_is_dropped() {
        assert_eq!(sanitize_filename("Prodüits été.csv"), "Prodits-t.csv");
    }

    #[test]
    fn leading_dots_are_stripped() {
        assert_eq!(sanitize_filename(".hidden.csv"), "hidden.csv");
        assert_eq!(sanitize_filename(".."), "upload.csv");
    }

    #[test]
    fn empty_results_fall_back() {
        assert_eq!(sanitize_filename(""), "upload.csv");
        assert_eq!(sanitize_filename("dir/"), "upload.csv");
        assert_eq!(sanitize_filename("€€€"), "upload.csv");
    }
}
