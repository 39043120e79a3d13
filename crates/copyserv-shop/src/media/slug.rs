//! Slug derivation from display names.

/// Derive a file-name slug from a display name.
///
/// Lowercases, turns each whitespace run into a single `-`, then drops every
/// character outside `[a-z0-9-]`. Accented letters are dropped, not folded:
/// `"Rodillo de Presión"` becomes `"rodillo-de-presin"`.
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_whitespace = false;

    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Ricoh MPC 2004"), "ricoh-mpc-2004");
        assert_eq!(slugify("Toner Canon"), "toner-canon");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(slugify("Ricoh  MP\t 2555"), "ricoh-mp-2555");
        assert_eq!(slugify(" Revelador "), "-revelador-");
    }

    #[test]
    fn test_strips_non_slug_characters() {
        assert_eq!(slugify("Rodillo de Presión"), "rodillo-de-presin");
        assert_eq!(slugify("Unidad (B/N) #2"), "unidad-bn-2");
    }

    #[test]
    fn test_stripping_happens_after_hyphenation() {
        // The symbol between the spaces disappears, leaving two hyphens.
        assert_eq!(slugify("Canon & Ricoh"), "canon--ricoh");
    }

    #[test]
    fn test_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("¿?"), "");
    }
}
