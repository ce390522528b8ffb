//! Email validation functions

/// Validates basic email format
///
/// Checks for:
/// - Exactly one '@' symbol with content on both sides
/// - At least one '.' in the domain part
/// - Domain not starting or ending with '.' or '-', no consecutive dots
/// - TLD of at least two characters
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    if domain.starts_with('.') || domain.ends_with('.')
        || domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    if domain.contains("..") {
        return false;
    }

    let valid_local_chars = |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
    };

    if !local.chars().all(valid_local_chars) {
        return false;
    }

    let valid_domain_chars = |c: char| c.is_ascii_alphanumeric() || c == '.' || c == '-';

    if !domain.chars().all(valid_domain_chars) {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((_, tld)) => tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}
