//! Canonical site paths from manifest paths.

/// Map a raw manifest path to the canonical site path.
///
/// Manifest paths carry the content tree's `NN-` ordering prefixes
/// (`/01-getting-started/04-example`); site URLs never show them. Each
/// segment loses a leading all-digit prefix up to the first dash, and the
/// result always starts with `/`.
pub fn generate(raw: &str) -> String {
    let mut canonical = String::new();
    for segment in raw.split('/').filter(|segment| !segment.is_empty()) {
        canonical.push('/');
        canonical.push_str(strip_order_prefix(segment));
    }
    if canonical.is_empty() {
        canonical.push('/');
    }
    canonical
}

fn strip_order_prefix(segment: &str) -> &str {
    match segment.split_once('-') {
        Some((head, rest)) if !head.is_empty() && head.chars().all(|c| c.is_ascii_digit()) => rest,
        _ => segment,
    }
}
