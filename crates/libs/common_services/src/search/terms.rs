use common_types::Photo;

/// Splits a raw query into search terms on whitespace, dropping empty pieces.
#[must_use]
pub fn split_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_owned).collect()
}

/// Whether `term` occurs, ignoring case, in the title, description, tags,
/// location, camera model or capture time of the photo.
#[must_use]
pub fn photo_matches_term(photo: &Photo, term: &str) -> bool {
    let needle = term.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&needle);

    contains(&photo.title)
        || photo.description.as_deref().is_some_and(contains)
        || contains(&photo.tags_text())
        || photo.location.as_deref().is_some_and(contains)
        || photo.model.as_deref().is_some_and(contains)
        || photo.taken_at_text().as_deref().is_some_and(contains)
}

/// Every term has to match somewhere, independently of the others.
#[must_use]
pub fn photo_matches_all_terms<S: AsRef<str>>(photo: &Photo, terms: &[S]) -> bool {
    terms
        .iter()
        .all(|term| photo_matches_term(photo, term.as_ref()))
}
