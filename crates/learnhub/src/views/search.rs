//! Case-insensitive search and categorical filtering over in-memory lists.

/// Designates which of an entity's fields participate in free-text search and which
/// are addressable by categorical filters. Absent optional fields simply contribute
/// nothing; lookups never panic.
pub trait SearchFields {
    /// The text fields a search term is matched against; which ones is
    /// resource-specific (title, name, description, category).
    fn search_text(&self) -> Vec<&str>;

    /// The entity's value for a categorical filter key, if the entity has that field.
    fn filter_value(&self, key: &str) -> Option<&str>;
}

/// Filters `items` down to those matching the search term and every active
/// categorical filter.
///
/// Predicates combine with AND:
/// - an empty search term matches everything; otherwise a case-insensitive substring
///   match against any designated text field suffices;
/// - a filter whose value is empty or `"all"` matches everything; otherwise the
///   entity's field must equal the value case-insensitively, and an entity lacking
///   the field does not match.
pub fn filter_items<'a, T: SearchFields>(
    items: &'a [T],
    search_term: &str,
    filters: &[(&str, &str)],
) -> Vec<&'a T> {
    let term = search_term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| matches_search(*item, &term) && matches_filters(*item, filters))
        .collect()
}

fn matches_search<T: SearchFields>(item: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    item.search_text()
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

fn matches_filters<T: SearchFields>(item: &T, filters: &[(&str, &str)]) -> bool {
    filters.iter().all(|(key, wanted)| {
        if wanted.is_empty() || wanted.eq_ignore_ascii_case("all") {
            return true;
        }
        match item.filter_value(key) {
            Some(value) => value.eq_ignore_ascii_case(wanted),
            None => false,
        }
    })
}
