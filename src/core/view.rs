//! Pure derivations over the fetched comments.
//!
//! Nothing here keeps state: every function is recomputed from the raw items
//! and the current [`FilterCriteria`] whenever either changes.

use crate::domain::model::{Comment, FilterCriteria, ALL_DOMAINS, UNKNOWN_DOMAIN};
use std::collections::{BTreeMap, BTreeSet};

/// Lowercased part of `email` after the `@`, or `unknown` when there is none.
pub fn domain_of(email: &str) -> String {
    match email.split('@').nth(1) {
        Some(domain) if !domain.is_empty() => domain.to_lowercase(),
        _ => UNKNOWN_DOMAIN.to_string(),
    }
}

/// `all` followed by every distinct domain in `items`, sorted.
pub fn domains_of(items: &[Comment]) -> Vec<String> {
    let distinct: BTreeSet<String> = items.iter().map(|c| domain_of(&c.email)).collect();

    std::iter::once(ALL_DOMAINS.to_string())
        .chain(distinct)
        .collect()
}

/// True when the query selects a comment by id instead of by text.
pub fn is_id_query(query: &str) -> bool {
    !query.is_empty() && query.chars().all(|c| c.is_ascii_digit())
}

fn matches_domain(comment: &Comment, domain_filter: &str) -> bool {
    domain_filter == ALL_DOMAINS || domain_of(&comment.email) == domain_filter
}

fn matches_query(comment: &Comment, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    if is_id_query(query) {
        return comment.id.to_string() == query;
    }

    let needle = query.to_lowercase();
    [&comment.name, &comment.email, &comment.body]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Comments passing both the domain filter and the search query, in input order.
///
/// The query is used exactly as given. An all-digit query is an exact id
/// lookup and skips the text search entirely; anything else, whitespace
/// included, is a case-insensitive substring search.
///
/// ```
/// use comments_viewer::core::view::filter;
/// use comments_viewer::Comment;
///
/// let items = vec![Comment {
///     id: 1,
///     post_id: 1,
///     name: "A".to_string(),
///     email: "a@x.com".to_string(),
///     body: "hello".to_string(),
/// }];
///
/// assert_eq!(filter(&items, "1", "all").len(), 1);
/// assert!(filter(&items, "1 ", "all").is_empty());
/// assert!(filter(&items, " ", "all").is_empty());
/// assert_eq!(filter(&items, "", "all").len(), 1);
/// ```
pub fn filter<'a>(items: &'a [Comment], query: &str, domain_filter: &str) -> Vec<&'a Comment> {
    items
        .iter()
        .filter(|c| matches_domain(c, domain_filter))
        .filter(|c| matches_query(c, query))
        .collect()
}

pub fn filter_by<'a>(items: &'a [Comment], criteria: &FilterCriteria) -> Vec<&'a Comment> {
    filter(items, &criteria.query, &criteria.domain_filter)
}

/// Buckets comments by domain. Keys iterate alphabetically; each bucket keeps
/// the relative order the comments arrived in.
pub fn group_by_domain<'a, I>(items: I) -> BTreeMap<String, Vec<&'a Comment>>
where
    I: IntoIterator<Item = &'a Comment>,
{
    let mut groups: BTreeMap<String, Vec<&'a Comment>> = BTreeMap::new();
    for comment in items {
        groups
            .entry(domain_of(&comment.email))
            .or_default()
            .push(comment);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: u64, email: &str, name: &str, body: &str) -> Comment {
        Comment {
            id,
            post_id: 1,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        }
    }

    fn scenario() -> Vec<Comment> {
        vec![
            comment(1, "a@x.com", "A", "hello"),
            comment(2, "b@y.com", "B", "world"),
        ]
    }

    fn ids(items: &[&Comment]) -> Vec<u64> {
        items.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("Eliseo@Gardner.BIZ"), "gardner.biz");
        assert_eq!(domain_of("no-at-sign"), "unknown");
        assert_eq!(domain_of("trailing@"), "unknown");
        assert_eq!(domain_of("a@B@c"), "b");
        assert_eq!(domain_of(""), "unknown");
    }

    #[test]
    fn test_domains_of_sorted_distinct_with_all_first() {
        let items = vec![
            comment(1, "a@Zeta.io", "", ""),
            comment(2, "b@alpha.com", "", ""),
            comment(3, "c@zeta.io", "", ""),
            comment(4, "broken", "", ""),
        ];
        assert_eq!(
            domains_of(&items),
            vec!["all", "alpha.com", "unknown", "zeta.io"]
        );
        assert_eq!(domains_of(&[]), vec!["all"]);
    }

    #[test]
    fn test_scenario_filters() {
        let items = scenario();
        assert_eq!(ids(&filter(&items, "1", "all")), vec![1]);
        assert_eq!(ids(&filter(&items, "", "x.com")), vec![1]);
        assert_eq!(ids(&filter(&items, "world", "all")), vec![2]);
    }

    #[test]
    fn test_digit_query_is_exact_id_match() {
        let items = vec![
            comment(1, "a@x.com", "11", "1"),
            comment(11, "b@x.com", "B", "b"),
            comment(111, "c@x.com", "C", "c"),
        ];
        assert_eq!(ids(&filter(&items, "11", "all")), vec![11]);
        assert!(filter(&items, "2", "all").is_empty());
        assert!(filter(&items, "011", "all").is_empty());
    }

    #[test]
    fn test_text_query_is_case_insensitive_across_fields() {
        let items = scenario();
        assert_eq!(ids(&filter(&items, "HELLO", "all")), vec![1]);
        assert_eq!(ids(&filter(&items, "Y.COM", "all")), vec![2]);
        assert_eq!(ids(&filter(&items, "b", "all")), vec![2]);
        assert_eq!(ids(&filter(&items, "o", "all")), vec![1, 2]);
    }

    #[test]
    fn test_narrowing_query_never_grows_results() {
        let items = vec![
            comment(1, "a@x.com", "Alpha", "quick brown fox"),
            comment(2, "b@y.com", "Beta", "quick red fox"),
            comment(3, "c@z.com", "Gamma", "slow brown bear"),
        ];
        let wide = filter(&items, "brown", "all");
        let narrow = filter(&items, "brown f", "all");
        assert!(narrow.len() <= wide.len());
        assert!(narrow.iter().all(|c| wide.contains(c)));
    }

    #[test]
    fn test_query_and_domain_combine() {
        let items = scenario();
        assert!(filter(&items, "world", "x.com").is_empty());
        assert!(filter(&items, "2", "x.com").is_empty());
        assert_eq!(ids(&filter(&items, "world", "y.com")), vec![2]);
    }

    #[test]
    fn test_whitespace_in_query_is_searched_literally() {
        let items = vec![
            comment(1, "a@x.com", "A", "hello"),
            comment(2, "b@y.com", "B", "hello world"),
        ];
        assert_eq!(ids(&filter(&items, " ", "all")), vec![2]);
        assert!(filter(&items, "1 ", "all").is_empty());
        assert_eq!(ids(&filter(&items, "o w", "all")), vec![2]);
    }

    #[test]
    fn test_group_by_domain_partitions_items() {
        let items = vec![
            comment(1, "a@y.com", "", ""),
            comment(2, "b@x.com", "", ""),
            comment(3, "c@Y.com", "", ""),
            comment(4, "d@x.com", "", ""),
        ];
        let groups = group_by_domain(filter(&items, "", "all"));

        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["x.com", "y.com"]);
        assert_eq!(ids(&groups["x.com"]), vec![2, 4]);
        assert_eq!(ids(&groups["y.com"]), vec![1, 3]);

        let mut all: Vec<u64> = groups.values().flat_map(|g| ids(g)).collect();
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_by_uses_criteria() {
        let items = scenario();
        let criteria = FilterCriteria::new("", "y.com");
        assert_eq!(ids(&filter_by(&items, &criteria)), vec![2]);
    }
}
