use crate::{ClubSummary, PlayerSummary, Video};

/// Anything an admin list can be narrowed by name.
pub trait Searchable {
    fn search_name(&self) -> &str;
}

impl Searchable for PlayerSummary {
    fn search_name(&self) -> &str {
        &self.name
    }
}

impl Searchable for ClubSummary {
    fn search_name(&self) -> &str {
        &self.name
    }
}

impl Searchable for Video {
    fn search_name(&self) -> &str {
        &self.title
    }
}

/// Keep items whose name contains `query` exactly as typed
/// (case-sensitive, whitespace included). An empty query keeps everything.
pub fn filter_by_name<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| query.is_empty() || item.search_name().contains(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{admin_clubs, admin_players};

    #[test]
    fn empty_query_keeps_all() {
        let players = admin_players();
        assert_eq!(filter_by_name(&players, "").len(), players.len());
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let players = admin_players();
        assert!(filter_by_name(&players, "Doe ").is_empty());
        assert!(filter_by_name(&players, "   ").is_empty());
        assert_eq!(filter_by_name(&players, "John Doe").len(), 1);
    }

    #[test]
    fn substring_match_on_name() {
        let players = admin_players();
        let hits = filter_by_name(&players, "Maria");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].email, "maria@example.com");
    }

    #[test]
    fn match_is_case_sensitive() {
        let clubs = admin_clubs();
        assert_eq!(filter_by_name(&clubs, "PadelMax").len(), 1);
        assert!(filter_by_name(&clubs, "padelmax").is_empty());
    }
}
