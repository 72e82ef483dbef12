//! Read-side views over the store's collections.
//!
//! Every function is pure and recomputes from the slices it is given.
//! Soft-deleted posts never appear in any result.

use std::collections::HashMap;

use crate::domain::{Category, CategoryWithCount, Post};

/// Default length of the recent-posts list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Default length of the popular-tags list.
pub const DEFAULT_POPULAR_TAG_LIMIT: usize = 10;

/// All active posts, in store order.
pub fn active_posts(posts: &[Post]) -> Vec<&Post> {
    posts.iter().filter(|p| p.is_active()).collect()
}

/// The active post with `id`, if any.
pub fn post_by_id<'a>(posts: &'a [Post], id: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.id == id && p.is_active())
}

/// Active posts filed under `category_id`, in store order.
pub fn posts_by_category<'a>(posts: &'a [Post], category_id: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| p.is_active() && p.category.as_deref() == Some(category_id))
        .collect()
}

/// Active posts carrying `tag` (exact, case-sensitive), in store order.
pub fn posts_by_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| p.is_active() && p.tags.iter().any(|t| t == tag))
        .collect()
}

/// Newest active posts by `created_at`; equal timestamps keep store order.
pub fn recent_posts(posts: &[Post], limit: usize) -> Vec<&Post> {
    let mut recent = active_posts(posts);
    // sort_by is stable
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(limit);
    recent
}

/// Most used tags across active posts.
///
/// Tags with the same count keep the order in which they were first seen.
pub fn popular_tags(posts: &[Post], limit: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tag in posts
        .iter()
        .filter(|p| p.is_active())
        .flat_map(|p| p.tags.iter())
    {
        let i = *index.entry(tag.as_str()).or_insert_with(|| {
            counts.push((tag.as_str(), 0));
            counts.len() - 1
        });
        counts[i].1 += 1;
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(tag, _)| tag.to_string())
        .collect()
}

/// Every category with the number of active posts referencing it.
pub fn categories_with_count(categories: &[Category], posts: &[Post]) -> Vec<CategoryWithCount> {
    let active = active_posts(posts);
    categories
        .iter()
        .map(|category| CategoryWithCount {
            category: category.clone(),
            post_count: active
                .iter()
                .filter(|p| p.category.as_deref() == Some(category.id.as_str()))
                .count(),
        })
        .collect()
}

/// Display name for a category id, falling back to the id itself.
pub fn category_name<'a>(categories: &'a [Category], id: &'a str) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(id)
}

/// Case-insensitive substring search over title, content, summary and tags.
///
/// A blank query matches nothing.
pub fn search<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|p| p.is_active() && p.searchable_text().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn post(id: &str, tags: &[&str]) -> Post {
        let mut post = Post::new(format!("Post {id}"), "body".to_string(), "Ann".to_string());
        post.id = id.to_string();
        post.tags = tags.iter().map(|t| t.to_string()).collect();
        post
    }

    fn ids<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_active_posts_skip_deleted() {
        let mut posts = vec![post("a", &[]), post("b", &[]), post("c", &[])];
        posts[1].is_deleted = true;
        assert_eq!(ids(&active_posts(&posts)), vec!["a", "c"]);
    }

    #[test]
    fn test_post_by_id_hides_deleted() {
        let mut posts = vec![post("a", &[])];
        assert!(post_by_id(&posts, "a").is_some());
        posts[0].is_deleted = true;
        assert!(post_by_id(&posts, "a").is_none());
        assert!(post_by_id(&posts, "missing").is_none());
    }

    #[test]
    fn test_posts_by_category() {
        let mut posts = vec![post("a", &[]), post("b", &[]), post("c", &[])];
        posts[0].category = Some("dev".to_string());
        posts[2].category = Some("dev".to_string());
        posts[2].is_deleted = true;
        assert_eq!(ids(&posts_by_category(&posts, "dev")), vec!["a"]);
        assert!(posts_by_category(&posts, "design").is_empty());
    }

    #[test]
    fn test_posts_by_tag_is_exact() {
        let posts = vec![post("a", &["Rust"]), post("b", &["rust"])];
        assert_eq!(ids(&posts_by_tag(&posts, "rust")), vec!["b"]);
    }

    #[test]
    fn test_recent_posts_newest_first() {
        let now = Utc::now();
        let mut posts = vec![post("t1", &[]), post("t3", &[]), post("t2", &[])];
        posts[0].created_at = now - Duration::days(3);
        posts[1].created_at = now - Duration::days(1);
        posts[2].created_at = now - Duration::days(2);

        assert_eq!(ids(&recent_posts(&posts, 2)), vec!["t3", "t2"]);
    }

    #[test]
    fn test_recent_posts_ties_keep_store_order() {
        let now = Utc::now();
        let mut posts = vec![post("x", &[]), post("y", &[]), post("z", &[])];
        for p in &mut posts {
            p.created_at = now;
        }
        assert_eq!(ids(&recent_posts(&posts, 10)), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_popular_tags_counts() {
        let posts = vec![post("1", &["a", "b"]), post("2", &["a"]), post("3", &["b", "b"])];
        assert_eq!(popular_tags(&posts, 2), vec!["b", "a"]);
    }

    #[test]
    fn test_popular_tags_ties_keep_first_seen() {
        let mut posts = vec![post("1", &["z", "y"]), post("2", &["x", "y"])];
        assert_eq!(popular_tags(&posts, 10), vec!["y", "z", "x"]);

        posts[1].is_deleted = true;
        assert_eq!(popular_tags(&posts, 1), vec!["z"]);
    }

    #[test]
    fn test_categories_with_count() {
        let categories = vec![Category::new("dev", "Development", "dev")];
        let mut posts = vec![post("a", &[])];
        assert_eq!(categories_with_count(&categories, &posts)[0].post_count, 0);

        posts[0].category = Some("dev".to_string());
        assert_eq!(categories_with_count(&categories, &posts)[0].post_count, 1);

        posts[0].is_deleted = true;
        assert_eq!(categories_with_count(&categories, &posts)[0].post_count, 0);
    }

    #[test]
    fn test_category_name_falls_back_to_id() {
        let categories = vec![Category::new("dev", "Development", "dev")];
        assert_eq!(category_name(&categories, "dev"), "Development");
        assert_eq!(category_name(&categories, "misc"), "misc");
    }

    #[test]
    fn test_search_blank_query_is_empty() {
        let posts = vec![post("a", &[])];
        assert!(search(&posts, "").is_empty());
        assert!(search(&posts, "   ").is_empty());
    }

    #[test]
    fn test_search_matches_any_field_case_insensitively() {
        let mut posts = vec![post("a", &["GraphQL"]), post("b", &[]), post("c", &[])];
        posts[1].summary = Some("All about GRAPHQL".to_string());
        posts[2].content = "graphql inside".to_string();
        posts[2].is_deleted = true;

        assert_eq!(ids(&search(&posts, "graphQL")), vec!["a", "b"]);
        assert!(search(&posts, "missing").is_empty());
    }
}
