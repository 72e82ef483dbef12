//! Sample categories and posts used to populate an empty store.

use chrono::{Duration, Utc};

use crate::domain::{Category, Post};

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new("development", "Development", "development")
            .with_description("Programming and software development"),
        Category::new("tutorial", "Tutorial", "tutorial").with_description("Step-by-step guides"),
        Category::new("design", "Design", "design").with_description("UI/UX design topics"),
    ]
}

/// Sample posts, newest first. Timestamps are relative to the moment of the call.
pub fn sample_posts() -> Vec<Post> {
    let now = Utc::now();

    vec![
        sample_post(
            "1",
            "The Future of Web Development: What's Next",
            WEB_DEVELOPMENT,
            "Explore the latest trends in web development, from AI-powered tools to new frameworks.",
            "Sarah Chen",
            "development",
            &["web-development", "ai", "react", "future-tech"],
            "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=400&fit=crop",
            now - Duration::days(2),
            8,
        ),
        sample_post(
            "2",
            "Building Scalable APIs with Modern Architecture",
            SCALABLE_APIS,
            "Learn about microservices, GraphQL, and event-driven architectures.",
            "Marcus Rodriguez",
            "development",
            &["api", "microservices", "graphql", "architecture"],
            "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&h=400&fit=crop",
            now - Duration::days(5),
            12,
        ),
        sample_post(
            "3",
            "TypeScript Tips for React Developers",
            TYPESCRIPT_TIPS,
            "Essential TypeScript concepts for React developers.",
            "Jenny Park",
            "tutorial",
            &["typescript", "react", "patterns"],
            "https://images.unsplash.com/photo-1516116216624-53e697fedbea?w=800&h=400&fit=crop",
            now - Duration::weeks(1),
            10,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample_post(
    id: &str,
    title: &str,
    content: &str,
    summary: &str,
    author: &str,
    category: &str,
    tags: &[&str],
    image_url: &str,
    created_at: chrono::DateTime<Utc>,
    read_time: u32,
) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        summary: Some(summary.to_string()),
        author: author.to_string(),
        category: Some(category.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image_url: Some(image_url.to_string()),
        created_at,
        updated_at: created_at,
        is_deleted: false,
        read_time: Some(read_time),
    }
}

const WEB_DEVELOPMENT: &str = r#"# The Future of Web Development

Web development continues to evolve at a rapid pace. Here are the key trends:

## AI-Powered Development Tools
- Code completion assistants
- Conversational coding help
- Automated testing tools

## Server Components
Server components are changing how we build applications:

```jsx
async function BlogPost({ id }) {
  const post = await fetchPost(id);
  return <article>{post.content}</article>;
}
```

## Edge Computing
- Faster response times
- Better user experience
- Global scalability
"#;

const SCALABLE_APIS: &str = r#"# Building Scalable APIs

Learn how to build APIs that can handle millions of requests.

## Microservices Architecture
Breaking down applications into smaller services:
- Independence
- Scalability
- Technology diversity

## GraphQL vs REST
Understanding when to use each approach.

## Event-Driven Architecture
Using events to decouple services.
"#;

const TYPESCRIPT_TIPS: &str = r#"# TypeScript Tips for React

Essential TypeScript patterns for React development.

## Generic Components
```typescript
interface ListProps<T> {
  items: T[];
  renderItem: (item: T) => React.ReactNode;
}
```

## Hook Typing
Properly typing custom hooks for better DX.
"#;
