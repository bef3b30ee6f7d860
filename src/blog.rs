use serde::{Deserialize, Serialize};

use crate::i18n::Translation;

pub const POSTS_PER_PAGE: usize = 6;
const TEASER_LEN: usize = 3;
const GENERATED_POSTS: usize = 97;

const IMAGES: [&str; 3] = [
    "/assets/blog/wedding-tips.jpg",
    "/assets/blog/natural-light.jpg",
    "/assets/blog/family-guide.jpg",
];
const GENERATED_CATEGORIES: [&str; 3] = ["Wedding", "Tutorial", "Family"];
const GENERATED_MONTHS: [&str; 6] = ["January", "February", "March", "April", "May", "June"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: usize,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: &'static str,
}

impl BlogPost {
    pub fn url(&self) -> String {
        format!("/blog/{}.html", self.slug)
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// The featured posts of `t` followed by the generated archive.
pub fn all_posts(t: &Translation) -> Vec<BlogPost> {
    let featured = t.blog.posts.iter().enumerate().map(|(i, post)| BlogPost {
        id: i + 1,
        slug: format!("post-{}", i + 1),
        title: post.title.clone(),
        excerpt: post.excerpt.clone(),
        date: post.date.clone(),
        category: post.category.clone(),
        tags: match i {
            0 => tags(&["photography", "wedding"]),
            1 => tags(&["tutorial", "lighting"]),
            _ => tags(&["family", "preparation"]),
        },
        image: IMAGES[i % IMAGES.len()],
    });

    let first_generated = t.blog.posts.len() + 1;
    let generated = (0..GENERATED_POSTS).map(|i| {
        let id = first_generated + i;
        BlogPost {
            id,
            slug: format!("post-{id}"),
            title: format!("Post {id}"),
            excerpt: format!(
                "This is an excerpt for blog post {id}. It provides a brief overview of \
                 photography techniques and tips that will help you improve your skills."
            ),
            date: format!(
                "{} {} 2024",
                id * 7 % 28 + 1,
                GENERATED_MONTHS[id % GENERATED_MONTHS.len()]
            ),
            category: GENERATED_CATEGORIES[i % GENERATED_CATEGORIES.len()].to_string(),
            tags: tags(&["photography", "tips"]),
            image: IMAGES[i % IMAGES.len()],
        }
    });

    featured.chain(generated).collect()
}

/// First posts shown in the home page blog section.
pub fn teaser(t: &Translation) -> Vec<BlogPost> {
    all_posts(t).into_iter().take(TEASER_LEN).collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogQuery {
    pub page: Option<usize>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPage {
    pub posts: Vec<BlogPost>,
    pub page: usize,
    pub total_pages: usize,
    pub total_posts: usize,
    pub categories: Vec<String>,
    pub selected_category: Option<String>,
}

impl BlogPage {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filter by category, then cut out the requested page (clamped to the valid range).
pub fn list(posts: Vec<BlogPost>, query: &BlogQuery) -> BlogPage {
    let mut categories: Vec<String> = Vec::new();
    for post in &posts {
        if !categories.contains(&post.category) {
            categories.push(post.category.clone());
        }
    }

    let selected_category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    let filtered: Vec<BlogPost> = match &selected_category {
        Some(category) => posts.into_iter().filter(|p| &p.category == category).collect(),
        None => posts,
    };

    let total_posts = filtered.len();
    let total_pages = total_posts.div_ceil(POSTS_PER_PAGE);
    let page = query.page.unwrap_or(1).clamp(1, total_pages.max(1));
    let start = (page - 1) * POSTS_PER_PAGE;

    BlogPage {
        posts: filtered.into_iter().skip(start).take(POSTS_PER_PAGE).collect(),
        page,
        total_pages,
        total_posts,
        categories,
        selected_category,
    }
}
