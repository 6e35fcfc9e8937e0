use crate::domain::Article;

pub const DEFAULT_MAX_ARTICLES: usize = 25;

/// Newest first, truncated to `max` articles.
pub fn select<I>(articles: I, max: usize) -> Vec<Article>
where
    I: IntoIterator<Item = Article>,
{
    let mut ordered: Vec<Article> = articles.into_iter().collect();
    ordered.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    ordered.truncate(max);
    ordered
}
