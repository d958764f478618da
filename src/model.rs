/// A recipe extracted from a single web page.
///
/// Built once per fetch and never mutated afterwards. A missing title leaves
/// `title` empty; the record is still considered constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}
