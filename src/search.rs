use std::fmt;

/// Web search links for a free-text query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLinks {
    pub query: String,
    pub google: String,
    pub youtube: String,
}

impl SearchLinks {
    pub fn new(query: &str) -> Self {
        let formatted = query.replace(' ', "+");
        Self {
            query: query.to_string(),
            google: format!("https://www.google.com/search?q={formatted}"),
            youtube: format!("https://www.youtube.com/results?search_query={formatted}"),
        }
    }
}

impl fmt::Display for SearchLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search results for '{}':", self.query)?;
        writeln!(f, "* Google: {}", self.google)?;
        write!(f, "* YouTube: {}", self.youtube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_replace_spaces() {
        let links = SearchLinks::new("red eye gravy");
        assert_eq!(links.google, "https://www.google.com/search?q=red+eye+gravy");
        assert_eq!(
            links.youtube,
            "https://www.youtube.com/results?search_query=red+eye+gravy"
        );
    }

    #[test]
    fn test_display() {
        let text = SearchLinks::new("pie").to_string();
        assert_eq!(
            text,
            "Search results for 'pie':\n* Google: https://www.google.com/search?q=pie\n* YouTube: https://www.youtube.com/results?search_query=pie"
        );
    }
}
