use log::debug;
use scraper::{ElementRef, Html, Selector};

/// Photo credit that some sites embed inside their step list items
const PHOTO_CREDIT: &str = "Serious Eats / Lorena Masso";

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// True when `item` sits inside a `ul` that is itself nested in `container`.
fn inside_unordered_list(item: &ElementRef, container: &ElementRef) -> bool {
    item.ancestors()
        .take_while(|ancestor| ancestor.id() != container.id())
        .filter_map(|ancestor| ancestor.value().as_element())
        .any(|element| element.name() == "ul")
}

/// Text of the first `h1`, or an empty string when the page has none.
pub fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("h1") else {
        return String::new();
    };

    match document.select(&selector).next() {
        Some(heading) => element_text(&heading),
        None => {
            debug!("No h1 heading found, title left empty");
            String::new()
        }
    }
}

/// Collects `ul > … > li` items from every element carrying the `ingredients`
/// class token, in document order.
pub fn extract_ingredients(document: &Html) -> Vec<String> {
    let mut items = Vec::new();

    let (Ok(section_selector), Ok(li_selector)) =
        (Selector::parse(".ingredients"), Selector::parse("li"))
    else {
        return items;
    };

    for section in document.select(&section_selector) {
        for li in section.select(&li_selector) {
            if inside_unordered_list(&li, &section) {
                items.push(element_text(&li));
            }
        }
    }

    debug!("Found {} ingredients", items.len());
    items
}

/// Collects every list item of every ordered list on the page.
///
/// Not scoped to a steps section, so unrelated ordered lists are picked up too.
pub fn extract_steps(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("ol li") else {
        return Vec::new();
    };

    let steps: Vec<String> = document
        .select(&selector)
        .map(|li| {
            li.text()
                .collect::<String>()
                .replace(PHOTO_CREDIT, "")
                .replace('\n', " ")
                .trim()
                .to_string()
        })
        .collect();

    debug!("Found {} steps", steps.len());
    steps
}

/// Anchor texts under the first element whose class attribute is exactly `class_name`.
fn extract_links_by_exact_class(document: &Html, class_name: &str) -> Vec<String> {
    let section_css = format!("[class=\"{class_name}\"]");
    let (Ok(section_selector), Ok(anchor_selector)) =
        (Selector::parse(&section_css), Selector::parse("a"))
    else {
        return Vec::new();
    };

    let Some(section) = document.select(&section_selector).next() else {
        debug!("No element with class \"{}\"", class_name);
        return Vec::new();
    };

    section
        .select(&anchor_selector)
        .map(|anchor| element_text(&anchor))
        .collect()
}

pub fn extract_categories(document: &Html) -> Vec<String> {
    let categories = extract_links_by_exact_class(document, "categories");
    debug!("Found {} categories", categories.len());
    categories
}

pub fn extract_tags(document: &Html) -> Vec<String> {
    let tags = extract_links_by_exact_class(document, "tags");
    debug!("Found {} tags", tags.len());
    tags
}
