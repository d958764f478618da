use recipe_assistant::config::DEFAULT_USER_AGENT;
use recipe_assistant::{fetch_recipe, AppConfig, RecipeError};

#[test]
fn test_fetch_sends_browser_user_agent() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/recipe")
        .match_header("user-agent", DEFAULT_USER_AGENT)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(include_str!("fixtures/garlic_soup.html"))
        .create();

    let url = format!("{}/recipe", server.url());
    let recipe = fetch_recipe(&url, &AppConfig::default()).unwrap();

    mock.assert();
    assert_eq!(recipe.title, "Garlic Soup");
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.steps.len(), 5);
}

#[test]
fn test_missing_heading_still_builds_record() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/no-title")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body><div class=\"ingredients\"><ul><li>salt</li></ul></div></body></html>")
        .create();

    let url = format!("{}/no-title", server.url());
    let recipe = fetch_recipe(&url, &AppConfig::default()).unwrap();

    assert_eq!(recipe.title, "");
    assert_eq!(recipe.ingredients, vec!["salt"]);
    assert!(recipe.steps.is_empty());
}

#[test]
fn test_http_error_status_is_failure() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/gone")
        .with_status(404)
        .with_body("<html><body><h1>Not Found</h1></body></html>")
        .create();

    let url = format!("{}/gone", server.url());
    let result = fetch_recipe(&url, &AppConfig::default());

    assert!(matches!(result, Err(RecipeError::FetchError(_))));
}

#[test]
fn test_invalid_user_agent_is_rejected() {
    let config = AppConfig {
        user_agent: "bad\nagent".to_string(),
        ..AppConfig::default()
    };

    let result = fetch_recipe("http://127.0.0.1:1/recipe", &config);

    assert!(matches!(result, Err(RecipeError::HeaderError(_))));
}
