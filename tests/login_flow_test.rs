use anyhow::Result;
use greetr::{GreetrError, Language, LoginFlow, LoginSelectors, MemorySink, Page};
use std::sync::Arc;

fn login_page(selectors: &LoginSelectors, lang: &str) -> Page {
    Page::new()
        .with_element(&selectors.container)
        .with_input(&selectors.language_input, lang)
        .with_element(&selectors.greeting_target)
}

#[test]
fn test_login_in_spanish() -> Result<()> {
    let selectors = LoginSelectors::default();
    let page = login_page(&selectors, "es");
    let sink = MemorySink::new();

    let flow = LoginFlow::new(Arc::new(page.clone()), selectors)
        .with_sink(Arc::new(sink.clone()));
    let greeter = flow.login("John", "Doe")?;

    assert_eq!(greeter.language(), Language::Es);
    assert!(page.is_hidden("#logindiv"));
    assert_eq!(page.html("#greeting").as_deref(), Some("Saludos, John Doe"));
    assert_eq!(sink.lines(), vec!["Inició sesión: John Doe"]);
    Ok(())
}

#[test]
fn test_login_picks_up_changed_selection() -> Result<()> {
    let selectors = LoginSelectors::default();
    let page = login_page(&selectors, "en");
    let flow = LoginFlow::new(Arc::new(page.clone()), selectors);

    page.set_value("#lang", "fr");
    flow.login("John", "Doe")?;

    assert_eq!(page.html("#greeting").as_deref(), Some("Bonjour, John Doe"));
    Ok(())
}

#[test]
fn test_login_with_invalid_selection() {
    let selectors = LoginSelectors::default();
    let page = login_page(&selectors, "klingon");
    let sink = MemorySink::new();
    let flow = LoginFlow::new(Arc::new(page.clone()), selectors)
        .with_sink(Arc::new(sink.clone()));

    let result = flow.login("John", "Doe");

    assert!(matches!(result, Err(GreetrError::InvalidLanguage { .. })));
    assert!(page.is_hidden("#logindiv"));
    assert_eq!(page.html("#greeting").as_deref(), Some(""));
    assert!(sink.lines().is_empty());
}

#[test]
fn test_login_with_custom_selectors() -> Result<()> {
    let selectors = LoginSelectors {
        container: "#form".to_string(),
        language_input: "#language".to_string(),
        greeting_target: "h1".to_string(),
    };
    let page = login_page(&selectors, "fr");
    let flow = LoginFlow::new(Arc::new(page.clone()), selectors.clone());

    flow.login("Luke", "Prosser")?;

    assert_eq!(flow.selectors(), &selectors);
    assert!(page.is_hidden("#form"));
    assert_eq!(page.html("h1").as_deref(), Some("Bonjour, Luke Prosser"));
    Ok(())
}
