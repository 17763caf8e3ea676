//! Tests for grounded script generation

use crate::test_utils::session;
use qag_application::ports::providers::MarkupRepository;
use qag_application::ports::services::{ScriptOutcome, ScriptServiceInterface};
use qag_application::use_cases::{ScriptServiceImpl, ScriptSettings};
use qag_domain::entities::TestCase;
use qag_providers::generative::NullGenerativeProvider;
use qag_providers::grounding::HtmlGroundingExtractor;
use qag_providers::markup::InMemoryMarkupRepository;
use std::sync::Arc;

const LOGIN_PAGE: &str = r#"<html><body>
<form id="login-form">
  <input id="username" name="user" type="text" class="field wide">
  <input id="password" name="pass" type="password">
  <button id="login-btn" class="primary">Log in</button>
</form>
</body></html>"#;

const SCRIPT_RESPONSE: &str = r#"```python
import unittest
from selenium import webdriver
from selenium.webdriver.common.by import By

class LoginTest(unittest.TestCase):
    def test_login(self):
        driver = webdriver.Chrome()
        driver.find_element(By.ID, "username").send_keys("alice")
        driver.find_element(By.NAME, "pass").send_keys("secret")
        driver.find_element(By.ID, "remember-me").click()
        driver.find_element(By.ID, "login-btn").click()
```"#;

fn login_case() -> TestCase {
    TestCase {
        test_id: "TC-007".to_string(),
        feature: "Login".to_string(),
        test_scenario: "Submit valid credentials".to_string(),
        expected_result: "Dashboard is shown".to_string(),
        grounded_in: "auth-spec.txt".to_string(),
    }
}

fn service(
    markup: Arc<InMemoryMarkupRepository>,
    generative: Arc<NullGenerativeProvider>,
) -> ScriptServiceImpl {
    ScriptServiceImpl::new(
        markup,
        Arc::new(HtmlGroundingExtractor::new()),
        generative,
        ScriptSettings::default(),
    )
}

#[tokio::test]
async fn test_script_is_grounded_in_page_inventory() {
    let s = session("ui");
    let markup = Arc::new(InMemoryMarkupRepository::new());
    markup.save(&s, "login.html", LOGIN_PAGE).await.expect("save");
    let generative = Arc::new(NullGenerativeProvider::with_response(SCRIPT_RESPONSE));

    let outcome = service(markup, generative.clone())
        .generate_script(&login_case(), &s)
        .await
        .expect("generate");

    let ScriptOutcome::Generated {
        script,
        inventory,
        unknown_selectors,
    } = outcome
    else {
        panic!("expected a generated script");
    };
    assert!(script.starts_with("import unittest"));
    assert!(!script.contains("```"));
    assert_eq!(inventory.inputs.len(), 2);
    assert_eq!(inventory.buttons.len(), 1);
    assert_eq!(unknown_selectors, vec!["id:remember-me".to_string()]);

    let prompts = generative.prompts();
    let (system, user) = &prompts[0];
    assert!(system.contains("ELEMENT INVENTORY"));
    assert!(user.contains("\"id\": \"username\""));
    assert!(user.contains("Test ID: TC-007"));
    assert!(user.contains("<!-- login.html -->"));
}

#[tokio::test]
async fn test_session_without_markup_has_no_grounding() {
    let markup = Arc::new(InMemoryMarkupRepository::new());
    markup
        .save(&session("other"), "login.html", LOGIN_PAGE)
        .await
        .expect("save");
    let generative = Arc::new(NullGenerativeProvider::with_response(SCRIPT_RESPONSE));
    let service = service(markup, generative.clone());

    let outcome = service
        .generate_script(&login_case(), &session("ui"))
        .await
        .expect("generate");

    assert!(matches!(outcome, ScriptOutcome::NoGrounding { .. }));
    assert!(generative.prompts().is_empty());
    assert_eq!(service.inventory(&session("ui")).await.expect("inventory"), None);
}

#[tokio::test]
async fn test_inventory_merges_every_page() {
    let s = session("ui");
    let markup = Arc::new(InMemoryMarkupRepository::new());
    markup.save(&s, "login.html", LOGIN_PAGE).await.expect("save login");
    markup
        .save(&s, "search.html", r#"<input id="q" type="search"><button>Go</button>"#)
        .await
        .expect("save search");

    let inventory = service(markup, Arc::new(NullGenerativeProvider::new()))
        .inventory(&s)
        .await
        .expect("inventory")
        .expect("markup present");

    assert!(inventory.has_id("username"));
    assert!(inventory.has_id("q"));
    assert!(inventory.has_name("pass"));
    assert_eq!(inventory.buttons.len(), 2);
}
