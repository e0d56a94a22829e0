#![cfg(target_arch = "wasm32")]

use ck_wasm::{lint_rule_js, suggest_rules_js, RuleSetHandle};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn rule_set_handle_decides() {
    let mut set = RuleSetHandle::new("leave").unwrap();
    set.add("*.google.com", "never").unwrap();
    set.add("*.ads.*", "instantly").unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(set.cleanup_type_for("mail.google.com"), "never");
    assert_eq!(set.cleanup_type_for("ads.example.com"), "instantly");
    assert_eq!(set.cleanup_type_for("example.com"), "leave");
    assert!(set.is_protected(".google.com", true));
    assert_eq!(set.matching_rules("google.com").length(), 1);
}

#[wasm_bindgen_test]
fn rule_set_handle_rejects_unknown_type() {
    assert!(RuleSetHandle::new("sometimes").is_err());
    let mut set = RuleSetHandle::new("never").unwrap();
    assert!(set.add("foo", "later").is_err());
    assert!(set.is_empty());
}

#[wasm_bindgen_test]
fn lint_and_suggest() {
    let issues = js_sys::Array::from(&lint_rule_js("a..b"));
    assert_eq!(issues.length(), 1);
    let kind = js_sys::Reflect::get(&issues.get(0), &JsValue::from_str("kind")).unwrap();
    assert_eq!(kind.as_string().as_deref(), Some("empty_label"));

    let suggestions = suggest_rules_js("www.google.com");
    assert_eq!(suggestions.get(1).as_string().as_deref(), Some("*.google.com"));
}
