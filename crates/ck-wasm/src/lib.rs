//! WebAssembly bindings for Crumbkeeper

use wasm_bindgen::prelude::*;
use ck_compiler::{compile_rule, lint_rule, suggest_rules};
use ck_core::{
    RuleMatcher,
    RuleSet,
    host::extract_host,
    psl::get_etld1,
    types::CleanupType,
};

/// A compiled rule, exposed to JavaScript as `RuleMatcher`.
#[wasm_bindgen(js_name = RuleMatcher)]
pub struct JsRuleMatcher {
    inner: RuleMatcher,
}

#[wasm_bindgen(js_class = RuleMatcher)]
impl JsRuleMatcher {
    #[wasm_bindgen(constructor)]
    pub fn new(rule: &str) -> JsRuleMatcher {
        JsRuleMatcher {
            inner: compile_rule(rule),
        }
    }

    pub fn test(&self, candidate: &str) -> bool {
        self.inner.test(candidate)
    }

    #[wasm_bindgen(getter)]
    pub fn rule(&self) -> String {
        self.inner.rule().to_string()
    }

    #[wasm_bindgen(getter, js_name = patternSource)]
    pub fn pattern_source(&self) -> String {
        self.inner.pattern_source().to_string()
    }
}

#[wasm_bindgen(js_name = ruleToPatternSource)]
pub fn rule_to_pattern_source(rule: &str) -> String {
    ck_compiler::rule_to_pattern_source(rule)
}

#[wasm_bindgen(js_name = testRule)]
pub fn test_rule(rule: &str, candidate: &str) -> bool {
    compile_rule(rule).test(candidate)
}

#[wasm_bindgen(js_name = lintRule)]
pub fn lint_rule_js(rule: &str) -> JsValue {
    let issues = js_sys::Array::new();
    for issue in lint_rule(rule) {
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"kind".into(), &JsValue::from_str(issue.kind()));
        let _ = js_sys::Reflect::set(&obj, &"message".into(), &JsValue::from_str(&issue.to_string()));
        issues.push(&obj);
    }
    issues.into()
}

#[wasm_bindgen(js_name = suggestRules)]
pub fn suggest_rules_js(host: &str) -> js_sys::Array {
    suggest_rules(host)
        .into_iter()
        .map(|rule| JsValue::from_str(&rule))
        .collect()
}

#[wasm_bindgen]
pub fn get_etld1_js(host: &str) -> String {
    get_etld1(host)
}

#[wasm_bindgen]
pub fn extract_host_js(url: &str) -> Option<String> {
    extract_host(url).map(|h| h.to_string())
}

/// The user's rules, compiled once and queried per host.
#[wasm_bindgen]
pub struct RuleSetHandle {
    inner: RuleSet,
}

#[wasm_bindgen]
impl RuleSetHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(fallback: &str) -> Result<RuleSetHandle, JsValue> {
        let fallback = parse_cleanup_type(fallback)?;
        Ok(RuleSetHandle {
            inner: RuleSet::with_fallback(fallback),
        })
    }

    pub fn add(&mut self, rule: &str, cleanup_type: &str) -> Result<(), JsValue> {
        let cleanup_type = parse_cleanup_type(cleanup_type)?;
        for issue in lint_rule(rule) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("rule {:?}: {}", rule, issue)));
        }
        self.inner.push(compile_rule(rule), cleanup_type);
        Ok(())
    }

    #[wasm_bindgen(js_name = cleanupTypeFor)]
    pub fn cleanup_type_for(&self, host: &str) -> String {
        self.inner.cleanup_type_for(host).to_string()
    }

    #[wasm_bindgen(js_name = isProtected)]
    pub fn is_protected(&self, host: &str, restarting: bool) -> bool {
        self.inner.is_protected(host, restarting)
    }

    #[wasm_bindgen(js_name = matchingRules)]
    pub fn matching_rules(&self, host: &str) -> js_sys::Array {
        let result = js_sys::Array::new();
        for entry in self.inner.matching_rules(host) {
            let obj = js_sys::Object::new();
            let _ = js_sys::Reflect::set(&obj, &"rule".into(), &JsValue::from_str(entry.matcher.rule()));
            let _ = js_sys::Reflect::set(&obj, &"type".into(), &JsValue::from_str(entry.cleanup_type.as_str()));
            result.push(&obj);
        }
        result
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn parse_cleanup_type(name: &str) -> Result<CleanupType, JsValue> {
    name.parse::<CleanupType>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_bindings() {
        assert!(test_rule("*.google.com", "mail.google.com"));
        assert!(!test_rule("foo", "afoo"));
        assert_eq!(rule_to_pattern_source("foo"), "^foo$");

        let matcher = JsRuleMatcher::new("foo.*");
        assert!(matcher.test("foo.bar"));
        assert_eq!(matcher.rule(), "foo.*");
    }

    #[test]
    fn test_host_bindings() {
        assert_eq!(get_etld1_js("www.example.co.uk"), "example.co.uk");
        assert_eq!(extract_host_js("https://www.example.com/a"), Some("www.example.com".to_string()));
    }
}
