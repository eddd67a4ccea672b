use serde_json::{json, Value};

use intaker::labels::{label, label_code, label_list, PLACEHOLDER};

#[test]
fn known_codes_resolve_to_labels() {
    assert_eq!(label_code("leads"), "Get more leads");
    assert_eq!(label_code("yes-ok"), "Yes — minor improvements");
    assert_eq!(label_code("<500"), "Under $500");
    assert_eq!(label_code("1-3mo"), "1–3 months");
    assert_eq!(label_code("shop"), "Online Store");
    assert_eq!(label(Some(&json!("urgent"))), "ASAP");
}

#[test]
fn unknown_codes_pass_through() {
    assert_eq!(label_code("rebrand"), "rebrand");
    assert_eq!(label(Some(&json!("Something custom"))), "Something custom");
}

#[test]
fn missing_values_use_placeholder() {
    assert_eq!(PLACEHOLDER, "—");
    assert_eq!(label(None), "—");
    assert_eq!(label(Some(&Value::Null)), "—");
    assert_eq!(label(Some(&json!(""))), "—");
    assert_eq!(label_code(""), "—");
}

#[test]
fn non_string_scalars_render_as_text() {
    assert_eq!(label(Some(&json!(1500))), "1500");
    assert_eq!(label(Some(&json!(true))), "true");
    assert_eq!(label(Some(&json!(-2.5))), "-2.5");
}

#[test]
fn false_and_zero_count_as_unanswered() {
    assert_eq!(label(Some(&json!(false))), "—");
    assert_eq!(label(Some(&json!(0))), "—");
    assert_eq!(label(Some(&json!(0.0))), "—");
    assert_eq!(label_list(Some(&json!([true, false, 3]))), "true, —, 3");
}

#[test]
fn resolving_a_label_again_is_stable() {
    for code in ["leads", "none", "2k+", "contact-form", "whatever"] {
        let once = label_code(code);
        assert_eq!(label_code(&once), once);
    }
}

#[test]
fn lists_resolve_each_element_in_order() {
    assert_eq!(
        label_list(Some(&json!(["leads", "sales"]))),
        "Get more leads, Sell online"
    );
    assert_eq!(
        label_list(Some(&json!(["home", "custom-page", "faq"]))),
        "Home, custom-page, FAQ"
    );
}

#[test]
fn empty_or_missing_lists_use_placeholder() {
    assert_eq!(label_list(Some(&json!([]))), "—");
    assert_eq!(label_list(None), "—");
    assert_eq!(label_list(Some(&Value::Null)), "—");
}

#[test]
fn list_with_blank_entries_keeps_positions() {
    assert_eq!(label_list(Some(&json!(["logo", ""]))), "Logo, —");
}

#[test]
fn scalar_passed_as_list_resolves_like_single_value() {
    assert_eq!(label_list(Some(&json!("seo"))), "Improve SEO");
    assert_eq!(label(Some(&json!(["map", "gallery"]))), "Map embed, Gallery");
}
