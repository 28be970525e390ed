use inkform_notify::render::{first_name, greeting, render_aftercare};

#[test]
fn first_name_is_the_first_token() {
    assert_eq!(first_name("Rosa Marie Delgado"), Some("Rosa"));
    assert_eq!(first_name("Dex"), Some("Dex"));
    assert_eq!(first_name("  padded   name "), Some("padded"));
}

#[test]
fn first_name_of_blank_input_is_none() {
    assert_eq!(first_name(""), None);
    assert_eq!(first_name("   "), None);
}

#[test]
fn greeting_personalizes_when_a_name_is_available() {
    assert_eq!(greeting(Some("Rosa Marie Delgado")), "Hi Rosa,");
    assert_eq!(greeting(Some("Dex")), "Hi Dex,");
}

#[test]
fn greeting_falls_back_to_generic() {
    assert_eq!(greeting(None), "Hello,");
    assert_eq!(greeting(Some("")), "Hello,");
    assert_eq!(greeting(Some("   ")), "Hello,");
}

#[test]
fn rendered_body_carries_the_greeting_and_instructions() {
    let html = render_aftercare(Some("Rosa Delgado")).unwrap();
    assert!(html.contains("Hi Rosa,"));
    assert!(html.contains("First 24 hours"));
    assert!(html.contains("fragrance-free soap"));
    assert!(!html.contains("{{"), "unrendered template expression left in body");
}

#[test]
fn rendered_body_without_a_name_uses_the_generic_greeting() {
    let html = render_aftercare(None).unwrap();
    assert!(html.contains("Hello,"));
}
