//! Structural string rendering.

use crosscut_domain::{DomainObject, Field, FieldValue, domain_object};

struct Customer {
    id: i64,
    name: String,
    vip: bool,
}

domain_object!(Customer { id, name, vip });

#[test]
fn rendering_uses_declaration_order_and_quoted_values() {
    let c = Customer {
        id: 7,
        name: "amy".to_string(),
        vip: true,
    };
    let rendered = c.to_string();
    assert!(rendered.ends_with("Customer{id='7', name='amy', vip='true'}"));
    // The type label is fully qualified.
    assert!(rendered.contains("::Customer{"));
}

#[test]
fn rendering_is_stable_across_calls() {
    let c = Customer {
        id: 7,
        name: "amy".to_string(),
        vip: true,
    };
    assert_eq!(c.structural_string(), c.structural_string());
    assert_eq!(c.to_string(), c.structural_string());
}

#[test]
fn list_fields_render_size_placeholder_only() {
    struct Cart {
        owner: String,
        items: Vec<String>,
    }

    domain_object!(Cart { owner, items });

    let cart = Cart {
        owner: "amy".to_string(),
        items: vec!["apple".to_string(), "pear".to_string(), "fig".to_string()],
    };

    let rendered = cart.to_string();
    assert!(rendered.contains("size=3"));
    assert!(rendered.contains("content omitted"));
    assert!(!rendered.contains("apple"));
    assert!(!rendered.contains("pear"));
}

#[test]
fn absent_optional_field_renders_null() {
    struct Profile {
        nickname: Option<String>,
    }

    domain_object!(Profile { nickname });

    let p = Profile { nickname: None };
    assert!(p.to_string().ends_with("Profile{nickname='null'}"));
}

#[test]
fn render_hook_can_replace_field_rendering() {
    struct ApiKey {
        label: String,
        secret: String,
    }

    impl DomainObject for ApiKey {
        fn type_label(&self) -> &'static str {
            std::any::type_name::<Self>()
        }

        fn declared_fields(&self) -> Vec<Field<'_>> {
            vec![
                Field {
                    name: "label",
                    value: &self.label,
                },
                Field {
                    name: "secret",
                    value: &self.secret,
                },
            ]
        }

        fn render_field_value(&self, field: &Field<'_>) -> String {
            if field.name == "secret" {
                "********".to_string()
            } else {
                field.value.render()
            }
        }
    }

    let key = ApiKey {
        label: "ci".to_string(),
        secret: "hunter2".to_string(),
    };
    let rendered = key.structural_string();
    assert!(rendered.contains("label='ci'"));
    assert!(rendered.contains("secret='********'"));
    assert!(!rendered.contains("hunter2"));
}
