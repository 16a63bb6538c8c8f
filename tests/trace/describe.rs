//! Value description: type and value labels for traced values.

use crosscut_trace::{Describe, ValueDesc, impl_describe_display};

#[test]
fn scalar_kind_labels() {
    assert_eq!(7i32.describe().type_label, "int");
    assert_eq!(7i64.describe().type_label, "long");
    assert_eq!(7i16.describe().type_label, "short");
    assert_eq!(7u8.describe().type_label, "byte");
    assert_eq!('q'.describe().type_label, "char");
    assert_eq!(false.describe().type_label, "boolean");
    assert_eq!(1.0f32.describe().type_label, "float");
    assert_eq!(1.0f64.describe().type_label, "double");
    assert_eq!("q".describe().type_label, "String");
}

#[test]
fn array_kinds_render_bracketed_elements() {
    assert_eq!(
        [1i64, 2].describe(),
        ValueDesc::new("long[]", "[1, 2]")
    );
    assert_eq!(
        vec![1.5f64, 2.5].describe(),
        ValueDesc::new("double[]", "[1.5, 2.5]")
    );
    assert_eq!(
        [true, false, true].describe(),
        ValueDesc::new("boolean[]", "[true, false, true]")
    );
    assert_eq!(
        [b'a', b'b'].describe(),
        ValueDesc::new("byte[]", "[97, 98]")
    );
}

#[test]
fn object_array_renders_each_element() {
    let count = 3i32;
    let label = "retries";
    let elements: [&dyn Describe; 2] = [&count, &label];
    assert_eq!(
        elements[..].describe(),
        ValueDesc::new("Object[]", "[3, retries]")
    );
}

#[test]
fn absent_value_is_question_null() {
    let missing: Option<i64> = None;
    assert_eq!(missing.describe().to_string(), "{type=?; value=null}");
    assert_eq!(Some(9i64).describe(), 9i64.describe());
}

#[test]
fn application_types_describe_via_display() {
    struct Temperature(f64);

    impl std::fmt::Display for Temperature {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}C", self.0)
        }
    }

    impl_describe_display!(Temperature);

    let t = Temperature(21.5);
    assert_eq!(t.describe(), ValueDesc::new("Temperature", "21.5C"));
}
