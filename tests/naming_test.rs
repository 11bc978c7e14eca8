use create_component::naming::{
    is_hook_name, is_valid_package_name, to_kebab_case, to_valid_component_name,
    to_valid_package_name,
};
use proptest::prelude::*;

#[test]
fn test_is_valid_package_name() {
    assert!(is_valid_package_name("my-button"));
    assert!(is_valid_package_name("use-timer"));
    assert!(is_valid_package_name("@acme/my-button"));
    assert!(is_valid_package_name("lib.v2~beta"));

    assert!(!is_valid_package_name(""));
    assert!(!is_valid_package_name("MyButton"));
    assert!(!is_valid_package_name("my button"));
    assert!(!is_valid_package_name(".hidden"));
    assert!(!is_valid_package_name("_private"));
    assert!(!is_valid_package_name("@acme/"));
}

#[test]
fn test_kebab_case() {
    assert_eq!(to_kebab_case("MyCoolThing"), "my-cool-thing");
    assert_eq!(to_kebab_case("myCoolThing"), "my-cool-thing");
    assert_eq!(to_kebab_case("-Leading"), "leading");
}

#[test]
fn test_to_valid_package_name() {
    assert_eq!(to_valid_package_name("MyCoolThing"), "my-cool-thing");
    assert_eq!(to_valid_package_name("Fancy Button"), "fancy-button");
    assert_eq!(to_valid_package_name("  spaced   out  "), "spaced-out");
    assert_eq!(to_valid_package_name("_private"), "private");
    assert_eq!(to_valid_package_name(".hidden"), "hidden");
    assert_eq!(to_valid_package_name("my_widget"), "my-widget");
    assert_eq!(to_valid_package_name("what?!now"), "what-now");
    assert_eq!(to_valid_package_name("trailing!"), "trailing");
}

#[test]
fn test_to_valid_package_name_is_idempotent() {
    let inputs = [
        "MyCoolThing",
        "Fancy Button",
        "..double dot",
        "-dash-",
        "trailing!",
        "Über Widget",
        "a__b",
        "@scope/Name",
        "ALLCAPS",
        "",
        "!!!",
    ];
    for input in inputs {
        let once = to_valid_package_name(input);
        assert_eq!(to_valid_package_name(&once), once, "input: {input:?}");
    }
}

#[test]
fn test_to_valid_package_name_is_valid() {
    let inputs = [
        "MyCoolThing",
        "Fancy Button",
        "my_widget",
        "use-timer",
        "Project 42",
        "  padded name ",
        "camelCase_and-Kebab",
    ];
    for input in inputs {
        let name = to_valid_package_name(input);
        assert!(is_valid_package_name(&name), "{input:?} -> {name:?}");
    }
}

#[test]
fn test_to_valid_component_name() {
    assert_eq!(to_valid_component_name("use-foo-bar"), "useFooBar");
    assert!(is_hook_name(&to_valid_component_name("use-foo-bar")));

    assert_eq!(to_valid_component_name("my_widget"), "MyWidget");
    assert!(!is_hook_name(&to_valid_component_name("my_widget")));

    assert_eq!(to_valid_component_name("fancy-button"), "FancyButton");
    assert_eq!(to_valid_component_name("button"), "Button");
    assert_eq!(to_valid_component_name(""), "");
}

#[test]
fn test_component_name_folds_underscores_before_hyphens() {
    assert_eq!(to_valid_component_name("use-_state"), "useState");
    assert_eq!(to_valid_component_name("a-_b"), "AB");
    assert_eq!(to_valid_component_name("my_-widget"), "My_Widget");
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn property_package_name_normalization_is_idempotent(name in any::<String>()) {
        let once = to_valid_package_name(&name);
        prop_assert_eq!(to_valid_package_name(&once), once);
    }

    #[test]
    fn property_normalized_package_name_is_valid(name in "[A-Za-z0-9][A-Za-z0-9 _-]*") {
        let normalized = to_valid_package_name(&name);
        prop_assert!(is_valid_package_name(&normalized), "{:?} -> {:?}", name, normalized);
    }
}
