use showcase_kit::class::{ClassMerger, ClassValue, CustomGroup, cn, tw_merge};
use showcase_kit::recipes::{ButtonDensity, ButtonTone, button_classes};
use std::collections::BTreeMap;

#[test]
fn test_documented_examples() {
    assert_eq!(cn(["px-2", "px-4"]), "px-4");
    assert_eq!(cn(["text-red-500", "font-bold"]), "text-red-500 font-bold");
}

#[test]
fn test_empty_and_falsy_inputs() {
    assert_eq!(cn(Vec::<&str>::new()), "");
    assert_eq!(
        cn([
            ClassValue::from(serde_json::Value::Null),
            ClassValue::Empty,
            ClassValue::from(false),
            ClassValue::from(""),
        ]),
        ""
    );
}

#[test]
fn test_deterministic() {
    let inputs = || {
        vec![
            ClassValue::from("p-2 hover:bg-red-500 card"),
            ClassValue::from(("ring-2", true)),
            ClassValue::from(vec!["p-4", "card", "hover:bg-blue-500"]),
        ]
    };
    let first = cn(inputs());
    for _ in 0..10 {
        assert_eq!(cn(inputs()), first);
    }
    assert_eq!(first, "card ring-2 p-4 hover:bg-blue-500");
}

#[test]
fn test_never_two_from_same_group() {
    let merger = ClassMerger::new();
    let input = "px-1 py-1 px-2 text-sm text-red-500 text-lg text-blue-500 \
                 rounded rounded-md shadow shadow-lg opacity-50 opacity-100 \
                 flex block hidden w-4 w-full";
    let output = merger.merge(input);
    let tokens: Vec<&str> = output.split(' ').collect();

    let mut groups: Vec<&str> = tokens
        .iter()
        .filter_map(|token| merger.classify(token).map(|g| g.id()))
        .collect();
    let total = groups.len();
    groups.sort_unstable();
    groups.dedup();
    assert_eq!(groups.len(), total, "duplicate group in `{output}`");

    for expected in ["px-2", "py-1", "text-lg", "text-blue-500", "rounded-md", "shadow-lg", "opacity-100", "hidden", "w-full"] {
        assert!(tokens.contains(&expected), "missing {expected} in `{output}`");
    }
}

#[test]
fn test_unrecognized_token_appears_once() {
    assert_eq!(cn(["my-widget", "my-widget"]), "my-widget");
    assert_eq!(cn(["a b", ["b", "c"].join(" ").as_str(), "a"]), "a b c");
}

#[test]
fn test_json_inputs() -> anyhow::Result<()> {
    let value: serde_json::Value = serde_json::from_str(
        r#"["btn px-2", {"px-4": true, "hidden": false}, [null, 3, "font-bold"]]"#,
    )?;
    assert_eq!(cn([ClassValue::from(value)]), "btn px-4 font-bold");
    Ok(())
}

#[test]
fn test_json_object_keys_keep_input_order() -> anyhow::Result<()> {
    let value: serde_json::Value = serde_json::from_str(r#"{"px-4": true, "px-2": true}"#)?;
    assert_eq!(cn([ClassValue::from(value)]), "px-2");

    let value: serde_json::Value =
        serde_json::from_str(r#"{"text-sm": true, "font-bold": true, "text-lg": true}"#)?;
    assert_eq!(cn([ClassValue::from(value)]), "font-bold text-lg");
    Ok(())
}

#[test]
fn test_toggle_map_input() {
    let mut toggles = BTreeMap::new();
    toggles.insert("bg-red-500".to_string(), true);
    toggles.insert("bg-green-500".to_string(), false);
    assert_eq!(cn([ClassValue::from("bg-white"), ClassValue::from(toggles)]), "bg-red-500");
}

#[test]
fn test_real_component_classes() {
    let merged = tw_merge(
        "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white \
         bg-blue-600 hover:bg-blue-700 px-6 rounded-xl hover:bg-blue-800",
    );
    assert_eq!(
        merged,
        "inline-flex items-center justify-center py-2 font-medium text-white bg-blue-600 \
         px-6 rounded-xl hover:bg-blue-800"
    );
}

#[test]
fn test_custom_groups_through_recipes_stay_independent() {
    let merger = ClassMerger::with_groups(vec![CustomGroup {
        name: "elevation".to_string(),
        classes: vec![],
        prefixes: vec!["elevation".to_string()],
        conflicts: vec!["shadow".to_string()],
    }])
    .unwrap();
    assert_eq!(merger.merge("shadow-md elevation-2 elevation-4"), "elevation-4");

    // The default merger used by recipes has no custom groups.
    let classes = button_classes(ButtonTone::Solid, ButtonDensity::Compact, "elevation-2 elevation-4");
    assert!(classes.ends_with("elevation-2 elevation-4"));
}
