use dsl_object::{DslObject, Settings};

#[derive(DslObject)]
#[dsl(keys(college, "combat_boots", ":fat", so_fat, r#type))]
struct Mom {
    #[dsl(settings)]
    store: Settings,
    label: String,
}

#[derive(DslObject)]
#[dsl(keys(type, "match"))]
struct Node {
    settings: Settings,
}

#[derive(DslObject)]
#[dsl(keys(x, get_x))]
struct Pair {
    settings: Settings,
}

#[derive(DslObject)]
struct Empty {
    settings: Settings,
}

fn main() {
    let mut mom = Mom::default();
    mom.college("none");
    mom.combat_boots("wears");
    mom.fat(true);
    mom.so_fat(());
    mom.r#type("mother");
    assert_eq!(mom.get_type(), Some(&serde_json::json!("mother")));
    assert!(mom.label.is_empty());
    assert!(Mom::schema().contains("type"));
    assert!(Empty::schema().is_empty());

    let mut node = Node::default();
    node.r#type("leaf");
    node.r#match(1);
    assert_eq!(node.get_type(), Some(&serde_json::json!("leaf")));
    assert_eq!(node.get_match(), Some(&serde_json::json!(1)));

    let mut pair = Pair::default();
    pair.x(1);
    pair.get_x(2);
    assert_eq!(pair.x(()), Some(&serde_json::json!(1)));
    assert_eq!(pair.get_get_x(), Some(&serde_json::json!(2)));
    let _ = Empty::default().to_string();
}
