use dsl_object as aliased;

use aliased::{DslObject, Settings};

#[derive(DslObject)]
#[dsl(crate = "aliased", keys(fat))]
struct Mom {
    settings: Settings,
}

fn main() {
    let mut mom = Mom::default();
    mom.fat(true);
    assert_eq!(mom.get("fat"), Some(&serde_json::json!(true)));
}
