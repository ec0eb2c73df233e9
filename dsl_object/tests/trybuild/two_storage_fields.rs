use dsl_object::{DslObject, Settings};

#[derive(DslObject)]
struct TwoStores {
    #[dsl(settings)]
    first: Settings,
    #[dsl(settings)]
    second: Settings,
}

fn main() {}
