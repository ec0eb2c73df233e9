use dsl_object::{DslObject, Settings};

#[derive(DslObject)]
struct Generic<T> {
    settings: Settings,
    value: T,
}

fn main() {}
