use dsl_object::{DslObject, Settings};

#[derive(DslObject)]
#[dsl(keys(foo))]
struct A {
    settings: Settings,
}

#[derive(DslObject)]
#[dsl(keys(bar))]
struct B {
    #[dsl(base)]
    parent: A,
}

fn main() {
    B::default().bar(1);
    A::default().bar(1);
}
