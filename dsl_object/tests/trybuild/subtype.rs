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

#[derive(DslObject)]
#[dsl(keys(baz, foo))]
struct C {
    #[dsl(base)]
    parent: B,
}

fn main() {
    let mut c = C::default();
    c.foo(1);
    c.bar(2);
    c.baz(3);
    let names: Vec<_> = C::schema().iter().map(|n| n.as_str()).collect();
    assert_eq!(names, ["foo", "bar", "baz"]);
    assert_eq!(c.to_hash().len(), 3);
}
