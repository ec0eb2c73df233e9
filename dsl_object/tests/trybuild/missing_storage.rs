use dsl_object::DslObject;

#[derive(DslObject)]
#[dsl(keys(fat))]
struct NoStorage {
    label: String,
}

fn main() {}
