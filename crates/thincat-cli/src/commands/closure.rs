use crate::support;
use serde_json::{Map, Value, json};

pub fn run(category_path: String, verify: bool, json_output: bool) {
    let category = support::load_category_or_exit(&category_path);
    let label = support::category_label(&category, &category_path);

    if verify {
        support::exit_on_error(category.verify_preorder());
    }

    if json_output {
        let mut relation = Map::new();
        for object in category.objects() {
            let reachable = support::exit_on_error(category.reachable_from(object));
            relation.insert(object.to_string(), json!(reachable));
        }
        let payload = json!({
            "category": label,
            "objects": category.objects(),
            "arrowCount": category.arrows().count(),
            "relation": Value::Object(relation),
            "verified": verify,
        });
        support::print_json_or_exit(&payload, "closure");
        return;
    }

    println!("thincat closure");
    println!("  Category: {label}");
    println!("  Objects: {}", category.len());
    println!("  Arrows: {}", category.arrows().count());
    for object in category.objects() {
        let reachable = support::exit_on_error(category.reachable_from(object));
        println!("  {object} -> {}", support::join_objects(reachable));
    }
    if verify {
        println!("  Preorder: verified");
    }
}
