use crate::support;
use serde_json::{Value, json};
use thincat_kernel::{FunctorCategory, first_obstruction, functor_category};

pub fn run(source_path: String, target_path: String, json_output: bool) {
    let source = support::load_category_or_exit(&source_path);
    let target = support::load_category_or_exit(&target_path);
    let fc = support::exit_on_error(functor_category(&source, &target));
    let functors = fc.functors();

    // One row per ordered pair of distinct functors.
    let mut rows = Vec::new();
    for (i, f) in functors.iter().enumerate() {
        for (j, g) in functors.iter().enumerate() {
            if i == j {
                continue;
            }
            let obstruction = support::exit_on_error(first_obstruction(f, g));
            rows.push((i, j, obstruction));
        }
    }

    if json_output {
        let transformations: Vec<Value> = rows
            .iter()
            .map(|(i, j, obstruction)| {
                json!({
                    "from": FunctorCategory::label(*i),
                    "to": FunctorCategory::label(*j),
                    "exists": obstruction.is_none(),
                    "obstruction": obstruction,
                })
            })
            .collect();
        let functors: Vec<Value> = functors
            .iter()
            .enumerate()
            .map(|(i, f)| json!({ "id": FunctorCategory::label(i), "mapping": f }))
            .collect();
        let payload = json!({
            "source": support::category_label(&source, &source_path),
            "target": support::category_label(&target, &target_path),
            "functors": functors,
            "transformations": transformations,
        });
        support::print_json_or_exit(&payload, "transform");
        return;
    }

    println!("thincat transform");
    println!(
        "  {} -> {}: {} functors",
        support::category_label(&source, &source_path),
        support::category_label(&target, &target_path),
        functors.len()
    );
    for (i, f) in functors.iter().enumerate() {
        let rendered: Vec<String> = f
            .pairs()
            .map(|(object, image)| format!("{object} -> {image}"))
            .collect();
        println!("  {}: {}", FunctorCategory::label(i), rendered.join(", "));
    }
    for (i, j, obstruction) in &rows {
        let (from, to) = (FunctorCategory::label(*i), FunctorCategory::label(*j));
        match obstruction {
            None => println!("  {from} => {to}"),
            Some(object) => println!("  {from} =/=> {to} (no component at {object})"),
        }
    }
}
