use crate::support;
use serde_json::json;
use thincat_kernel::{count_functors, find_all_functors};

pub fn run(source_path: String, target_path: String, count_only: bool, json_output: bool) {
    let source = support::load_category_or_exit(&source_path);
    let target = support::load_category_or_exit(&target_path);
    let source_label = support::category_label(&source, &source_path);
    let target_label = support::category_label(&target, &target_path);

    if count_only {
        let count = count_functors(&source, &target);
        if json_output {
            let payload = json!({
                "source": source_label,
                "target": target_label,
                "count": count,
            });
            support::print_json_or_exit(&payload, "functors");
        } else {
            println!("thincat functors");
            println!("  {source_label} -> {target_label}: {count}");
        }
        return;
    }

    let functors = find_all_functors(&source, &target);

    if json_output {
        let payload = json!({
            "source": source_label,
            "target": target_label,
            "count": functors.len(),
            "functors": functors,
        });
        support::print_json_or_exit(&payload, "functors");
        return;
    }

    println!("thincat functors");
    println!("  {source_label} -> {target_label}: {}", functors.len());
    for (index, functor) in functors.iter().enumerate() {
        let rendered: Vec<String> = functor
            .pairs()
            .map(|(object, image)| format!("{object} -> {image}"))
            .collect();
        println!("  F{index}: {}", rendered.join(", "));
    }
}
