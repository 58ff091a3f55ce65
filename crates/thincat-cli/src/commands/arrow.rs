use crate::support;
use serde_json::json;

pub fn run(category_path: String, from: String, to: String, json_output: bool) {
    let category = support::load_category_or_exit(&category_path);
    let exists = support::exit_on_error(category.has_arrow(&from, &to));

    if json_output {
        let payload = json!({
            "category": support::category_label(&category, &category_path),
            "from": from,
            "to": to,
            "arrow": exists,
        });
        support::print_json_or_exit(&payload, "arrow");
        return;
    }

    println!("thincat arrow");
    println!("  {from} -> {to}: {}", if exists { "yes" } else { "no" });
}
