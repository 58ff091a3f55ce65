use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thincat_kernel::{CategoryDocument, CategoryError, ThinCategory};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "THINCAT_LOG";

/// Install the stderr subscriber. `THINCAT_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn load_category_or_exit(path_arg: &str) -> ThinCategory {
    let path = PathBuf::from(path_arg);
    load_category(&path).unwrap_or_else(|e| {
        eprintln!("error: failed to load category {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn load_category(path: &Path) -> Result<ThinCategory, CategoryError> {
    let text =
        fs::read_to_string(path).map_err(|e| CategoryError::Document(e.to_string()))?;
    let document = if path.extension().is_some_and(|ext| ext == "toml") {
        CategoryDocument::from_toml_str(&text)?
    } else {
        CategoryDocument::from_json_str(&text)?
    };
    let category = document.build()?;
    debug!(
        path = %path.display(),
        objects = category.len(),
        arrows = category.arrows().count(),
        "loaded category"
    );
    Ok(category)
}

/// Display name: the document's `name`, else the path it came from.
pub fn category_label(category: &ThinCategory, path_arg: &str) -> String {
    category
        .name()
        .map_or_else(|| path_arg.to_string(), str::to_string)
}

pub fn exit_on_error<T>(result: Result<T, CategoryError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn print_json_or_exit(payload: &Value, label: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {label} json: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

pub fn join_objects<'a>(objects: impl IntoIterator<Item = &'a thincat_kernel::ObjectId>) -> String {
    objects
        .into_iter()
        .map(|object| object.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
