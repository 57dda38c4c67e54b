//! Build script to generate the built-in word lists
//!
//! Every `data/lists/<name>.txt` file becomes one named list in the generated
//! `BUILTIN_LISTS` table, in file name order.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let list_dir = Path::new("data/lists");

    let mut entries: Vec<_> = fs::read_dir(list_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", list_dir.display()))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    entries.sort();

    let output_path = Path::new(&out_dir).join("builtin.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Built-in named word lists, one headword per entry").unwrap();
    writeln!(output, "pub const BUILTIN_LISTS: &[(&str, &[&str])] = &[").unwrap();

    for path in &entries {
        let name = path.file_stem().unwrap().to_string_lossy();
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

        writeln!(output, "    (\"{name}\", &[").unwrap();
        for word in content.lines().map(str::trim).filter(|w| !w.is_empty()) {
            writeln!(output, "        \"{word}\",").unwrap();
        }
        writeln!(output, "    ]),").unwrap();

        println!("cargo:rerun-if-changed={}", path.display());
    }

    writeln!(output, "];").unwrap();
    println!("cargo:rerun-if-changed=data/lists");
}
