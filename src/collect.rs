use std::io;
use std::path::{Path, PathBuf};

pub const SOURCE_SUFFIXES: [&str; 2] = [".c", ".cpp"];

fn is_source(name: &str) -> bool {
    SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Lists the direct entries of `dir` whose name ends in a C or C++ source
/// suffix, joined onto `dir`. Subdirectories are not descended into and the
/// order is whatever the directory listing yields.
pub fn collect_source_files<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut sources = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let name = entry?.file_name();
        if is_source(&name.to_string_lossy()) {
            sources.push(dir.join(name));
        }
    }
    Ok(sources)
}
