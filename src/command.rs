use std::path::Path;

fn flags<S: AsRef<str>>(prefix: &str, values: &[S]) -> String {
    values
        .iter()
        .map(|value| format!("{}{}", prefix, value.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a single compiler invocation:
/// `<compiler> -o <output> <sources> -I <inc>... -D<def>... -l<lib>... -std=<std>`.
///
/// Each group is joined on its own and the groups are then joined with single
/// spaces, so an empty group still leaves its separator behind
/// (`cc -o out     -std=c11`). Nothing is quoted or escaped.
///
/// Source paths go through `Path::display`, so bytes that are not valid UTF-8
/// come out as U+FFFD and such a file will not be found by the compiler.
pub fn build_command<P, I, D, L>(
    compiler: &str,
    output_file: &str,
    src_files: &[P],
    inc_paths: &[I],
    defs: &[D],
    link_libs: &[L],
    lang_std: &str,
) -> String
where
    P: AsRef<Path>,
    I: AsRef<str>,
    D: AsRef<str>,
    L: AsRef<str>,
{
    let sources = src_files
        .iter()
        .map(|src| src.as_ref().display().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{compiler} -o {output} {sources} {includes} {defs} {libs} -std={std}",
        compiler = compiler,
        output = output_file,
        sources = sources,
        includes = flags("-I ", inc_paths),
        defs = flags("-D", defs),
        libs = flags("-l", link_libs),
        std = lang_std,
    )
}
