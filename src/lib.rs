use std::ffi::NulError;
use std::io;
use std::path::{Path, PathBuf};

pub mod ansi;
pub mod collect;
pub mod command;
pub mod shell;

pub use collect::collect_source_files;
pub use command::build_command;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot list source directory `{}`", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("command contains a NUL byte")]
    Nul(#[from] NulError),
    #[error("cannot spawn the shell")]
    Spawn(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Everything needed to compile the game: where the sources live and how the
/// compiler is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub compiler: String,
    pub output_file: String,
    /// Scanned in order; files from earlier directories come first.
    pub source_dirs: Vec<PathBuf>,
    pub include_paths: Vec<String>,
    pub definitions: Vec<String>,
    pub link_libs: Vec<String>,
    pub lang_std: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Recipe {
    fn default() -> Recipe {
        Recipe {
            compiler: "g++".to_owned(),
            output_file: "out".to_owned(),
            source_dirs: vec![PathBuf::from("libs/lua"), PathBuf::from(".")],
            include_paths: strings(&["./libs/lua", "./libs/olcPixelGameEngine"]),
            definitions: strings(&["FORCE_EXPERIMENTAL_FS"]),
            link_libs: strings(&["X11", "GL", "pthread", "png", "stdc++fs"]),
            lang_std: "c++17".to_owned(),
        }
    }
}

impl Recipe {
    pub fn collect_sources(&self) -> Result<Vec<PathBuf>> {
        let mut sources = Vec::new();
        for dir in &self.source_dirs {
            let found = collect_source_files(dir).map_err(|source| Error::ListDir {
                path: dir.clone(),
                source,
            })?;
            log::debug!("{} source files in {}", found.len(), dir.display());
            sources.extend(found);
        }
        Ok(sources)
    }

    pub fn command<P: AsRef<Path>>(&self, sources: &[P]) -> String {
        build_command(
            &self.compiler,
            &self.output_file,
            sources,
            &self.include_paths,
            &self.definitions,
            &self.link_libs,
            &self.lang_std,
        )
    }
}
