#![cfg(unix)]

use std::fs::{self, File};
use std::os::unix::fs::PermissionsExt;
use std::process::{Command, Output};

use tempfile::TempDir;

const COMMAND: &str = "g++ -o out libs/lua/lapi.c ./main.cpp -I ./libs/lua \
                       -I ./libs/olcPixelGameEngine -DFORCE_EXPERIMENTAL_FS \
                       -lX11 -lGL -lpthread -lpng -lstdc++fs -std=c++17";

/// A game tree with one Lua file and one project file, plus a separate
/// directory holding a `g++` that leaves a `ran` marker and exits 1.
struct Game {
    root: TempDir,
    bin: TempDir,
}

impl Game {
    fn new(with_lua: bool) -> Game {
        let root = tempfile::tempdir().unwrap();
        if with_lua {
            let lua = root.path().join("libs").join("lua");
            fs::create_dir_all(&lua).unwrap();
            File::create(lua.join("lapi.c")).unwrap();
        }
        File::create(root.path().join("main.cpp")).unwrap();

        let bin = tempfile::tempdir().unwrap();
        let compiler = bin.path().join("g++");
        fs::write(&compiler, "#!/bin/sh\necho compiled\n: > ran\nexit 1\n").unwrap();
        fs::set_permissions(&compiler, fs::Permissions::from_mode(0o755)).unwrap();

        Game { root, bin }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_pge-build"))
            .args(args)
            .current_dir(self.root.path())
            .env("PATH", self.bin.path())
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    fn compiler_ran(&self) -> bool {
        self.root.path().join("ran").exists()
    }
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn prints_then_runs_and_ignores_the_failure() {
    let game = Game::new(true);
    let output = game.run(&[]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec![COMMAND, "compiled"]);
    assert!(game.compiler_ran());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn strict_reports_the_failure() {
    let game = Game::new(true);
    let output = game.run(&["--strict"]);

    assert!(!output.status.success());
    assert!(game.compiler_ran());
    assert!(String::from_utf8_lossy(&output.stderr).contains("CompilerFailed"));
}

#[test]
fn dry_run_only_prints() {
    let game = Game::new(true);
    let output = game.run(&["--dry-run"]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec![COMMAND]);
    assert!(!game.compiler_ran());
}

#[test]
fn missing_lua_stops_before_anything_runs() {
    let game = Game::new(false);
    let output = game.run(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!game.compiler_ran());
    assert!(String::from_utf8_lossy(&output.stderr).contains("libs/lua"));
}
