pub const BOLD: &str = "\x1B[1m";
pub const RESET: &str = "\x1B[0m";

pub fn stdout_is_terminal() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

pub fn bold(text: &str) -> String {
    format!("{}{}{}", BOLD, text, RESET)
}
