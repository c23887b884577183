//! User-facing console output.
//! Colors are used only when stdout is a TTY, so piped output stays plain and scriptable.

use owo_colors::OwoColorize;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {msg}");
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {msg}");
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {msg}");
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {msg}");
    }
}

/// Print one line from the rename log. The text is never altered; on a TTY the
/// leading verb is colored.
pub fn print_log_line(line: &str) {
    if !is_tty() {
        println!("{line}");
        return;
    }
    if let Some(rest) = line.strip_prefix("Renamed: ").filter(|r| r.contains(" -> ")) {
        println!("{} {}", "Renamed:".green(), rest);
    } else if let Some(rest) = line.strip_prefix("Would rename: ") {
        println!("{} {}", "Would rename:".cyan(), rest);
    } else if line.starts_with("Skipped (") {
        match line.split_once(": ") {
            Some((head, rest)) => println!("{}: {}", head.yellow(), rest),
            None => println!("{line}"),
        }
    } else {
        println!("{line}");
    }
}
