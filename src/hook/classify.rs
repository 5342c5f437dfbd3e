//! Commit command detection.

use std::sync::OnceLock;

use regex::Regex;

/// `git` as its own word (optionally by path, optionally quoted by an outer
/// `sh -c`), optional global options (`-C dir`, `-C "my dir"`, `--no-pager`,
/// `-c key=value`), then `commit` not followed by a word character or `-`.
fn commit_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?:^|[^\w./-])(?:[\w./-]*/)?git(?:\s+-[Cc]\s+(?:"[^"]*"|'[^']*'|\S+)|\s+--?[A-Za-z][\w-]*(?:=\S+)?)*\s+commit(?:$|[^\w-])"#,
        )
        .expect("static regex")
    })
}

/// Whether a shell command line runs `git commit`.
pub fn is_commit_command(command: &str) -> bool {
    commit_pattern().is_match(command)
}
