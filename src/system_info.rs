use git_version::git_version;

// include -modified if the working tree has uncommitted changes
const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

fn version_line() -> String {
    let latest = option_env!("LATEST_TAG").unwrap_or("");
    let ahead = option_env!("COMMITS_AHEAD").unwrap_or("");
    match option_env!("RELEASE_VERSION") {
        Some(tag) if !tag.is_empty() => format!("release {tag}"),
        _ if !latest.is_empty() && !ahead.is_empty() => {
            format!("development branch {ahead} commits ahead of {latest}")
        }
        _ if !latest.is_empty() => format!("development branch ahead of {latest}"),
        _ => format!("development {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Name, version, commit and build profile, one per line.
pub fn get_system_info() -> String {
    let profile = if cfg!(debug_assertions) {
        "Dev"
    } else {
        "Release"
    };
    format!(
        "{} - {}\nCommit: {COMMIT}\n{profile} build",
        env!("CARGO_PKG_NAME"),
        version_line(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_info_lines() {
        let info = get_system_info();
        assert!(info.starts_with("flashbot - "));
        assert!(info.contains(&format!("Commit: {COMMIT}")));
        assert!(info.contains("Dev build") || info.contains("Release build"));
        assert!(info.contains("release") || info.contains("development"));
    }
}
