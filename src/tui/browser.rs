//! Hands a selected repository off to the system browser.

use log::{info, warn};

/// Web page for a repository full name such as `owner/name`.
pub fn repo_url(full_name: &str) -> String {
    format!("https://github.com/{full_name}")
}

/// Opens the repository page. Returns the URL that was opened.
pub fn open_repo(full_name: &str) -> std::io::Result<String> {
    let url = repo_url(full_name);
    info!("Opening {}", url);
    open::that(&url).inspect_err(|e| warn!("Failed to open {}: {}", url, e))?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_url() {
        assert_eq!(
            repo_url("ReactorKit/ReactorKit"),
            "https://github.com/ReactorKit/ReactorKit"
        );
    }
}
