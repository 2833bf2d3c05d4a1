use std::{fs, path::Path};

pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Reads a decorative ASCII-art file, one banner row per line. Returns `None`
/// when the file is missing, unreadable or blank; callers fall back to their
/// built-in fixed-color banner.
pub fn load_art(dir: &Path, name: &str) -> Option<Vec<String>> {
    let path = dir.join(name);
    match fs::read_to_string(&path) {
        Ok(text) => {
            let lines: Vec<String> = text
                .lines()
                .map(|line| line.trim_end().to_string())
                .collect();
            if lines.iter().all(|line| line.is_empty()) {
                log::debug!("banner file {} is blank, using fallback", path.display());
                None
            } else {
                log::debug!("loaded banner from {}", path.display());
                Some(lines)
            }
        }
        Err(err) => {
            log::debug!("no banner at {} ({}), using fallback", path.display(), err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_file_falls_back() {
        let dir = std::env::temp_dir().join("brainbreak-assets-missing");
        assert!(load_art(&dir, "nope.txt").is_none());
    }

    #[test]
    fn existing_art_is_read_line_by_line() {
        let dir = std::env::temp_dir().join(format!("brainbreak-assets-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("banner.txt"), " ha \n haha \n").unwrap();

        let lines = load_art(&dir, "banner.txt").unwrap();
        assert_eq!(lines, vec![" ha".to_string(), " haha".to_string()]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn blank_art_falls_back() {
        let dir = std::env::temp_dir().join(format!("brainbreak-assets-blank-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("blank.txt"), "\n   \n").unwrap();

        assert!(load_art(&dir, "blank.txt").is_none());

        fs::remove_dir_all(&dir).ok();
    }
}
