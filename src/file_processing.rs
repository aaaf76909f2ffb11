/// Checks that `input` exists and is a directory.
pub fn check_path<P: AsRef<std::path::Path>>(input: P) -> anyhow::Result<()> {
    let path = input.as_ref();
    if !path.exists() {
        return Err(anyhow::anyhow!("Input path does not exist: {}", path.display()));
    }
    if !path.is_dir() {
        return Err(anyhow::anyhow!("Input path is not a directory: {}", path.display()));
    }
    anyhow::Ok(())
}

/// Creates the parent directory of `output` if it is missing.
pub fn ensure_parent_dir_exist<P: AsRef<std::path::Path>>(output: P) -> anyhow::Result<()> {
    if let Some(parent) = output.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            tracing::info!("Created output directory {}", parent.display());
        }
    }
    anyhow::Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("babyname_paths_{}", name));
        let _ = std::fs::remove_dir_all(&p);
        std::fs::create_dir_all(&p).unwrap();
        p
    }

    #[test]
    fn accepts_existing_directory() {
        let dir = tmp_dir("ok");
        assert!(check_path(&dir).is_ok());
    }

    #[test]
    fn rejects_missing_or_file_input() {
        let dir = tmp_dir("bad");
        assert!(check_path(dir.join("nope")).is_err());

        let file = dir.join("2001.html");
        std::fs::write(&file, "").unwrap();
        assert!(check_path(&file).is_err());
    }

    #[test]
    fn creates_missing_parent() {
        let dir = tmp_dir("parent");
        let out = dir.join("nested").join("out.csv");
        ensure_parent_dir_exist(&out).unwrap();
        assert!(dir.join("nested").is_dir());
    }

    #[test]
    fn bare_file_name_needs_no_parent() {
        assert!(ensure_parent_dir_exist("out.csv").is_ok());
    }
}
