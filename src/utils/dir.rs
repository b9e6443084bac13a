use std::{env, io, path::PathBuf};

use anyhow::{anyhow, Result};

/// Returns the directory that holds rating logs and traces, creating it when needed.
/// `$XDG_STATE_HOME/dayrate`, falling back to `$HOME/.local/state/dayrate`.
pub fn create_application_default_path() -> Result<PathBuf> {
    let path = {
        #[cfg(windows)]
        {
            let mut path = PathBuf::from(
                env::var("APPDATA").map_err(|_| anyhow!("APPDATA should be present on Windows"))?,
            );
            path.push("dayrate");
            path
        }
        #[cfg(not(windows))]
        {
            let mut path = env::var("XDG_STATE_HOME")
                .map(PathBuf::from)
                .or_else(|_| {
                    env::var("HOME").map(|home| {
                        let mut path = PathBuf::from(home);
                        path.push(".local/state");
                        path
                    })
                })
                .map_err(|_| anyhow!("Couldn't find neither XDG_STATE_HOME nor HOME"))?;
            path.push("dayrate");
            path
        }
    };

    ensure_dir(path)
}

/// Uses `dir` when given, the default application directory otherwise.
pub fn resolve_application_path(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => ensure_dir(dir),
        None => create_application_default_path(),
    }
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf> {
    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v.into()),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use super::resolve_application_path;

    #[test]
    fn explicit_dir_is_created() -> Result<()> {
        let root = tempdir()?;
        let dir = root.path().join("nested").join("dayrate");

        let resolved = resolve_application_path(Some(dir.clone()))?;

        assert_eq!(resolved, dir);
        assert!(dir.is_dir());
        Ok(())
    }
}
