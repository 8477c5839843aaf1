use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "gebzem";
const HOME_OVERRIDE_ENV: &str = "GEBZEM_HOME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    /// `$GEBZEM_HOME` when set, otherwise the platform local data directory.
    pub fn resolve() -> Result<Self, AppError> {
        let data_dir = env::var_os(HOME_OVERRIDE_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::data_local_dir().map(|base| base.join(APP_DIR_NAME)))
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve data directory (GEBZEM_HOME/platform default)"
                    .into(),
            })?;

        let log_dir = data_dir.join("logs");

        Ok(Self { data_dir, log_dir })
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.data_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::env_lock;

    #[test]
    fn home_override_controls_all_paths() {
        let _guard = env_lock();
        let root = tempfile::tempdir().expect("temp dir");
        let previous = env::var_os(HOME_OVERRIDE_ENV);
        // SAFETY: env is guarded by process-wide test mutex.
        unsafe { env::set_var(HOME_OVERRIDE_ENV, root.path()) };

        let layout = StorageLayout::resolve().expect("layout should resolve");
        layout.ensure_dirs().expect("dirs should be created");

        assert_eq!(layout.data_dir, root.path());
        assert!(layout.log_dir.starts_with(&layout.data_dir));
        assert!(layout.log_dir.is_dir());

        match previous {
            // SAFETY: restoring env while guard is held.
            Some(value) => unsafe { env::set_var(HOME_OVERRIDE_ENV, value) },
            // SAFETY: restoring env while guard is held.
            None => unsafe { env::remove_var(HOME_OVERRIDE_ENV) },
        }
    }
}
