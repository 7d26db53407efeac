use crate::app::errors::AppError;
use secrecy::{ExposeSecret, SecretString};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Client-side persistence for the auth token.
pub trait TokenStore {
    /// # Errors
    /// Returns `AppError::Config` if the backing storage cannot be read.
    fn load(&self) -> Result<Option<SecretString>, AppError>;

    /// # Errors
    /// Returns `AppError::Config` if the backing storage cannot be written.
    fn save(&mut self, token: &SecretString) -> Result<(), AppError>;

    /// # Errors
    /// Returns `AppError::Config` if the backing storage cannot be cleared.
    fn clear(&mut self) -> Result<(), AppError>;
}

/// Keeps the token for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Option<SecretString>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(SecretString::from(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<SecretString>, AppError> {
        Ok(self
            .token
            .as_ref()
            .map(|token| SecretString::from(token.expose_secret())))
    }

    fn save(&mut self, token: &SecretString) -> Result<(), AppError> {
        self.token = Some(SecretString::from(token.expose_secret()));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), AppError> {
        self.token = None;
        Ok(())
    }
}

/// Stores the token in a single file, readable only by the owner on unix.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<SecretString>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(SecretString::from(token)))
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Config(format!(
                "Failed to read token from {}: {err}",
                self.path.display()
            ))),
        }
    }

    fn save(&mut self, token: &SecretString) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| {
                    AppError::Config(format!(
                        "Failed to create token directory {}: {err}",
                        parent.display()
                    ))
                })?;
            }
        }

        fs::write(&self.path, token.expose_secret()).map_err(|err| {
            AppError::Config(format!(
                "Failed to write token to {}: {err}",
                self.path.display()
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|err| {
                AppError::Config(format!(
                    "Failed to restrict token file {}: {err}",
                    self.path.display()
                ))
            })?;
        }

        Ok(())
    }

    fn clear(&mut self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AppError::Config(format!(
                "Failed to remove token file {}: {err}",
                self.path.display()
            ))),
        }
    }
}
