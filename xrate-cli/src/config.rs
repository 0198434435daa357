//! Configuration loading from a dotenv file and the environment.

use std::collections::HashMap;
use std::env;
use std::path::Path;

use tracing::debug;
use xrate_hex::XrateConfig;

/// File read when `--config` is not given. It may be absent.
pub const DEFAULT_CONFIG_FILE: &str = "xrate.env";

pub const CORE_ENDPOINT_KEY: &str = "XRATE_CORE_ENDPOINT";
pub const CORE_AUTH_KEY: &str = "XRATE_CORE_AUTH";
pub const PLUGIN_AUTH_KEY: &str = "XRATE_PLUGIN_AUTH";

const KEYS: [&str; 3] = [CORE_ENDPOINT_KEY, CORE_AUTH_KEY, PLUGIN_AUTH_KEY];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot load configuration: {path}")]
    Load {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// Loads configuration.
///
/// Values come from the config file first; variables set in the process
/// environment override them. An explicitly named file must exist.
pub fn load(path: Option<&Path>) -> Result<XrateConfig, ConfigError> {
    load_with(path, |key| env::var(key).ok())
}

/// Same as [`load`], reading overrides through `lookup` instead of the
/// process environment.
fn load_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<XrateConfig, ConfigError> {
    let mut vars = match path {
        Some(path) => read_file(path)?,
        None => match read_file(Path::new(DEFAULT_CONFIG_FILE)) {
            Ok(vars) => vars,
            Err(ConfigError::Load { source, .. }) if source.not_found() => {
                debug!("no {} found, using environment only", DEFAULT_CONFIG_FILE);
                HashMap::new()
            }
            Err(e) => return Err(e),
        },
    };

    for key in KEYS {
        if let Some(value) = lookup(key) {
            vars.insert(key.to_string(), value);
        }
    }

    Ok(from_vars(&vars))
}

fn read_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let load_error = |source| ConfigError::Load {
        path: path.display().to_string(),
        source,
    };
    dotenvy::from_path_iter(path)
        .map_err(load_error)?
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(load_error)
}

fn from_vars(vars: &HashMap<String, String>) -> XrateConfig {
    let defaults = XrateConfig::default();
    let get = |key: &str| vars.get(key).map(|v| v.trim().to_string());

    XrateConfig {
        core_endpoint: get(CORE_ENDPOINT_KEY)
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.core_endpoint),
        core_auth: get(CORE_AUTH_KEY).unwrap_or(defaults.core_auth),
        plugin_auth: get(PLUGIN_AUTH_KEY).unwrap_or(defaults.plugin_auth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = from_vars(&HashMap::new());
        assert_eq!(config, XrateConfig::default());
    }

    #[test]
    fn test_values_are_read() {
        let vars = HashMap::from([
            (CORE_ENDPOINT_KEY.to_string(), "http://localhost:9000/convert".to_string()),
            (CORE_AUTH_KEY.to_string(), "coreKey".to_string()),
            (PLUGIN_AUTH_KEY.to_string(), "pluginKey".to_string()),
        ]);

        let config = from_vars(&vars);

        assert_eq!(config.core_endpoint, "http://localhost:9000/convert");
        assert_eq!(config.core_auth, "coreKey");
        assert_eq!(config.plugin_auth, "pluginKey");
    }

    #[test]
    fn test_blank_endpoint_falls_back_to_default() {
        let vars = HashMap::from([(CORE_ENDPOINT_KEY.to_string(), "  ".to_string())]);
        assert_eq!(
            from_vars(&vars).core_endpoint,
            XrateConfig::default().core_endpoint
        );
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# xrate settings").unwrap();
        writeln!(file, "XRATE_CORE_AUTH=fileKey").unwrap();
        writeln!(file, "XRATE_PLUGIN_AUTH=\"quoted key\"").unwrap();

        let vars = read_file(file.path()).unwrap();

        assert_eq!(vars.get(CORE_AUTH_KEY).map(String::as_str), Some("fileKey"));
        assert_eq!(vars.get(PLUGIN_AUTH_KEY).map(String::as_str), Some("quoted key"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.env");

        let err = load(Some(&path)).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Cannot load configuration: {}", path.display())
        );
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "XRATE_CORE_AUTH=fileKey").unwrap();
        writeln!(file, "XRATE_PLUGIN_AUTH=filePluginKey").unwrap();

        let config = load_with(Some(file.path()), |key| {
            (key == CORE_AUTH_KEY).then(|| "envKey".to_string())
        })
        .unwrap();

        assert_eq!(config.core_auth, "envKey");
        assert_eq!(config.plugin_auth, "filePluginKey");
    }

    #[test]
    fn test_missing_default_file_is_tolerated() {
        assert!(!Path::new(DEFAULT_CONFIG_FILE).exists());

        let config = load_with(None, |_| None).unwrap();

        assert_eq!(config, XrateConfig::default());
    }

    #[test]
    fn test_environment_alone_configures_without_default_file() {
        let config = load_with(None, |key| {
            (key == CORE_ENDPOINT_KEY).then(|| "http://localhost:9000/convert".to_string())
        })
        .unwrap();

        assert_eq!(config.core_endpoint, "http://localhost:9000/convert");
    }
}
