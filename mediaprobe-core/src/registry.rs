// ============================================================================
// mediaprobe-core/src/registry.rs
// ============================================================================
//
// BACKEND REGISTRY: Name-Keyed Selection of Probing Backends
//
// Backends are looked up by name at call time. Names are validated against a
// simple identifier pattern before lookup, and callers that do not name a
// backend get the registry's ordered default list.

use crate::config::{DEFAULT_BACKENDS, ProbeConfig};
use crate::error::{CoreError, CoreResult};
use crate::external::{FfprobeBackend, ImageBackend, MediaInfoBackend, Probe};

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static BACKEND_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+$").expect("backend name pattern is valid"));

/// Rejects backend names that are not simple identifiers.
///
/// ```rust
/// use mediaprobe_core::registry::validate_backend_name;
///
/// assert!(validate_backend_name("ffprobe").is_ok());
/// assert!(validate_backend_name("../ffprobe").is_err());
/// ```
pub fn validate_backend_name(name: &str) -> CoreResult<()> {
    if BACKEND_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(CoreError::InvalidBackendName(name.to_string()))
    }
}

/// Map from backend name to implementation, plus the default try order.
pub struct BackendRegistry {
    backends: BTreeMap<String, Box<dyn Probe>>,
    defaults: Vec<String>,
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults(&ProbeConfig::default())
    }
}

impl BackendRegistry {
    /// A registry with no backends and no defaults.
    pub fn empty() -> Self {
        Self {
            backends: BTreeMap::new(),
            defaults: Vec::new(),
        }
    }

    /// The built-in backends, tried in `DEFAULT_BACKENDS` order.
    pub fn with_defaults(config: &ProbeConfig) -> Self {
        let mut registry = Self::empty();
        registry.register(FfprobeBackend::new(config.ffprobe_path.clone()));
        registry.register(MediaInfoBackend::new(config.mediainfo_path.clone()));
        registry.register(ImageBackend);
        registry.defaults = DEFAULT_BACKENDS.iter().map(|s| s.to_string()).collect();
        registry
    }

    /// Adds (or replaces) a backend under its own name.
    pub fn register<P: Probe + 'static>(&mut self, backend: P) -> &mut Self {
        let name = backend.name().to_string();
        log::debug!("Registering backend '{}'", name);
        self.backends.insert(name, Box::new(backend));
        self
    }

    /// Replaces the default try order.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownBackend` if a name is not registered.
    pub fn set_defaults<I, S>(&mut self, names: I) -> CoreResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if let Some(unknown) = names.iter().find(|n| !self.backends.contains_key(n.as_str())) {
            return Err(CoreError::UnknownBackend(unknown.clone()));
        }
        self.defaults = names;
        Ok(self)
    }

    /// Registered backend names in lexical order.
    pub fn names(&self) -> Vec<&str> {
        self.backends.keys().map(String::as_str).collect()
    }

    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    pub fn get(&self, name: &str) -> Option<&dyn Probe> {
        self.backends.get(name).map(|b| b.as_ref())
    }

    /// Resolves the backends to try, in order.
    ///
    /// A named backend resolves to exactly that backend; `None` resolves to
    /// the default list.
    ///
    /// # Errors
    ///
    /// `InvalidBackendName` for malformed names, `UnknownBackend` for names
    /// that are not registered.
    pub fn resolve(&self, backend: Option<&str>) -> CoreResult<Vec<&dyn Probe>> {
        match backend {
            Some(name) => {
                validate_backend_name(name)?;
                let probe = self
                    .get(name)
                    .ok_or_else(|| CoreError::UnknownBackend(name.to_string()))?;
                Ok(vec![probe])
            }
            None => Ok(self
                .defaults
                .iter()
                .filter_map(|name| self.get(name))
                .collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::ProbeOutcome;
    use crate::metadata::MediaMetadata;

    struct Named(&'static str);

    impl Probe for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn probe(&self, _media: &str) -> ProbeOutcome {
            ProbeOutcome::success(self.0, MediaMetadata::new())
        }
    }

    #[test]
    fn test_validate_backend_name() {
        assert!(validate_backend_name("ffprobe").is_ok());
        assert!(validate_backend_name("my_backend2").is_ok());
        for bad in ["", "ff-probe", "ff probe", "a.b", "x/y"] {
            assert!(
                matches!(validate_backend_name(bad), Err(CoreError::InvalidBackendName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_registry() {
        let registry = BackendRegistry::default();
        assert_eq!(registry.names(), vec!["ffprobe", "image", "mediainfo"]);
        assert_eq!(registry.defaults(), ["ffprobe", "mediainfo", "image"]);
        let order: Vec<&str> = registry
            .resolve(None)
            .unwrap()
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(order, vec!["ffprobe", "mediainfo", "image"]);
    }

    #[test]
    fn test_resolve_named() {
        let registry = BackendRegistry::default();
        let resolved = registry.resolve(Some("mediainfo")).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name(), "mediainfo");
    }

    #[test]
    fn test_resolve_rejects_before_lookup() {
        let registry = BackendRegistry::default();
        assert!(matches!(
            registry.resolve(Some("bad-name")),
            Err(CoreError::InvalidBackendName(_))
        ));
        assert!(matches!(
            registry.resolve(Some("nonexistent")),
            Err(CoreError::UnknownBackend(_))
        ));
    }

    #[test]
    fn test_register_and_set_defaults() {
        let mut registry = BackendRegistry::empty();
        registry.register(Named("one")).register(Named("two"));
        registry.set_defaults(["two", "one"]).unwrap();
        let order: Vec<&str> = registry
            .resolve(None)
            .unwrap()
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(order, vec!["two", "one"]);
        assert!(matches!(
            registry.set_defaults(["three"]),
            Err(CoreError::UnknownBackend(_))
        ));
    }
}
