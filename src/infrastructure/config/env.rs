//! `${VAR}` placeholder resolution.
//!
//! Every scalar in the tree is scanned for `${IDENT}` with `IDENT` matching
//! `[A-Za-z_][A-Za-z0-9_]*`. Each occurrence is replaced by the variable's
//! value, inserted verbatim. There is no default syntax and no escaping; a
//! reference to an unset variable fails the whole pass.

use std::collections::HashMap;
use std::env::VarError;
use std::hash::BuildHasher;
use std::sync::LazyLock;

use regex::Regex;

use super::document::Node;
use super::error::{ConfigError, ConfigResult};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Source of variable values for placeholder resolution.
pub trait EnvSource {
    /// Value of `name`, or `None` if it is not set.
    ///
    /// Fails if the variable is set but cannot be used as text.
    fn var(&self, name: &str) -> ConfigResult<Option<String>>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> ConfigResult<Option<String>> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NonUnicodeVariable {
                name: name.to_owned(),
            }),
        }
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> ConfigResult<Option<String>> {
        Ok(self.get(name).cloned())
    }
}

/// Resolve placeholders in every scalar of `node`.
///
/// Returns a new tree; `node` is left untouched.
pub fn substitute<E: EnvSource + ?Sized>(node: &Node, env: &E) -> ConfigResult<Node> {
    node.map_scalars(&mut |text| substitute_text(text, env))
}

/// Resolve placeholders in a single string.
pub fn substitute_text<E: EnvSource + ?Sized>(text: &str, env: &E) -> ConfigResult<String> {
    if !text.contains("${") {
        return Ok(text.to_owned());
    }

    let mut resolved = String::with_capacity(text.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = env
            .var(name.as_str())?
            .ok_or_else(|| ConfigError::UnresolvedVariable {
                name: name.as_str().to_owned(),
            })?;
        resolved.push_str(&text[last..whole.start()]);
        resolved.push_str(&value);
        last = whole.end();
    }
    resolved.push_str(&text[last..]);

    Ok(resolved)
}
