//! Bundler plugin descriptions.
//!
//! The bundler runtime instantiates the actual plugins; this module only
//! describes which ones run, in which order, and with what options.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::settings::BuildSettings;

pub const NODE_ENV_TOKEN: &str = "process.env.NODE_ENV";
pub const BROWSER_TOKEN: &str = "process.env.BROWSER";
pub const SERVER_TOKEN: &str = "process.env.SERVER";

/// Environment tag that turns on minification
pub const PRODUCTION: &str = "production";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "options", rename_all = "kebab-case")]
pub enum Plugin {
    /// Node-style module resolution
    NodeResolve(NodeResolveOptions),
    /// Syntax transpilation
    Babel(BabelOptions),
    /// CommonJS → ESM interop
    Commonjs,
    /// Token substitution of `process.env.*`
    Replace(ReplaceOptions),
    /// Minification
    Uglify(UglifyOptions),
}

impl Plugin {
    pub fn name(&self) -> &'static str {
        match self {
            Plugin::NodeResolve(_) => "node-resolve",
            Plugin::Babel(_) => "babel",
            Plugin::Commonjs => "commonjs",
            Plugin::Replace(_) => "replace",
            Plugin::Uglify(_) => "uglify",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeResolveOptions {
    pub jsnext: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabelOptions {
    pub exclude: Vec<String>,
}

/// Replacement rules: source token → JSON literal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplaceOptions(IndexMap<String, String>);

impl ReplaceOptions {
    /// Rules for a bundle: `NODE_ENV` only when an environment is given,
    /// `BROWSER` and `SERVER` always.
    pub fn for_target(env: Option<&str>, browser: bool, server: bool) -> Self {
        let mut rules = IndexMap::with_capacity(3);
        if let Some(env) = env {
            rules.insert(NODE_ENV_TOKEN.to_string(), json_string(env));
        }
        rules.insert(BROWSER_TOKEN.to_string(), browser.to_string());
        rules.insert(SERVER_TOKEN.to_string(), server.to_string());
        Self(rules)
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UglifyOptions {
    pub compress: CompressOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressOptions {
    /// Treat property access as side-effect free
    pub pure_getters: bool,
    #[serde(rename = "unsafe")]
    pub unsafe_: bool,
    pub unsafe_comps: bool,
    pub warnings: bool,
}

impl Default for UglifyOptions {
    fn default() -> Self {
        Self {
            compress: CompressOptions {
                pure_getters: true,
                unsafe_: true,
                unsafe_comps: true,
                warnings: false,
            },
        }
    }
}

/// Assemble the plugin pipeline for one bundle.
///
/// Order is fixed: resolve, transpile, CommonJS interop, replace, then the
/// minifier when `env` is exactly `"production"`.
pub fn pipeline(
    settings: &BuildSettings,
    env: Option<&str>,
    browser: bool,
    server: bool,
) -> Vec<Plugin> {
    let mut plugins = vec![
        Plugin::NodeResolve(NodeResolveOptions {
            jsnext: settings.jsnext,
        }),
        Plugin::Babel(BabelOptions {
            exclude: settings.transpile_exclude.clone(),
        }),
        Plugin::Commonjs,
        Plugin::Replace(ReplaceOptions::for_target(env, browser, server)),
    ];

    if env == Some(PRODUCTION) {
        plugins.push(Plugin::Uglify(UglifyOptions::default()));
    }

    tracing::trace!(
        plugins = ?plugins.iter().map(Plugin::name).collect::<Vec<_>>(),
        "assembled plugin pipeline"
    );
    plugins
}

fn json_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(plugins: &[Plugin]) -> Vec<&'static str> {
        plugins.iter().map(Plugin::name).collect()
    }

    #[test]
    fn replace_rules_quote_values_as_json() {
        let rules = ReplaceOptions::for_target(Some("production"), true, false);
        assert_eq!(rules.get(NODE_ENV_TOKEN), Some("\"production\""));
        assert_eq!(rules.get(BROWSER_TOKEN), Some("true"));
        assert_eq!(rules.get(SERVER_TOKEN), Some("false"));
        assert_eq!(rules.len(), 3);
    }

    #[test]
    fn replace_rules_skip_node_env_without_env() {
        let rules = ReplaceOptions::for_target(None, false, true);
        assert_eq!(rules.get(NODE_ENV_TOKEN), None);
        assert_eq!(rules.get(SERVER_TOKEN), Some("true"));
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn env_values_are_escaped() {
        let rules = ReplaceOptions::for_target(Some("te\"st"), true, false);
        assert_eq!(rules.get(NODE_ENV_TOKEN), Some(r#""te\"st""#));
    }

    #[test]
    fn pipeline_order_without_minifier() {
        let settings = BuildSettings::default();
        let plugins = pipeline(&settings, Some("development"), true, false);
        assert_eq!(names(&plugins), ["node-resolve", "babel", "commonjs", "replace"]);
    }

    #[test]
    fn minifier_only_for_exact_production() {
        let settings = BuildSettings::default();
        let plugins = pipeline(&settings, Some("production"), true, false);
        assert_eq!(names(&plugins).last(), Some(&"uglify"));
        assert_eq!(plugins.len(), 5);

        assert_eq!(pipeline(&settings, Some("Production"), true, false).len(), 4);
        assert_eq!(pipeline(&settings, None, true, false).len(), 4);
    }

    #[test]
    fn plugins_serialize_with_name_and_options() {
        let value = serde_json::to_value(Plugin::Uglify(UglifyOptions::default())).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "uglify",
                "options": {
                    "compress": {
                        "pure_getters": true,
                        "unsafe": true,
                        "unsafe_comps": true,
                        "warnings": false
                    }
                }
            })
        );

        let value = serde_json::to_value(Plugin::Commonjs).unwrap();
        assert_eq!(value, json!({ "name": "commonjs" }));

        let value = serde_json::to_value(Plugin::Replace(ReplaceOptions::for_target(
            None, true, false,
        )))
        .unwrap();
        assert_eq!(
            value["options"],
            json!({ "process.env.BROWSER": "true", "process.env.SERVER": "false" })
        );
    }
}
