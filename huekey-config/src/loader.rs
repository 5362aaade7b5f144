use anyhow::{Context, anyhow};
use huekey_core::ColorAttributeSettings;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::info;

/// Environment variable naming a TOML or JSON settings file.
pub const PATH_VAR: &str = "HUEKEY_ATTRIBUTE_CONFIG_PATH";
/// Environment variable holding inline JSON settings.
pub const JSON_VAR: &str = "HUEKEY_ATTRIBUTE_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "color_attribute.toml",
    "color_attribute.json",
    "config/color_attribute.toml",
    "config/color_attribute.json",
];

/// Source that produced the attribute settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Load settings using environment variables.
/// Evaluation order:
/// 1) `$HUEKEY_ATTRIBUTE_CONFIG_PATH` (TOML or JSON file),
/// 2) `$HUEKEY_ATTRIBUTE_CONFIG_JSON` (inline JSON),
/// 3) the first default file found below the working directory,
/// 4) defaults.
pub fn load_from_env() -> anyhow::Result<(ColorAttributeSettings, SettingsSource)> {
    let cwd = env::current_dir().context("failed to resolve working directory")?;
    load_from_sources(env::var(PATH_VAR).ok(), env::var(JSON_VAR).ok(), &cwd)
}

/// [`load_from_env`] with the environment passed in explicitly.
pub fn load_from_sources(
    path_var: Option<String>,
    inline_json: Option<String>,
    search_root: &Path,
) -> anyhow::Result<(ColorAttributeSettings, SettingsSource)> {
    let (settings, source) = resolve(path_var, inline_json, search_root)?;
    settings
        .validate()
        .with_context(|| format!("invalid color attribute settings from {source:?}"))?;

    info!(
        source = ?source,
        colname = %settings.colname,
        hex_policy = ?settings.hex_policy,
        "loaded color attribute settings"
    );
    Ok((settings, source))
}

fn resolve(
    path_var: Option<String>,
    inline_json: Option<String>,
    search_root: &Path,
) -> anyhow::Result<(ColorAttributeSettings, SettingsSource)> {
    if let Some(path_str) = path_var
        && !path_str.trim().is_empty()
    {
        let path = PathBuf::from(path_str);
        let settings = load_from_file(&path)?;
        return Ok((settings, SettingsSource::EnvPath(path)));
    }

    if let Some(raw) = inline_json
        && !raw.trim().is_empty()
    {
        let parsed = parse_json(&raw).with_context(|| format!("failed to parse {JSON_VAR}"))?;
        return Ok((parsed, SettingsSource::EnvInline));
    }

    if let Some(path) = find_default_file(search_root) {
        let settings = load_from_file(&path)?;
        return Ok((settings, SettingsSource::File(path)));
    }

    Ok((ColorAttributeSettings::default(), SettingsSource::Default))
}

pub fn load_from_file(path: &Path) -> anyhow::Result<ColorAttributeSettings> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read color attribute settings from {}", path.display())
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents)
            .with_context(|| format!("invalid color attribute settings {}", path.display())),
        Some("toml") | Some("tml") => toml::from_str(&contents).map_err(|err| {
            anyhow!(
                "invalid color attribute settings {}: {}",
                path.display(),
                err
            )
        }),
        _ => parse_from_str(&contents, &path.display().to_string()),
    }
}

pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<ColorAttributeSettings> {
    // Try TOML first, then JSON for convenience.
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse color attribute settings {}: toml error: {}; json error: {}",
                origin,
                toml_err,
                json_err
            )
        })
    })
}

pub fn parse_json(raw: &str) -> anyhow::Result<ColorAttributeSettings> {
    serde_json::from_str(raw)
        .map_err(|err| anyhow!("invalid color attribute settings json: {err}"))
}

fn find_default_file(root: &Path) -> Option<PathBuf> {
    DEFAULT_CANDIDATES
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| path.exists())
}
