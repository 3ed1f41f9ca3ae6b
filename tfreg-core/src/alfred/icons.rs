//! Provider icon resolution

/// Provider keys that ship their own icon under the icon directory
pub const KNOWN_PROVIDER_ICONS: &[&str] = &[
    "alibaba",
    "aws",
    "azurerm",
    "digitalocean",
    "github",
    "google",
    "hashicorp",
    "kubernetes",
    "opc",
    "terraform",
];

/// Icon used for any provider not in [`KNOWN_PROVIDER_ICONS`]
pub const GENERIC_ICON: &str = "generic";

/// Icon used for the "no results" row
pub const REGISTRY_LOGO_ICON: &str = "terraform";

/// Map a provider to its icon key (case-sensitive, never fails)
pub fn resolve_icon(provider: &str) -> &'static str {
    KNOWN_PROVIDER_ICONS
        .iter()
        .copied()
        .find(|known| *known == provider)
        .unwrap_or(GENERIC_ICON)
}

/// Relative path of the icon file for `key`
pub fn icon_path(icon_dir: &str, key: &str) -> String {
    format!("{}/{key}.png", icon_dir.trim_end_matches('/'))
}
