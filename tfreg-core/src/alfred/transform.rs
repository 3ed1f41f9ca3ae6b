//! Registry results to script filter items
//!
//! Two presets exist. `Simple` opens the module's source repository
//! directly. `Rich` opens the registry page and moves the source repository
//! onto a modifier-key action.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::icons::{icon_path, resolve_icon, REGISTRY_LOGO_ICON};
use super::types::{non_empty, Icon, Item, ItemType, ModifierAction, Mods, ScriptFilter, Text};
use crate::registry::{RegistryModule, SearchResponse};

/// Badge prefixed to verified modules in the simple preset
pub const THUMBS_UP_BADGE: &str = "👍🏼 ";

/// Badge prefixed to verified modules in the rich preset
pub const STAR_BADGE: &str = "⭐ ";

/// Title of the row shown when a search has no hits
pub const NO_RESULTS_TITLE: &str = "No results found.";

/// Subtitle of the source modifier action; `{url}` is replaced
pub const OPEN_IN_BROWSER_SUBTITLE: &str = "Open {url} in your default browser.";

/// Destination of an item's default action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    /// The module's source repository
    Source,
    /// The module's page on the registry
    RegistryPage,
}

/// Modifier key carrying the secondary action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    Alt,
    #[default]
    Cmd,
}

/// Output preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Simple,
    Rich,
}

impl Variant {
    pub fn options(self, registry_url: &str) -> TransformOptions {
        match self {
            Variant::Simple => TransformOptions::simple(registry_url),
            Variant::Rich => TransformOptions::rich(registry_url),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Variant::Simple),
            "rich" => Ok(Variant::Rich),
            other => Err(format!("Unknown variant '{other}' (expected simple or rich)")),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Simple => f.write_str("simple"),
            Variant::Rich => f.write_str("rich"),
        }
    }
}

impl FromStr for ModifierKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alt" => Ok(ModifierKey::Alt),
            "cmd" => Ok(ModifierKey::Cmd),
            other => Err(format!("Unknown modifier '{other}' (expected alt or cmd)")),
        }
    }
}

/// Knobs that distinguish the presets
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOptions {
    /// Prefix for verified module titles, including any trailing space
    pub verified_badge: String,
    pub primary_action: PrimaryAction,
    /// Key for the open-source action; `None` emits no `mods`
    pub secondary_action: Option<ModifierKey>,
    /// Registry base URL used for module page links
    pub registry_url: String,
    pub icon_dir: String,
    pub no_results_title: String,
    /// Subtitle template for the secondary action
    pub secondary_subtitle: String,
}

impl TransformOptions {
    pub fn simple(registry_url: &str) -> Self {
        Self {
            verified_badge: THUMBS_UP_BADGE.to_string(),
            primary_action: PrimaryAction::Source,
            secondary_action: None,
            registry_url: registry_url.trim_end_matches('/').to_string(),
            icon_dir: "images".to_string(),
            no_results_title: NO_RESULTS_TITLE.to_string(),
            secondary_subtitle: OPEN_IN_BROWSER_SUBTITLE.to_string(),
        }
    }

    pub fn rich(registry_url: &str) -> Self {
        Self {
            verified_badge: STAR_BADGE.to_string(),
            primary_action: PrimaryAction::RegistryPage,
            secondary_action: Some(ModifierKey::Cmd),
            ..Self::simple(registry_url)
        }
    }

    /// Registry page for a module id
    pub fn module_page_url(&self, id: &str) -> String {
        format!("{}/modules/{id}", self.registry_url)
    }
}

/// Builds script filter documents from search responses
pub struct Transformer {
    options: TransformOptions,
}

impl Transformer {
    pub fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    /// Convert every module, in order; an empty result yields one invalid row
    pub fn transform(&self, response: &SearchResponse) -> ScriptFilter {
        if response.is_empty() {
            debug!("No modules in response, emitting placeholder item");
            return ScriptFilter::new(vec![self.no_results_item()]);
        }

        let items = response
            .modules
            .iter()
            .map(|module| self.module_item(module))
            .collect();

        ScriptFilter::new(items)
    }

    fn no_results_item(&self) -> Item {
        Item {
            title: self.options.no_results_title.clone(),
            valid: false,
            item_type: ItemType::Default,
            icon: Icon {
                path: icon_path(&self.options.icon_dir, REGISTRY_LOGO_ICON),
                icon_type: None,
            },
            ..Default::default()
        }
    }

    fn module_item(&self, module: &RegistryModule) -> Item {
        let primary = match self.options.primary_action {
            PrimaryAction::Source => module.source.clone(),
            PrimaryAction::RegistryPage => self.options.module_page_url(&module.id),
        };

        Item {
            uid: Some(module.id.clone()),
            title: self.title(module),
            subtitle: non_empty(&module.description),
            arg: non_empty(&primary),
            quicklook_url: non_empty(&primary),
            item_type: ItemType::Default,
            valid: true,
            icon: Icon {
                path: icon_path(&self.options.icon_dir, resolve_icon(&module.provider)),
                icon_type: None,
            },
            text: Text::same(&module.source),
            mods: self.mods(module),
        }
    }

    fn title(&self, module: &RegistryModule) -> String {
        let badge = if module.verified {
            self.options.verified_badge.as_str()
        } else {
            ""
        };
        format!("{badge}{}/{}", module.namespace, module.name)
    }

    fn mods(&self, module: &RegistryModule) -> Option<Mods> {
        let key = self.options.secondary_action?;
        // Nothing to open without a source URL
        let source = non_empty(&module.source)?;

        let action = ModifierAction {
            subtitle: self.options.secondary_subtitle.replace("{url}", &source),
            quicklook_url: Some(source.clone()),
            arg: source,
            valid: true,
        };

        let mods = match key {
            ModifierKey::Alt => Mods {
                alt: Some(action),
                cmd: None,
            },
            ModifierKey::Cmd => Mods {
                alt: None,
                cmd: Some(action),
            },
        };
        Some(mods)
    }
}
