//! Conversion options shared by every rewrite pass.
//!
//! Every setting has a default, so a configuration file only needs to name
//! the values it overrides. Per-mode tables merge over that mode's defaults.

use serde::{Deserialize, Deserializer, Serialize};

use crate::case::to_pascal_case;
use crate::pipeline::ConversionMode;

/// Substring retargeting applied to relative links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkRetarget {
    /// Prefix to replace (e.g. `/help/`).
    pub from: String,
    /// Replacement prefix (e.g. `/help-beta/`).
    pub to: String,
}

impl Default for LinkRetarget {
    fn default() -> Self {
        Self {
            from: "/help/".to_string(),
            to: "/help-beta/".to_string(),
        }
    }
}

/// The hand-authored emoticon table macro and the component that replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmoticonTable {
    /// Macro token as it appears after brace escaping.
    pub token: String,
    /// Component name emitted in place of the token.
    pub component: String,
    /// Module path the component is imported from.
    pub import_path: String,
}

impl EmoticonTable {
    /// Self-closing tag emitted for the table.
    pub fn tag(&self) -> String {
        format!("<{} />", self.component)
    }

    /// Import declaration registered when the table is expanded.
    pub fn import_statement(&self) -> String {
        format!("import {} from \"{}\"", self.component, self.import_path)
    }
}

impl Default for EmoticonTable {
    fn default() -> Self {
        Self {
            token: r"\{\{ emoticon_translations \}\}".to_string(),
            component: "EmoticonTranslations".to_string(),
            import_path: "../../components/EmoticonTranslations.astro".to_string(),
        }
    }
}

/// An icon font whose `<i class="...">` tags are replaced by icon components.
///
/// In configuration only `markerClass` is required; the component prefix
/// defaults to the PascalCased marker and the collection to the marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IconFontConfig", rename_all = "camelCase")]
pub struct IconFont {
    /// Marker class every icon of the font carries (e.g. `fa`).
    pub marker_class: String,
    /// Prefix of generated component names (e.g. `Fa`).
    pub component_prefix: String,
    /// Collection name in the virtual icon path `~icons/<collection>/<name>`.
    pub collection: String,
}

impl IconFont {
    /// Generic Font Awesome icons: `<i class="fa fa-bars"></i>`.
    pub fn font_awesome() -> Self {
        Self {
            marker_class: "fa".to_string(),
            component_prefix: "Fa".to_string(),
            collection: "fa".to_string(),
        }
    }

    /// Product icons: `<i class="zulip-icon zulip-icon-gear"></i>`.
    pub fn zulip_icon() -> Self {
        Self {
            marker_class: "zulip-icon".to_string(),
            component_prefix: "ZulipIcon".to_string(),
            collection: "zulip-icon".to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IconFontConfig {
    marker_class: String,
    component_prefix: Option<String>,
    collection: Option<String>,
}

impl From<IconFontConfig> for IconFont {
    fn from(config: IconFontConfig) -> Self {
        Self {
            component_prefix: config
                .component_prefix
                .unwrap_or_else(|| to_pascal_case(&config.marker_class)),
            collection: config
                .collection
                .unwrap_or_else(|| config.marker_class.clone()),
            marker_class: config.marker_class,
        }
    }
}

/// Settings that differ between standalone documents and fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeOptions {
    /// Base path used in transclusion imports (`./include` or `.`).
    pub import_base: String,
    /// 1-indexed line the import block is injected at.
    pub import_line: usize,
    /// Relative path that replaces the legacy image folder.
    pub image_prefix: String,
}

impl ModeOptions {
    /// Defaults for documents rendered as their own page.
    pub fn standalone() -> Self {
        Self {
            import_base: "./include".to_string(),
            import_line: 2,
            image_prefix: "../../../../static/images/help-beta".to_string(),
        }
    }

    /// Defaults for fragments, which live one directory deeper.
    pub fn fragment() -> Self {
        Self {
            import_base: ".".to_string(),
            import_line: 1,
            image_prefix: "../../../../../static/images/help-beta".to_string(),
        }
    }
}

/// Partial mode settings; missing keys fall back to the mode's defaults.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModeOverrides {
    import_base: Option<String>,
    import_line: Option<usize>,
    image_prefix: Option<String>,
}

impl ModeOverrides {
    fn apply(self, mut base: ModeOptions) -> ModeOptions {
        if let Some(import_base) = self.import_base {
            base.import_base = import_base;
        }
        if let Some(import_line) = self.import_line {
            base.import_line = import_line;
        }
        if let Some(image_prefix) = self.image_prefix {
            base.image_prefix = image_prefix;
        }
        base
    }
}

fn standalone_mode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ModeOptions, D::Error> {
    let overrides = ModeOverrides::deserialize(deserializer)?;
    Ok(overrides.apply(ModeOptions::standalone()))
}

fn fragment_mode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ModeOptions, D::Error> {
    let overrides = ModeOverrides::deserialize(deserializer)?;
    Ok(overrides.apply(ModeOptions::fragment()))
}

/// Full option set for converting documents in either mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Relative link retargeting.
    pub links: LinkRetarget,
    /// Legacy image folder rewritten by the image pass. Only references
    /// below this exact sub-path are touched.
    pub legacy_image_dir: String,
    /// Emoticon table expansion (standalone documents only).
    pub emoticon: EmoticonTable,
    /// Icon fonts, each run as its own replacement pass in order.
    pub icon_fonts: Vec<IconFont>,
    /// Standalone document settings.
    #[serde(deserialize_with = "standalone_mode")]
    pub standalone: ModeOptions,
    /// Fragment settings.
    #[serde(deserialize_with = "fragment_mode")]
    pub fragment: ModeOptions,
}

impl ConvertOptions {
    /// Returns the settings for `mode`.
    pub fn mode(&self, mode: ConversionMode) -> &ModeOptions {
        match mode {
            ConversionMode::Standalone => &self.standalone,
            ConversionMode::Fragment => &self.fragment,
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            links: LinkRetarget::default(),
            legacy_image_dir: "/static/images/help-beta".to_string(),
            emoticon: EmoticonTable::default(),
            icon_fonts: vec![IconFont::font_awesome(), IconFont::zulip_icon()],
            standalone: ModeOptions::standalone(),
            fragment: ModeOptions::fragment(),
        }
    }
}
