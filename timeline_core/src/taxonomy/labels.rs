//! Display-name resolution for taxonomy nodes.
//!
//! Node display names are resolved once, at registry construction, through
//! the installed [`LabelSource`]. [`DefaultLabels`] carries the built-in
//! English labels and is the fallback for every key a custom source does
//! not cover.

use std::sync::OnceLock;

use thiserror::Error;

/// Source of localized display names, keyed by symbolic label keys.
pub trait LabelSource: Send + Sync {
    /// Localized label for a key, `None` to fall back to the defaults.
    fn label(&self, key: &str) -> Option<String>;
}

/// Errors from label-source installation.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("a label source is already installed")]
    AlreadyInstalled,
}

static SOURCE: OnceLock<Box<dyn LabelSource>> = OnceLock::new();

/// Install the process-wide label source.
///
/// Must happen before the first registry access: display names are resolved
/// once when the registry is built and never re-resolved.
pub fn install_label_source(source: Box<dyn LabelSource>) -> Result<(), LabelError> {
    SOURCE.set(source).map_err(|_| LabelError::AlreadyInstalled)
}

/// Resolve a label key through the installed source, falling back to the
/// built-in English labels.
pub(crate) fn resolve(key: &str) -> String {
    if let Some(source) = SOURCE.get() {
        if let Some(label) = source.label(key) {
            return label;
        }
    }
    DefaultLabels
        .label(key)
        .unwrap_or_else(|| key.to_string())
}

/// The built-in English labels.
pub struct DefaultLabels;

impl LabelSource for DefaultLabels {
    fn label(&self, key: &str) -> Option<String> {
        default_label(key).map(str::to_string)
    }
}

fn default_label(key: &str) -> Option<&'static str> {
    let label = match key {
        "level.root" => "Root Type",
        "level.base" => "Base Type",
        "level.sub" => "Sub Type",

        "root" => "Event Types",
        "file_system" => "File System",
        "web_activity" => "Web Activity",
        "misc_types" => "Misc Types",
        "custom_types" => "Custom Types",

        "file_system.modified" => "File Modified",
        "file_system.accessed" => "File Accessed",
        "file_system.created" => "File Created",
        "file_system.changed" => "File Changed",

        "web.downloads" => "Web Downloads",
        "web.cookies" => "Web Cookies",
        "web.bookmarks" => "Web Bookmarks",
        "web.history" => "Web History",
        "web.searches" => "Web Searches",
        "web.form_autofill" => "Web Form Autofill",
        "web.form_addresses" => "Web Form Addresses",

        "misc.messages" => "Messages",
        "misc.gps_routes" => "GPS Routes",
        "misc.gps_trackpoints" => "GPS Trackpoints",
        "misc.calls" => "Calls",
        "misc.email" => "Email",
        "misc.recent_documents" => "Recent Documents",
        "misc.installed_programs" => "Installed Programs",
        "misc.exif" => "Exif",
        "misc.devices_attached" => "Devices Attached",
        "misc.log_entry" => "Log Entry",
        "misc.registry" => "Registry",

        "custom.other" => "Other",
        "custom.user_created" => "User Created",

        _ => return None,
    };
    Some(label)
}
