//! Render-time template selection.
//!
//! The host's rendering pipeline hands each displayed value to
//! [`select_template`], which decides between three terminal outcomes: the
//! host catalog template for a masquerading object, an automatic key/value
//! listing for a bare dynamic object, and a fixed placeholder label for
//! anything this crate did not produce. Selection is pure and
//! deterministic; the same value and host always yield the same outcome.

use crate::value::{TypeName, Value};

/// Label rendered for values that did not come out of this crate.
pub const UNKNOWN_LABEL: &str = "<unknown>";

/// Host designer services consumed during template selection.
///
/// The visual template type is opaque to this crate; templates are only
/// looked up or wrapped here, never inspected.
pub trait RenderHost {
    /// Host-defined recipe for rendering a value on screen.
    type Template;

    /// Look up the template registered for a declared type.
    ///
    /// Returning `None` is the host's own missing-template outcome;
    /// [`select_template`] passes it through unchanged rather than treating
    /// it as an error.
    fn find_template_for_type(&self, target: &TypeName) -> Option<Self::Template>;

    /// Wrap plain text as a minimal visual template.
    fn render_plain_text(&self, text: &str) -> Self::Template;
}

/// Select the visual template for a runtime value.
///
/// - A dynamic or masked object with a masquerade type defers to the host
///   catalog keyed by that type. A missing catalog entry surfaces as the
///   host's missing outcome (`None`), untouched.
/// - A dynamic or masked object without one renders as a plain-text
///   listing of `key: value` lines in enumeration order.
/// - Every other value shape renders as the fixed [`UNKNOWN_LABEL`].
pub fn select_template<H: RenderHost>(value: &Value, host: &H) -> Option<H::Template> {
    match value {
        Value::Object(object) => match object.masquerade_type() {
            Some(target) => {
                log::debug!("template lookup for masquerade type {target}");
                host.find_template_for_type(target)
            }
            None => Some(host.render_plain_text(&key_value_label(object.iter()))),
        },
        Value::Masked(masked) => match masked.declared_type() {
            Some(target) => {
                log::debug!("template lookup for declared type {target}");
                host.find_template_for_type(target)
            }
            None => Some(host.render_plain_text(&key_value_label(masked.iter()))),
        },
        other => {
            log::debug!("no template rule for {other:?}, using the unknown label");
            Some(host.render_plain_text(UNKNOWN_LABEL))
        }
    }
}

/// Debug-view label for a schema-less object with no declared shape: one
/// `key: value` line per entry, in enumeration order.
fn key_value_label<'a>(entries: impl Iterator<Item = (&'a str, &'a Value)>) -> String {
    entries
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
