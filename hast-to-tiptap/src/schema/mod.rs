//! Property→attribute lookup tables (the HTML and SVG schema sets)
//!
//! The attribute resolver consults one of two pre-built schema sets to turn
//! a source property name into its canonical attribute name plus encoding
//! flags. Lookup is case-insensitive on the normalized name. Names that
//! miss the tables resolve in two further steps:
//! - `data-*` properties convert between camel and kebab form
//!   (`dataTest` ⇄ `data-test`, `data123` → `data-123`);
//! - everything else maps to itself with no flags.
//!
//! Both sets share the aria and xml/xlink/xmlns rows; the HTML and SVG rows
//! differ. Tables are static data assembled once into lazy lookup maps.

mod aria;
mod html;
mod svg;

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const BOOLEAN: u8 = 1 << 0;
pub(crate) const BOOLEANISH: u8 = 1 << 1;
pub(crate) const OVERLOADED_BOOLEAN: u8 = 1 << 2;
pub(crate) const COMMA_SEPARATED: u8 = 1 << 3;
pub(crate) const MUST_USE_PROPERTY: u8 = 1 << 4;

/// One row of a schema table.
pub(crate) struct Def {
    pub property: &'static str,
    pub attribute: &'static str,
    pub flags: u8,
}

pub(crate) const fn def(property: &'static str, attribute: &'static str, flags: u8) -> Def {
    Def {
        property,
        attribute,
        flags,
    }
}

/// Rows shared by both schema sets beyond aria.
static XML_DEFS: &[Def] = &[
    def("xmlBase", "xml:base", 0),
    def("xmlLang", "xml:lang", 0),
    def("xmlSpace", "xml:space", 0),
];

static XLINK_DEFS: &[Def] = &[
    def("xLinkActuate", "xlink:actuate", 0),
    def("xLinkArcRole", "xlink:arcrole", 0),
    def("xLinkHref", "xlink:href", 0),
    def("xLinkRole", "xlink:role", 0),
    def("xLinkShow", "xlink:show", 0),
    def("xLinkTitle", "xlink:title", 0),
    def("xLinkType", "xlink:type", 0),
];

static XMLNS_DEFS: &[Def] = &[
    def("xmlns", "xmlns", 0),
    def("xmlnsXLink", "xmlns:xlink", 0),
];

/// Resolved encoding metadata for one property name.
#[derive(Debug, Clone)]
pub struct Info {
    property: Cow<'static, str>,
    attribute: Cow<'static, str>,
    flags: u8,
}

impl Info {
    fn known(def: &'static Def) -> Self {
        Info {
            property: Cow::Borrowed(def.property),
            attribute: Cow::Borrowed(def.attribute),
            flags: def.flags,
        }
    }

    fn derived(property: String, attribute: String) -> Self {
        Info {
            property: Cow::Owned(property),
            attribute: Cow::Owned(attribute),
            flags: 0,
        }
    }

    /// Canonical property name (`className`, `ariaChecked`, ...).
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Canonical attribute name (`class`, `aria-checked`, ...).
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Presence-only attribute: renders as `""` when set, absent when not.
    pub fn boolean(&self) -> bool {
        self.flags & BOOLEAN != 0
    }

    /// Always rendered; the textual form tracks the value, `false` included.
    pub fn booleanish(&self) -> bool {
        self.flags & BOOLEANISH != 0
    }

    /// Accepts either a presence flag or a regular value.
    pub fn overloaded_boolean(&self) -> bool {
        self.flags & OVERLOADED_BOOLEAN != 0
    }

    /// List values join with `", "` instead of a single space.
    pub fn comma_separated(&self) -> bool {
        self.flags & COMMA_SEPARATED != 0
    }

    /// Legacy object-model hint; carried in the table but not acted on by
    /// the resolver (the rows that set it are all `boolean` as well).
    pub fn must_use_property(&self) -> bool {
        self.flags & MUST_USE_PROPERTY != 0
    }
}

/// A pre-built, immutable schema set.
pub struct Schema {
    normal: HashMap<String, &'static Def>,
}

static HTML_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::build(&[XML_DEFS, XLINK_DEFS, XMLNS_DEFS, aria::DEFS, html::DEFS])
});

static SVG_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::build(&[XML_DEFS, XLINK_DEFS, XMLNS_DEFS, aria::DEFS, svg::DEFS])
});

static DATA_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^data[-\w.:]+$").unwrap());

impl Schema {
    /// The HTML schema set.
    pub fn html() -> &'static Schema {
        &HTML_SCHEMA
    }

    /// The SVG schema set.
    pub fn svg() -> &'static Schema {
        &SVG_SCHEMA
    }

    fn build(tables: &[&'static [Def]]) -> Schema {
        let mut normal = HashMap::new();
        for table in tables {
            for def in *table {
                normal.insert(normalize(def.property), def);
                normal.insert(normalize(def.attribute), def);
            }
        }
        Schema { normal }
    }

    /// Resolve a property name to its encoding metadata. Total: names
    /// missing from the table fall back to `data-*` derivation or to an
    /// unflagged identity mapping.
    pub fn find(&self, name: &str) -> Info {
        let normal = normalize(name);
        if let Some(def) = self.normal.get(normal.as_str()) {
            return Info::known(def);
        }

        if normal.len() > 4 && normal.starts_with("data") && DATA_NAME.is_match(name) {
            if name.as_bytes()[4] == b'-' {
                // Attribute form given: derive the camel-cased property.
                let rest = camel(&name[5..]);
                let mut property = String::with_capacity(4 + rest.len());
                property.push_str("data");
                let mut chars = rest.chars();
                if let Some(first) = chars.next() {
                    property.extend(first.to_uppercase());
                    property.push_str(chars.as_str());
                }
                return Info::derived(property, name.to_string());
            }
            // Property form given: derive the kebab-cased attribute.
            let mut dashes = kebab(&name[4..]);
            if !dashes.starts_with('-') {
                dashes.insert(0, '-');
            }
            return Info::derived(name.to_string(), format!("data{dashes}"));
        }

        Info::derived(name.to_string(), name.to_string())
    }
}

fn normalize(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// `FooBar` → `-foo-bar`-style form (each uppercase becomes a dash pair).
fn kebab(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// `foo-bar` → `fooBar`. Only `-` followed by a lowercase letter collapses.
fn camel(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '-' {
            match chars.peek() {
                Some(next) if next.is_ascii_lowercase() => {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_property_and_attribute() {
        let info = Schema::html().find("className");
        assert_eq!(info.property(), "className");
        assert_eq!(info.attribute(), "class");

        let info = Schema::html().find("class");
        assert_eq!(info.attribute(), "class");

        let info = Schema::html().find("htmlFor");
        assert_eq!(info.attribute(), "for");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(Schema::html().find("CLASS").attribute(), "class");
        assert_eq!(Schema::html().find("allowfullscreen").property(), "allowFullScreen");
    }

    #[test]
    fn test_flags() {
        assert!(Schema::html().find("disabled").boolean());
        assert!(Schema::html().find("ariaChecked").booleanish());
        assert!(Schema::html().find("download").overloaded_boolean());
        assert!(Schema::html().find("accept").comma_separated());
        assert!(!Schema::html().find("value").boolean());

        let checked = Schema::html().find("checked");
        assert!(checked.boolean());
        assert!(checked.must_use_property());
    }

    #[test]
    fn test_data_properties() {
        let info = Schema::html().find("dataTest");
        assert_eq!(info.property(), "dataTest");
        assert_eq!(info.attribute(), "data-test");
        assert!(!info.boolean() && !info.booleanish());

        let info = Schema::html().find("data-foo-bar");
        assert_eq!(info.property(), "dataFooBar");
        assert_eq!(info.attribute(), "data-foo-bar");

        let info = Schema::html().find("data123");
        assert_eq!(info.attribute(), "data-123");

        let info = Schema::html().find("dataFooBar");
        assert_eq!(info.attribute(), "data-foo-bar");
    }

    #[test]
    fn test_unknown_names_map_to_themselves() {
        let info = Schema::html().find("unknownThing");
        assert_eq!(info.property(), "unknownThing");
        assert_eq!(info.attribute(), "unknownThing");
        assert!(!info.boolean());
        assert!(!info.comma_separated());
    }

    #[test]
    fn test_svg_naming() {
        assert_eq!(Schema::svg().find("viewBox").attribute(), "viewBox");
        assert_eq!(Schema::svg().find("strokeWidth").attribute(), "stroke-width");
        assert!(Schema::svg().find("strokeDashArray").comma_separated());
        assert_eq!(Schema::svg().find("className").attribute(), "class");
        assert_eq!(Schema::svg().find("xLinkHref").attribute(), "xlink:href");
    }

    #[test]
    fn test_aria_shared_across_sets() {
        assert!(Schema::svg().find("ariaHidden").booleanish());
        assert_eq!(Schema::svg().find("ariaLabelledBy").attribute(), "aria-labelledby");
        assert_eq!(Schema::html().find("role").attribute(), "role");
    }
}
