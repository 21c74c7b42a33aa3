//! Read-only menu catalog: categories and their submenu items.
//!
//! The catalog is static data defined once at start-up. Lookups here are pure
//! and never touch the store; see [`crate::selection`] for the stateful side.

/// Opaque icon reference resolved by the presentation layer.
///
/// The core only passes these through; it never inspects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconId(pub &'static str);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub label: &'static str,
    pub icon: IconId,
    /// Present iff the item is a toggle.
    pub setting_key: Option<&'static str>,
    pub color_value: Option<&'static str>,
    pub environment_preset: Option<&'static str>,
}

impl Item {
    pub const fn plain(label: &'static str, icon: &'static str) -> Self {
        Self {
            label,
            icon: IconId(icon),
            setting_key: None,
            color_value: None,
            environment_preset: None,
        }
    }

    pub const fn toggle(label: &'static str, icon: &'static str, setting_key: &'static str) -> Self {
        Self {
            setting_key: Some(setting_key),
            ..Self::plain(label, icon)
        }
    }

    pub const fn color(label: &'static str, icon: &'static str, hex: &'static str) -> Self {
        Self {
            color_value: Some(hex),
            ..Self::plain(label, icon)
        }
    }

    pub const fn environment(
        label: &'static str,
        icon: &'static str,
        preset: &'static str,
    ) -> Self {
        Self {
            environment_preset: Some(preset),
            ..Self::plain(label, icon)
        }
    }

    #[inline]
    pub fn is_toggleable(&self) -> bool {
        self.setting_key.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconId,
    pub items: &'static [Item],
}

/// Lookup facade over a fixed, ordered list of categories.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    categories: &'static [Category],
}

impl Catalog {
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    /// The catalog shipped with the viewer.
    pub const fn standard() -> Self {
        Self::new(STANDARD_CATEGORIES)
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn category(&self, id: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Items of a category in catalog order; empty for unknown ids.
    pub fn items(&self, id: &str) -> &'static [Item] {
        self.category(id).map(|c| c.items).unwrap_or(&[])
    }

    pub fn has_submenu(&self, id: &str) -> bool {
        !self.items(id).is_empty()
    }

    pub fn item(&self, id: &str, label: &str) -> Option<&'static Item> {
        self.items(id).iter().find(|i| i.label == label)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    /// Every setting key declared by a toggleable item, in catalog order.
    pub fn setting_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .filter_map(|i| i.setting_key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD_CATEGORIES: &[Category] = &[
    Category {
        id: "shapes",
        label: "Shapes",
        icon: IconId("box"),
        items: &[
            Item::plain("Cube", "box"),
            Item::plain("Cuboid", "rectangle-horizontal"),
            Item::plain("Sphere", "circle"),
            Item::plain("Cylinder", "cylinder"),
            Item::plain("Cone", "triangle"),
            Item::plain("Square Pyramid", "pyramid"),
            Item::plain("Triangular Pyramid", "triangle"),
            Item::plain("Tetrahedron", "diamond"),
            Item::plain("Triangular Prism", "triangle"),
            Item::plain("Hexagonal Prism", "hexagon"),
            Item::plain("Pentagonal Prism", "pentagon"),
            Item::plain("Torus", "torus"),
            Item::plain("Ellipsoid", "ellipsis"),
        ],
    },
    Category {
        id: "colors",
        label: "Colors",
        icon: IconId("palette"),
        items: &[
            Item::color("Cyan", "palette", "#64ffda"),
            Item::color("Red", "palette", "#ff6b6b"),
            Item::color("Blue", "palette", "#4dabf7"),
            Item::color("Green", "palette", "#51cf66"),
            Item::color("Purple", "palette", "#9775fa"),
            Item::color("Orange", "palette", "#ff922b"),
            Item::color("Pink", "palette", "#f783ac"),
            Item::color("Yellow", "palette", "#ffd43b"),
            Item::color("Teal", "palette", "#20c997"),
            Item::color("Indigo", "palette", "#748ffc"),
        ],
    },
    Category {
        id: "lighting",
        label: "Lighting",
        icon: IconId("sun"),
        items: &[
            Item::environment("Studio", "sun", "studio"),
            Item::environment("City", "building", "city"),
            Item::environment("Dawn", "sunrise", "dawn"),
            Item::environment("Forest", "trees", "forest"),
            Item::environment("Lobby", "map-pin", "lobby"),
            Item::environment("Park", "trees", "park"),
            Item::environment("Night", "moon", "night"),
            Item::environment("Sunset", "sunset", "sunset"),
        ],
    },
    Category {
        id: "option4",
        label: "Option4",
        icon: IconId("target"),
        items: &[
            Item::plain("Target", "target"),
            Item::plain("Award", "award"),
            Item::plain("Shield", "shield"),
            Item::plain("Diamond", "diamond"),
            Item::plain("Star", "star"),
        ],
    },
    Category {
        id: "option5",
        label: "Option5",
        icon: IconId("zap"),
        items: &[
            Item::plain("Zap", "zap"),
            Item::plain("Heart", "heart"),
            Item::plain("Target", "target"),
            Item::plain("Award", "award"),
        ],
    },
    Category {
        id: "settings",
        label: "Settings",
        icon: IconId("settings"),
        items: &[
            Item::toggle("Auto Rotate", "settings", "auto-rotate"),
            Item::toggle("Show Grid", "wrench", "show-grid"),
            Item::toggle("Debug Mode", "tool", "debug-mode"),
        ],
    },
];
