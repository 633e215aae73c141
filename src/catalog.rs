//! Product catalog and the view state over it.
//!
//! The product table is static reference data (the TUI analog of cards read
//! from page markup); product names are unique and are the keys used by
//! trending counts, favorites, the comparison list, and the quiz rule tables.

use serde::{Deserialize, Serialize};

use crate::trending::TrendingCounts;

/// Product category, used for filtering and the category chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    HeadStraps,
    Controllers,
    Tracking,
    ChairsMounts,
    Audio,
    Hygiene,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::HeadStraps,
        Category::Controllers,
        Category::Tracking,
        Category::ChairsMounts,
        Category::Audio,
        Category::Hygiene,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::HeadStraps => "Head Straps",
            Category::Controllers => "Controllers",
            Category::Tracking => "Tracking",
            Category::ChairsMounts => "Chairs & Mounts",
            Category::Audio => "Audio",
            Category::Hygiene => "Covers & Hygiene",
        }
    }
}

/// A catalog entry. `name` is the unique key.
#[derive(Debug, Clone)]
pub struct Product {
    pub name: &'static str,
    pub category: Category,
    pub price_usd: u32,
    pub blurb: &'static str,
}

impl Product {
    /// Full searchable text: name, category, and blurb.
    fn full_text(&self) -> String {
        format!("{} {} {}", self.name, self.category.name(), self.blurb)
    }
}

/// The full product table in original display order.
pub const CATALOG: &[Product] = &[
    Product {
        name: "KIWI Design K4 Mini Head Strap",
        category: Category::HeadStraps,
        price_usd: 40,
        blurb: "Lightweight balanced strap with quick-adjust dial",
    },
    Product {
        name: "BOBOVR M3 Pro Head Strap",
        category: Category::HeadStraps,
        price_usd: 50,
        blurb: "Battery head strap with swappable power packs",
    },
    Product {
        name: "BOBOVR S3 Pro Head Strap",
        category: Category::HeadStraps,
        price_usd: 70,
        blurb: "Active cooling halo strap for long sessions",
    },
    Product {
        name: "VR Gun Stock (AMVR)",
        category: Category::Controllers,
        price_usd: 90,
        blurb: "Magnetic rifle stock for shooter precision",
    },
    Product {
        name: "Shadow Shot VR Bow",
        category: Category::Controllers,
        price_usd: 110,
        blurb: "Haptic archery bow with real draw tension",
    },
    Product {
        name: "AMVR Controller Grips",
        category: Category::Controllers,
        price_usd: 25,
        blurb: "Knuckle grips with adjustable straps",
    },
    Product {
        name: "VIVE Ultimate Tracker",
        category: Category::Tracking,
        price_usd: 200,
        blurb: "Self-tracking inside-out body tracker",
    },
    Product {
        name: "SlimeVR Full-Body Tracker Set",
        category: Category::Tracking,
        price_usd: 250,
        blurb: "Wireless IMU full-body tracking set",
    },
    Product {
        name: "Roto VR Explorer Chair",
        category: Category::ChairsMounts,
        price_usd: 800,
        blurb: "Motorized 360° chair that turns with your head",
    },
    Product {
        name: "Wall Mount Storage Hook",
        category: Category::ChairsMounts,
        price_usd: 15,
        blurb: "Padded headset and controller wall dock",
    },
    Product {
        name: "Logitech Chorus Off-Ear Audio",
        category: Category::Audio,
        price_usd: 100,
        blurb: "Open-back off-ear speakers for Quest",
    },
    Product {
        name: "KIWI Design On-Ear Audio Strap",
        category: Category::Audio,
        price_usd: 90,
        blurb: "Head strap with integrated on-ear audio",
    },
    Product {
        name: "VR Ease Silicone Face Cover",
        category: Category::Hygiene,
        price_usd: 20,
        blurb: "Sweat-proof wipeable facial interface cover",
    },
    Product {
        name: "Lens Cleaning Kit",
        category: Category::Hygiene,
        price_usd: 12,
        blurb: "Microfiber cloths and anti-fog spray",
    },
    Product {
        name: "Prescription Lens Inserts",
        category: Category::Hygiene,
        price_usd: 60,
        blurb: "Custom magnetic prescription lens adapters",
    },
];

/// Look up a product by its unique name.
pub fn product_by_name(name: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.name == name)
}

/// Sort modes for the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Original document order.
    #[default]
    Default,
    /// Lexicographic by name.
    Alphabetical,
    /// Descending trending count; ties keep their current relative order.
    Popularity,
    /// Lexicographic by category name.
    Category,
}

impl SortMode {
    pub fn name(&self) -> &'static str {
        match self {
            SortMode::Default => "Featured",
            SortMode::Alphabetical => "A-Z",
            SortMode::Popularity => "Popular",
            SortMode::Category => "Category",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortMode::Default => SortMode::Alphabetical,
            SortMode::Alphabetical => SortMode::Popularity,
            SortMode::Popularity => SortMode::Category,
            SortMode::Category => SortMode::Default,
        }
    }
}

/// View state over the catalog: search text, category filter, sort mode.
///
/// `order` holds catalog indices; sorting permutes it and the filter is then
/// applied on top, mirroring the original sort-then-refilter behavior.
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub query: String,
    pub filter: Option<Category>,
    pub sort: SortMode,
    /// Cursor position within the visible rows.
    pub selected: usize,
    order: Vec<usize>,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            filter: None,
            sort: SortMode::Default,
            selected: 0,
            order: (0..CATALOG.len()).collect(),
        }
    }

    /// Product currently under the cursor, if any row is visible.
    pub fn selected_product(&self) -> Option<&'static Product> {
        let visible = self.visible();
        visible.get(self.selected.min(visible.len().saturating_sub(1))).copied()
    }

    /// Cycle the category filter: All -> each category -> All.
    pub fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None => Some(Category::ALL[0]),
            Some(current) => {
                let pos = Category::ALL.iter().position(|&c| c == current).unwrap_or(0);
                Category::ALL.get(pos + 1).copied()
            }
        };
        self.selected = 0;
    }

    /// Re-sort the underlying order for the given mode.
    pub fn set_sort(&mut self, mode: SortMode, trending: &TrendingCounts) {
        self.sort = mode;
        match mode {
            SortMode::Default => {
                self.order = (0..CATALOG.len()).collect();
            }
            SortMode::Alphabetical => {
                self.order.sort_by(|&a, &b| CATALOG[a].name.cmp(CATALOG[b].name));
            }
            SortMode::Popularity => {
                // Stable sort keeps tied items in their current order
                self.order.sort_by(|&a, &b| {
                    trending
                        .count(CATALOG[b].name)
                        .cmp(&trending.count(CATALOG[a].name))
                });
            }
            SortMode::Category => {
                self.order
                    .sort_by(|&a, &b| CATALOG[a].category.name().cmp(CATALOG[b].category.name()));
            }
        }
    }

    /// Cycle to the next sort mode.
    pub fn cycle_sort(&mut self, trending: &TrendingCounts) {
        self.set_sort(self.sort.next(), trending);
    }

    fn matches(&self, product: &Product) -> bool {
        let category_ok = match self.filter {
            None => true,
            Some(category) => product.category == category,
        };
        if !category_ok {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        product
            .full_text()
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    /// Visible products in current sort order with the active filter applied.
    pub fn visible(&self) -> Vec<&'static Product> {
        self.order
            .iter()
            .map(|&i| &CATALOG[i])
            .filter(|p| self.matches(p))
            .collect()
    }
}
