//! Catalog provider - menu items consumed by the cashier UI
//!
//! The engine treats the catalog as read-mostly and eventually consistent:
//! orders snapshot name/price at add time, so a provider refresh never
//! rewrites a placed line item.

use rust_decimal::Decimal;
use shared::models::MenuItem;

/// Source of purchasable menu items
pub trait CatalogProvider: Send + Sync {
    /// All menu items, in display order
    fn menu_items(&self) -> Vec<MenuItem>;

    /// Look up a single item by catalog ID
    fn find(&self, id: &str) -> Option<MenuItem> {
        self.menu_items().into_iter().find(|i| i.id == id)
    }

    /// Distinct categories, first-seen order preserved
    fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for item in self.menu_items() {
            if !seen.contains(&item.category) {
                seen.push(item.category);
            }
        }
        seen
    }
}

/// In-memory catalog seeded at startup
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: Vec<MenuItem>,
}

impl StaticCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The reference deployment's 12-item demo menu
    pub fn demo() -> Self {
        fn item(id: &str, name: &str, cents: i64, category: &str, description: &str) -> MenuItem {
            MenuItem {
                id: id.to_string(),
                name: name.to_string(),
                price: Decimal::new(cents, 2),
                category: category.to_string(),
                image: Some("/placeholder.svg".to_string()),
                description: Some(description.to_string()),
            }
        }

        Self::new(vec![
            item("1", "Classic Burger", 12_99, "Main Course",
                "Juicy beef patty with lettuce, tomato, and our special sauce"),
            item("2", "Caesar Salad", 9_99, "Starters",
                "Crisp romaine lettuce with creamy Caesar dressing, croutons, and parmesan"),
            item("3", "Margherita Pizza", 14_99, "Main Course",
                "Fresh mozzarella, tomato sauce, and basil on a thin crust"),
            item("4", "French Fries", 4_99, "Sides",
                "Crispy golden fries served with ketchup"),
            item("5", "Chocolate Lava Cake", 7_99, "Desserts",
                "Warm chocolate cake with a molten center, served with vanilla ice cream"),
            item("6", "Iced Tea", 2_99, "Drinks",
                "Refreshing iced tea with lemon"),
            item("7", "Craft Beer", 6_99, "Drinks",
                "Local craft beer on tap"),
            item("8", "Chicken Wings", 11_99, "Starters",
                "Crispy wings tossed in your choice of sauce"),
            item("9", "Fish & Chips", 15_99, "Main Course",
                "Beer-battered fish with thick-cut fries and tartar sauce"),
            item("10", "Onion Rings", 5_99, "Sides",
                "Crispy battered onion rings"),
            item("11", "Cheesecake", 6_99, "Desserts",
                "New York style cheesecake with berry compote"),
            item("12", "Espresso", 3_49, "Drinks",
                "Double shot of our premium espresso blend"),
        ])
    }
}

impl CatalogProvider for StaticCatalog {
    fn menu_items(&self) -> Vec<MenuItem> {
        self.items.clone()
    }
}
