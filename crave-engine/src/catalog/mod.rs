//! 餐厅与菜单目录（静态参考数据）
//!
//! The engine never mutates the catalog; it is handed to the caller so the
//! presentation layer can list restaurants and add items to the cart.

use std::collections::BTreeMap;

use shared::models::{MenuItem, Restaurant};

use crate::utils::money;

/// Read-only catalog lookup
pub trait Catalog: Send + Sync {
    /// All restaurants, in display order
    fn restaurants(&self) -> Vec<Restaurant>;

    fn restaurant(&self, restaurant_id: i64) -> Option<Restaurant>;

    /// Menu of one restaurant; empty for an unknown id
    fn menu_items(&self, restaurant_id: i64) -> Vec<MenuItem>;

    /// Find a menu item by catalog id within one restaurant
    fn menu_item(&self, restaurant_id: i64, item_id: i64) -> Option<MenuItem> {
        self.menu_items(restaurant_id)
            .into_iter()
            .find(|item| item.id == item_id)
    }
}

/// In-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    restaurants: Vec<Restaurant>,
    menus: BTreeMap<i64, Vec<MenuItem>>,
}

impl StaticCatalog {
    pub fn new(restaurants: Vec<Restaurant>, menus: BTreeMap<i64, Vec<MenuItem>>) -> Self {
        Self { restaurants, menus }
    }

    /// The three demo restaurants and their menus
    pub fn demo() -> Self {
        let restaurants = vec![
            Restaurant {
                id: 1,
                name: "Tony's Pizza Palace".into(),
                rating: 4.8,
                delivery_time: "25-35 min".into(),
                delivery_fee: money(299),
                image: "🍕".into(),
                category: "Italian".into(),
            },
            Restaurant {
                id: 2,
                name: "Burger Barn".into(),
                rating: 4.5,
                delivery_time: "20-30 min".into(),
                delivery_fee: money(199),
                image: "🍔".into(),
                category: "American".into(),
            },
            Restaurant {
                id: 3,
                name: "Healthy Harvest".into(),
                rating: 4.2,
                delivery_time: "15-25 min".into(),
                delivery_fee: money(349),
                image: "🥗".into(),
                category: "Healthy".into(),
            },
        ];

        let mut menus = BTreeMap::new();
        menus.insert(
            1,
            vec![
                MenuItem::new(11, "Meat Lovers Supreme", money(2499), 520, "🍕", 1),
                MenuItem::new(12, "Cheesy Garlic Breadsticks", money(899), 340, "🧄", 2),
                MenuItem::new(13, "Buffalo Wings (12pc)", money(1699), 680, "🍗", 1),
            ],
        );
        menus.insert(
            2,
            vec![
                MenuItem::new(21, "Triple Bacon Cheeseburger", money(1899), 890, "🍔", 1),
                MenuItem::new(22, "Loaded Chili Fries", money(1299), 620, "🍟", 1),
                MenuItem::new(23, "Chocolate Milkshake", money(699), 450, "🥤", 2),
            ],
        );
        menus.insert(
            3,
            vec![
                MenuItem::new(31, "Superfood Kale Salad", money(1499), 180, "🥗", 10),
                MenuItem::new(32, "Quinoa Power Bowl", money(1699), 220, "🍚", 9),
                MenuItem::new(33, "Green Goddess Smoothie", money(899), 140, "🥤", 10),
            ],
        );

        Self::new(restaurants, menus)
    }
}

impl Catalog for StaticCatalog {
    fn restaurants(&self) -> Vec<Restaurant> {
        self.restaurants.clone()
    }

    fn restaurant(&self, restaurant_id: i64) -> Option<Restaurant> {
        self.restaurants
            .iter()
            .find(|r| r.id == restaurant_id)
            .cloned()
    }

    fn menu_items(&self, restaurant_id: i64) -> Vec<MenuItem> {
        self.menus.get(&restaurant_id).cloned().unwrap_or_default()
    }
}
