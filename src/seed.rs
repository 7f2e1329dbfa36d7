//! Seed Data
//!
//! Compiled-in collections the screen is constructed from and reset to on
//! refresh. Injected into the screen at construction so tests can supply
//! alternative seeds.

use crate::models::ListItem;

/// Menu rows: (id, name, category, price, likes, image)
const MENU_ROWS: &[(&str, &str, &str, &str, u32, &str)] = &[
    (
        "1",
        "Margherita Pizza",
        "Pizza",
        "$12.99",
        120,
        "https://images.unsplash.com/photo-1564936281291-294551497d81?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8NHx8TWFyZ2hlcml0YSUyMFBpenphfGVufDB8fDB8fHww",
    ),
    (
        "2",
        "Cheeseburger",
        "Burger",
        "$8.99",
        95,
        "https://images.unsplash.com/photo-1572802419224-296b0aeee0d9?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8Mnx8Q2hlZXNlYnVyZ2VyfGVufDB8fDB8fHww",
    ),
    (
        "3",
        "Caesar Salad",
        "Salad",
        "$7.49",
        80,
        "https://images.unsplash.com/photo-1607532941433-304659e8198a?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MTF8fENhZXNhciUyMFNhbGFkfGVufDB8fDB8fHww",
    ),
    (
        "4",
        "Pasta Alfredo",
        "Pasta",
        "$11.99",
        110,
        "https://images.unsplash.com/photo-1542108339-4d5af99020f7?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8OHx8UGFzdGElMjBBbGZyZWRvfGVufDB8fDB8fHww",
    ),
    (
        "5",
        "Sushi Rolls",
        "Japanese",
        "$14.99",
        150,
        "https://plus.unsplash.com/premium_photo-1712949154611-6fd79879f884?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8NXx8U3VzaGklMjBSb2xsc3xlbnwwfHwwfHx8MA%3D%3D",
    ),
];

/// Number of rows in the basic seed
const BASIC_ROW_COUNT: u32 = 4;

/// The five food-menu rows
pub fn menu_seed() -> Vec<ListItem> {
    MENU_ROWS
        .iter()
        .map(|(id, name, category, price, likes, image)| ListItem {
            id: (*id).to_string(),
            name: (*name).to_string(),
            category: Some((*category).to_string()),
            price: Some((*price).to_string()),
            likes: Some(*likes),
            image: Some((*image).to_string()),
        })
        .collect()
}

/// The four generic rows
pub fn basic_seed() -> Vec<ListItem> {
    (1..=BASIC_ROW_COUNT)
        .map(|n| ListItem::basic(n.to_string(), format!("Item {}", n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::has_unique_ids;

    #[test]
    fn test_seeds_have_unique_ids() {
        assert!(has_unique_ids(&menu_seed()));
        assert!(has_unique_ids(&basic_seed()));
    }

    #[test]
    fn test_menu_seed_table() {
        let seed = menu_seed();
        assert_eq!(seed.len(), 5);

        let ids: Vec<&str> = seed.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);

        assert_eq!(seed[0].name, "Margherita Pizza");
        assert_eq!(seed[4].name, "Sushi Rolls");
        assert_eq!(seed[4].category.as_deref(), Some("Japanese"));

        let likes: Vec<u32> = seed.iter().filter_map(|item| item.likes).collect();
        assert_eq!(likes, [120, 95, 80, 110, 150]);
    }

    #[test]
    fn test_basic_seed_table() {
        let seed = basic_seed();
        assert_eq!(seed.len(), 4);
        assert_eq!(seed[0].id, "1");
        assert_eq!(seed[0].name, "Item 1");
        assert_eq!(seed[3].name, "Item 4");
        assert!(seed.iter().all(|item| item.likes.is_none() && item.image.is_none()));
    }
}
