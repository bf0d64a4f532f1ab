//! # Demo Data
//!
//! A small fixed catalog for trying the menu without typing products in.
//!
//! Product ids are `{category}{index:02}`: category 1 is beverages,
//! 2 snacks, 3 dairy. Prices run from $0.99 upward in fixed steps and
//! stock cycles through 0..=24, so some demo products are sold out.
//!
//! Everything here passes `validate_product` / `validate_customer`.

use shopkeep_core::{Customer, Money, Product};

const CATEGORIES: &[(i64, &[&str])] = &[
    (
        1,
        &[
            "Coca-Cola",
            "Sparkling Water",
            "Orange Juice",
            "Iced Tea",
            "Cold Brew Coffee",
        ],
    ),
    (
        2,
        &[
            "Sea Salt Chips",
            "Pretzels",
            "Dark Chocolate Bar",
            "Trail Mix",
            "Oat Cookies",
        ],
    ),
    (
        3,
        &[
            "Whole Milk",
            "Greek Yogurt",
            "Cheddar Cheese",
            "Butter",
            "Eggs Dozen",
        ],
    ),
];

const CUSTOMERS: &[(i64, &str, &str)] = &[
    (1, "Ada Lovelace", "ada@example.com"),
    (2, "Grace Hopper", "grace@example.com"),
    (3, "Alan Turing", "alan@example.org"),
];

/// The demo catalog, ordered by id.
pub fn demo_products() -> Vec<Product> {
    let mut products = Vec::new();
    let mut n: i64 = 0;

    for (category, names) in CATEGORIES {
        for (index, name) in (1..).zip(names.iter()) {
            let id = category * 100 + index;
            let price = Money::from_cents(99 + (n * 137) % 1900);
            let stock = (n * 7) % 25;
            products.push(Product::new(id, *name, price, stock));
            n += 1;
        }
    }

    products
}

/// Demo customers.
pub fn demo_customers() -> Vec<Customer> {
    CUSTOMERS
        .iter()
        .map(|(id, name, email)| Customer::new(*id, *name, *email))
        .collect()
}
