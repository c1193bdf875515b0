//! Sample construction-materials listing.
//!
//! Used by the demo binary, benchmarks and tests that want realistic data.

use crate::catalog::Catalog;
use crate::product::Product;

/// The sample listing as raw products, in display order.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Цемент М500 50кг", "Цемент", "Евроцемент")
            .with_prices(320, 450)
            .with_suppliers(12)
            .with_stock(true)
            .with_rating(4.5),
        Product::new(2, "Кирпич керамический полнотелый", "Кирпич", "Боровичи")
            .with_prices(18, 28)
            .with_suppliers(8)
            .with_stock(true)
            .with_rating(4.2),
        Product::new(3, "Доска обрезная 25×150×6000", "Доски", "ЛесТорг")
            .with_prices(850, 1200)
            .with_suppliers(15)
            .with_stock(false)
            .with_rating(3.8),
        Product::new(4, "Перфоратор Makita HR2470", "Инструменты", "Makita")
            .with_prices(8500, 12000)
            .with_suppliers(6)
            .with_stock(true)
            .with_rating(4.8),
        Product::new(5, "Краска водоэмульсионная 10л", "Краски", "Tikkurila")
            .with_prices(1200, 1850)
            .with_suppliers(10)
            .with_stock(true)
            .with_rating(4.0),
        Product::new(6, "Саморезы 3.5×35мм (1000 шт)", "Метизы", "Fixpro")
            .with_prices(180, 290)
            .with_suppliers(14)
            .with_stock(true)
            .with_rating(3.6),
        Product::new(7, "Цемент М400 50кг", "Цемент", "Holcim")
            .with_prices(290, 390)
            .with_suppliers(9)
            .with_stock(false)
            .with_rating(4.1),
        Product::new(8, "Кирпич облицовочный красный", "Кирпич", "Боровичи")
            .with_prices(35, 52)
            .with_suppliers(7)
            .with_stock(true)
            .with_rating(3.4),
        Product::new(9, "Шуруповёрт Bosch GSR 120-LI", "Инструменты", "Bosch")
            .with_prices(5200, 7400)
            .with_suppliers(11)
            .with_stock(false)
            .with_rating(4.6),
        Product::new(10, "Краска фасадная 9л", "Краски", "Tikkurila")
            .with_prices(2100, 2900)
            .with_suppliers(5)
            .with_stock(true)
            .with_rating(4.4),
    ]
}

/// The sample listing as a ready-to-browse catalog.
pub fn sample_catalog() -> Catalog {
    // Static data; covered by `sample_catalog_is_valid`.
    Catalog::new(sample_products()).expect("sample catalog is valid")
}
