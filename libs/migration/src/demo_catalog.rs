//! Demo catalog shared by the seed migration and the in-memory backend.

use sea_orm::prelude::Uuid;

/// One seeded product. Prices are whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoProduct {
    pub id: Uuid,
    pub name: &'static str,
    pub description: &'static str,
    pub price: i64,
    pub stock_quantity: i32,
    pub sku: &'static str,
}

const fn demo(
    n: u128,
    name: &'static str,
    description: &'static str,
    price: i64,
    stock_quantity: i32,
    sku: &'static str,
) -> DemoProduct {
    DemoProduct {
        id: Uuid::from_u128(0x019a3c10_0000_7000_8000_000000000000 | n),
        name,
        description,
        price,
        stock_quantity,
        sku,
    }
}

pub const DEMO_PRODUCTS: [DemoProduct; 14] = [
    demo(0x01, "iPhone 15 Pro", "Apple Smartphone 256GB Titanium", 7500, 10, "SKU-IPHONE-15P"),
    demo(0x02, "Samsung Galaxy S24", "Samsung Smartphone AI Features", 4500, 15, "SKU-GALAXY-S24"),
    demo(0x03, "Xiaomi 13T", "Xiaomi Flagship Killer", 3200, 20, "SKU-XIAOMI-13T"),
    demo(0x04, "Motorola Edge 40", "Smartphone intermediário premium", 2100, 12, "SKU-MOTO-EDGE40"),
    demo(0x05, "MacBook Pro M3", "Notebook Apple Apple Silicon", 12000, 5, "SKU-MAC-M3"),
    demo(0x06, "Dell XPS 13", "Ultrabook Windows Premium", 9000, 7, "SKU-DELL-XPS"),
    demo(0x07, "Mouse Logitech MX Master", "Mouse ergonômico wireless", 450, 50, "SKU-MOUSE-MX"),
    demo(0x08, "Teclado Mecânico Keychron", "Teclado mecânico switch brown", 600, 25, "SKU-KEYCHRON-K2"),
    demo(0x09, "Monitor Dell 27 4K", "Monitor UHD USB-C Hub", 2800, 10, "SKU-DELL-27-4K"),
    demo(0x0a, "Webcam Logitech C920", "Webcam Full HD Pro", 350, 40, "SKU-WEBCAM-C920"),
    demo(0x0b, "Headset Gamer HyperX", "Fone surround 7.1", 300, 60, "SKU-HEADSET-HX"),
    demo(0x0c, "Cadeira Gamer DX", "Cadeira ergonômica reclinável", 1500, 8, "SKU-CHAIR-DX"),
    demo(0x0d, "Cabo HDMI 2.1", "Cabo 8K Ultra Speed", 80, 200, "SKU-CABLE-HDMI"),
    demo(0x0e, "Hub USB-C 7-in-1", "Adaptador para MacBook e Windows", 250, 45, "SKU-HUB-USBC"),
];
