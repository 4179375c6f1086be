//! Use cases
//!
//! One struct per operation, each a single linear pipeline over the
//! repository port. They hold the repository behind an `Arc` and keep no
//! state between calls, so cloning one per request is cheap.

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

pub use create::CreateProduct;
pub use delete::DeleteProduct;
pub use get_all::GetAllProducts;
pub use get_by_id::GetProductById;
pub use update::UpdateProduct;

#[cfg(test)]
pub(crate) fn keyboard() -> crate::product::Product {
    crate::product::Product::new(
        "Gamer Keyboard",
        "RGB",
        "200.00".parse().unwrap(),
        50,
        "KB-RGB-001",
    )
    .unwrap()
}
