mod list;

pub use list::ProductsPage;
