mod view;

pub use view::JobsPage;
