mod view;

pub use view::UploadPage;
