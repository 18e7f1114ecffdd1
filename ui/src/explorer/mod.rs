mod view;
pub use view::ExplorerView;
