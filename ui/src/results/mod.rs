mod table;
pub use table::{DataTable, TableModel};

mod badge;
pub use badge::{BadgeModel, QualityBadge, MAX_QUALITY_GLYPHS, QUALITY_GLYPH};

mod panel;
pub use panel::{ExpandablePanel, PanelState, QueryResultsPanel};
