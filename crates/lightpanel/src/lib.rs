pub mod api;
pub mod config;
pub mod panel;
pub mod render;
pub mod router;
pub mod store;

pub use config::Config;
pub use config::LogLevel;
pub use panel::DiagramEdge;
pub use panel::ElementaryGroup;
pub use panel::PanelState;
pub use panel::ToggleId;
pub use router::EventRouter;
