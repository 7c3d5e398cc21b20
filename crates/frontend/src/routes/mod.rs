pub mod history;
pub mod navigator;
pub mod route;
pub mod router;
pub mod routes;
pub mod view;

pub use history::{BrowserHistory, HistoryBackend};
pub use navigator::Navigator;
pub use route::{initial_route, parse_path, Page, Route, RouteError};
pub use router::Router;
pub use view::{resolve_view, PageView};
