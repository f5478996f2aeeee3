pub use self::list::{ResourceListView, daemon_set_view};
pub use self::status::{ResourceStatus, StatusBinding, StatusBindings};

pub mod column;

mod list;
mod status;
