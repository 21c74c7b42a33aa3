pub mod activity;
pub mod camera;
pub mod catalog;
pub mod constants;
pub mod device;
pub mod drag;
pub mod loading;
pub mod selection;
pub mod share;
pub mod storage;
pub mod store;

pub use activity::{time_until, ActivityEvent, ActivityTimer};
pub use camera::{apply_view_action, OrbitAngles, OrbitControls, ViewAction};
pub use catalog::{Catalog, Category, IconId, Item};
pub use device::{classify, DeviceClass, DeviceSignals, DeviceWatcher, LayoutMode};
pub use drag::{split_percent, DragScrollController, ScrollStrip, SplitResizeController, StripId};
pub use loading::{progress_after, LoadingProgress, LoadingStage};
pub use selection::SelectionController;
pub use share::{share_or_copy, ShareError, ShareHost, ShareOutcome, ShareRequest};
pub use storage::{MemoryStorage, NoStorage, SnapshotStorage, StorageError};
pub use store::{Mutation, PendingChanges, Snapshot, Store, SubscriptionId};
