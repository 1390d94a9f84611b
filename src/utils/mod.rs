pub mod process;
pub mod progress;

pub use process::ProcessManager;
pub use progress::spinner;
