pub mod add;
pub mod blocks;
pub mod export;
pub mod init;

pub use add::{add, AddArgs};
pub use blocks::blocks;
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
