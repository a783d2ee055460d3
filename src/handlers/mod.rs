pub mod meta;
pub mod rooms;
pub mod submissions;
