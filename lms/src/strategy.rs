pub mod allocation;
pub mod fee;
