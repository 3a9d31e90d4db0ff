pub mod partitioner;
pub mod sizer;
