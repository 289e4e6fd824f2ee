pub mod blurring;
pub mod imaging;
pub mod pipeline;
pub mod scanning;
pub mod shared;
