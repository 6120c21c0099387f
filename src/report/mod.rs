// Tue Jan 13 2026 - Alex

pub mod summary;

pub use summary::Reporter;
