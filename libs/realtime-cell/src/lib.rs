pub mod handlers;
pub mod router;

pub use router::create_realtime_router;
