pub mod hub;
pub mod sessionctx;
