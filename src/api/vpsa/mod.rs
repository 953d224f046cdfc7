//! Endpoints of the VPSA block storage array.

pub mod drives;
pub mod logs;
