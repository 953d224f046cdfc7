//! Endpoints of VPSA Object Storage (VPSAOS).

pub mod accounts;
