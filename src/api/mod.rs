//! Clients for the REST management APIs of Zadara VPSA block storage arrays and VPSA Object
//! Storage (VPSAOS). Each endpoint is a free async function taking a [`Transport`], usually a
//! [`Session`], validating its arguments before anything is sent and returning the response either
//! as a JSON value or as JSON text depending on the requested [`ReturnType`].

pub mod client;
pub mod vpsa;
pub mod vpsaos;

pub use client::{dispatch, ApiCall, ApiError, ApiOutput, HttpMethod, Parameters, ReturnType, Transport};

#[cfg(feature = "http-transport")]
pub use client::{ApiClientError, Session};
