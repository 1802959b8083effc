//! Shareable plan links
//!
//! A plan travels in a URL as base64 of its JSON. The codec lives in
//! [`codec`]; [`link`] builds and picks apart the `/share?data=...` URLs.

pub mod codec;
pub mod link;

pub use codec::{decode_plan, encode_plan};
pub use link::{
    extract_share_data, share_url, MISSING_SHARE_DATA, SHARE_PATH, SHARE_QUERY_PARAM,
};
