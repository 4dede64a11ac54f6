#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use jb_bind as bind;
pub use jb_json as json;
pub use jb_text as text;

pub use jb_bind::{
    Error, FromJson, ToJson, from_json, from_json_utf16, to_json, to_pretty_json,
};
