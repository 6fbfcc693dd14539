//! Allocation types shared by every module, usable with or without `std`.

#![allow(unused_imports)]

pub(crate) use alloc::{
    borrow::{Cow, ToOwned},
    boxed::Box,
    format,
    string::{String, ToString},
    sync::Arc,
    vec,
    vec::Vec,
};
