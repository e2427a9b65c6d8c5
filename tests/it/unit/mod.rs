//! Single-component tests against the public crate surface.

mod resize_tests;
mod selection_tests;
