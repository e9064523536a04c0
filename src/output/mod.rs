// Output generation module

pub mod markdown;

pub use markdown::*;
