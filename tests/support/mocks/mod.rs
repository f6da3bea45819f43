// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod time;

pub use security::{
    CLIENT_ID, CLIENT_SECRET, FailingTokenGenerator, REDIRECT_URI, SequenceTokenGenerator,
    TEST_PASSWORD,
};
pub use time::{ManualClock, fixed_now};
