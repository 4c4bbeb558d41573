mod ring;

pub use ring::*;
