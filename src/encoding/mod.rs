pub mod one_hot;

pub use one_hot::{decode, encode, OneHotEncoder};
